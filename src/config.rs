//! TOML configuration shared by the three tools
//!
//! Every key is optional. Lookup order is an explicit `--config` path,
//! then `drone_log_tools.toml` in the working directory, then defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::clock::FixedTimeConfig;
use crate::common::{ToolError, ToolResult};
use crate::plotting::{PoseComparisonConfig, TrajectoryReportConfig};

pub const DEFAULT_CONFIG_FILE: &str = "drone_log_tools.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    #[serde(default)]
    pub trajectory_plot: TrajectoryPlotSection,
    #[serde(default)]
    pub pose_plot: PosePlotSection,
    #[serde(default)]
    pub clock: ClockSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TrajectoryPlotSection {
    pub input: PathBuf,
    pub output: PathBuf,
    pub work_dir: PathBuf,
    pub page_width_in: f64,
    pub page_height_in: f64,
}

impl Default for TrajectoryPlotSection {
    fn default() -> Self {
        let d = TrajectoryReportConfig::default();
        Self {
            input: d.input,
            output: d.output,
            work_dir: d.work_dir,
            page_width_in: d.page_width_in,
            page_height_in: d.page_height_in,
        }
    }
}

impl From<TrajectoryPlotSection> for TrajectoryReportConfig {
    fn from(s: TrajectoryPlotSection) -> Self {
        Self {
            input: s.input,
            output: s.output,
            work_dir: s.work_dir,
            page_width_in: s.page_width_in,
            page_height_in: s.page_height_in,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PosePlotSection {
    pub input: PathBuf,
    pub page_width_in: f64,
    pub page_height_in: f64,
}

impl Default for PosePlotSection {
    fn default() -> Self {
        let d = PoseComparisonConfig::default();
        Self {
            input: d.input,
            page_width_in: d.page_width_in,
            page_height_in: d.page_height_in,
        }
    }
}

impl From<PosePlotSection> for PoseComparisonConfig {
    fn from(s: PosePlotSection) -> Self {
        Self {
            input: s.input,
            page_width_in: s.page_width_in,
            page_height_in: s.page_height_in,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClockSection {
    pub topic: String,
    pub rate_hz: f64,
    /// Send datagrams here instead of printing to stdout
    pub udp_target: Option<String>,
}

impl Default for ClockSection {
    fn default() -> Self {
        let d = FixedTimeConfig::default();
        Self {
            topic: d.topic,
            rate_hz: d.rate_hz,
            udp_target: None,
        }
    }
}

impl From<ClockSection> for FixedTimeConfig {
    fn from(s: ClockSection) -> Self {
        Self {
            topic: s.topic,
            rate_hz: s.rate_hz,
        }
    }
}

impl ToolsConfig {
    pub fn from_toml(contents: &str) -> ToolResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> ToolResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ToolError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Explicit path if given, else the default file if present, else defaults
    pub fn load(explicit: Option<&Path>) -> ToolResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
