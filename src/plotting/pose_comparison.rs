//! Real vs desired pose figures
//!
//! Figure 1 is a 2x3 grid: x, y, z and yaw over time plus the x/y track.
//! Figure 2 overlays both trajectories in 3D.

use std::path::{Path, PathBuf};

use itertools::multiunzip;
use ordered_float::OrderedFloat;

use crate::common::{PoseSample, ToolError, ToolResult};
use crate::logfile::pose_log::read_pose_log;
use crate::utils::{colors, wait_for_close, Panel, PathStyle, Visualizer};
use super::tracking_error::{tracking_error, TrackingError};

const TIME_LABEL: &str = "time in seconds";

/// Shift timestamps so that the earliest sample is at zero
pub fn normalize_time(samples: &mut [PoseSample]) -> ToolResult<()> {
    let min_time = samples
        .iter()
        .map(|s| OrderedFloat(s.time))
        .min()
        .ok_or_else(|| ToolError::EmptyLog("pose log has no samples".to_string()))?
        .into_inner();

    for sample in samples.iter_mut() {
        sample.time -= min_time;
    }
    Ok(())
}

/// Column-major view of a pose log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseColumns {
    pub time: Vec<f64>,
    pub real_x: Vec<f64>,
    pub real_y: Vec<f64>,
    pub real_z: Vec<f64>,
    pub real_yaw: Vec<f64>,
    pub desired_x: Vec<f64>,
    pub desired_y: Vec<f64>,
    pub desired_z: Vec<f64>,
    pub desired_yaw: Vec<f64>,
}

impl PoseColumns {
    pub fn from_samples(samples: &[PoseSample]) -> Self {
        let (time, real_x, real_y, real_z, real_yaw): (Vec<_>, Vec<_>, Vec<_>, Vec<_>, Vec<_>) =
            multiunzip(
                samples
                    .iter()
                    .map(|s| (s.time, s.real.x, s.real.y, s.real.z, s.real.yaw)),
            );
        let (desired_x, desired_y, desired_z, desired_yaw): (Vec<_>, Vec<_>, Vec<_>, Vec<_>) =
            multiunzip(
                samples
                    .iter()
                    .map(|s| (s.desired.x, s.desired.y, s.desired.z, s.desired.yaw)),
            );

        Self {
            time,
            real_x,
            real_y,
            real_z,
            real_yaw,
            desired_x,
            desired_y,
            desired_z,
            desired_yaw,
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

fn real_style() -> PathStyle {
    PathStyle::new(colors::REAL, "real")
}

fn desired_style() -> PathStyle {
    PathStyle::new(colors::DESIRED, "desired")
}

fn overlay(x_label: &str, y_label: &str, real: (&[f64], &[f64]), desired: (&[f64], &[f64])) -> ToolResult<Panel> {
    let mut panel = Panel::planar(x_label, y_label);
    panel.plot_path_xy(real.0, real.1, &real_style())?;
    panel.plot_path_xy(desired.0, desired.1, &desired_style())?;
    Ok(panel)
}

/// The five planar panels, in grid order
pub fn comparison_panels(c: &PoseColumns) -> ToolResult<Vec<Panel>> {
    Ok(vec![
        overlay(TIME_LABEL, "x", (&c.time, &c.real_x), (&c.time, &c.desired_x))?,
        overlay(TIME_LABEL, "y", (&c.time, &c.real_y), (&c.time, &c.desired_y))?,
        overlay(TIME_LABEL, "z", (&c.time, &c.real_z), (&c.time, &c.desired_z))?,
        overlay(TIME_LABEL, "yaw", (&c.time, &c.real_yaw), (&c.time, &c.desired_yaw))?,
        overlay("x", "y", (&c.real_x, &c.real_y), (&c.desired_x, &c.desired_y))?,
    ])
}

/// Both trajectories in space
pub fn trajectory_3d(c: &PoseColumns) -> ToolResult<Panel> {
    let mut panel = Panel::spatial("X", "Y", "Z");
    panel.plot_path_xyz(
        &c.real_x,
        &c.real_y,
        &c.real_z,
        &PathStyle::new(colors::REAL, "real trajectory"),
    )?;
    panel.plot_path_xyz(
        &c.desired_x,
        &c.desired_y,
        &c.desired_z,
        &PathStyle::new(colors::DESIRED, "desired trajectory"),
    )?;
    Ok(panel)
}

/// Configuration for the pose comparison
#[derive(Debug, Clone, PartialEq)]
pub struct PoseComparisonConfig {
    pub input: PathBuf,
    /// Page size used by `save`, in inches
    pub page_width_in: f64,
    pub page_height_in: f64,
}

impl Default for PoseComparisonConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("dronepose.log"),
            page_width_in: 12.0,
            page_height_in: 8.0,
        }
    }
}

/// The two comparison figures of one pose log
pub struct PoseComparison {
    config: PoseComparisonConfig,
    columns: PoseColumns,
    tracking: TrackingError,
    grid: Visualizer,
    spatial: Visualizer,
}

impl PoseComparison {
    /// Load, normalize and lay out the configured log
    pub fn load(config: PoseComparisonConfig) -> ToolResult<Self> {
        let samples = read_pose_log(&config.input)?;
        Self::from_samples(config, samples)
    }

    pub fn from_samples(config: PoseComparisonConfig, mut samples: Vec<PoseSample>) -> ToolResult<Self> {
        normalize_time(&mut samples)?;
        let tracking = tracking_error(&samples)?;
        let columns = PoseColumns::from_samples(&samples);

        let title = config.input.display().to_string();
        let mut grid = Visualizer::new();
        grid.set_title(&title).set_layout(2, 3);
        for panel in comparison_panels(&columns)? {
            grid.add_panel(panel);
        }

        let mut spatial = Visualizer::new();
        spatial.add_panel(trajectory_3d(&columns)?);

        Ok(Self {
            config,
            columns,
            tracking,
            grid,
            spatial,
        })
    }

    pub fn columns(&self) -> &PoseColumns {
        &self.columns
    }

    pub fn tracking_error(&self) -> &TrackingError {
        &self.tracking
    }

    pub fn grid(&self) -> &Visualizer {
        &self.grid
    }

    pub fn spatial(&self) -> &Visualizer {
        &self.spatial
    }

    /// Display both figures and block until their windows are closed
    pub fn show(&self) -> ToolResult<()> {
        let sentinels = vec![self.grid.show()?, self.spatial.show()?];
        log::info!("Waiting for the plot windows to be closed");
        wait_for_close(sentinels)
    }

    /// Write both figures into `dir` instead of displaying them
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> ToolResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let grid_path = dir.join("pose_grid.pdf");
        let spatial_path = dir.join("trajectory_3d.pdf");
        let (w, h) = (self.config.page_width_in, self.config.page_height_in);
        self.grid.save_pdf(&grid_path, w, h)?;
        self.spatial.save_pdf(&spatial_path, w, h)?;
        Ok(vec![grid_path, spatial_path])
    }
}
