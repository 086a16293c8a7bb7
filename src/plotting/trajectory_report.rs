//! Multi-trajectory PDF report
//!
//! Renders the five declared charts of a trajectory log to temporary
//! PDFs, merges them into one document and removes the temporaries.

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::{ChartRenderer, ToolError, ToolResult, TrajectorySample};
use crate::logfile::trajectory_log::{group_by_trajectory, read_trajectory_log};
use crate::utils::{Panel, Visualizer};
use super::chart::{Chart, ChartSpec, TRAJECTORY_CHARTS};
use super::pdf_merge::merge_pdfs;

/// Configuration for the trajectory report
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryReportConfig {
    /// Input log
    pub input: PathBuf,
    /// Merged output document
    pub output: PathBuf,
    /// Directory receiving the per-chart temporaries
    pub work_dir: PathBuf,
    /// Page size in inches
    pub page_width_in: f64,
    pub page_height_in: f64,
}

impl Default for TrajectoryReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("trajectories.log"),
            output: PathBuf::from("result.pdf"),
            work_dir: PathBuf::from("."),
            page_width_in: 8.0,
            page_height_in: 6.0,
        }
    }
}

/// Renders charts to PDF with gnuplot
#[derive(Debug, Clone)]
pub struct GnuplotPdfRenderer {
    pub width_in: f64,
    pub height_in: f64,
}

impl GnuplotPdfRenderer {
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self { width_in, height_in }
    }
}

impl ChartRenderer for GnuplotPdfRenderer {
    fn render(&mut self, chart: &Chart, path: &Path) -> ToolResult<()> {
        let mut panel = Panel::planar(&chart.x_label, &chart.y_label).with_title(&chart.name);
        for series in &chart.series {
            panel.plot_path_xy(&series.x, &series.y, &series.style)?;
        }
        let mut vis = Visualizer::new();
        vis.add_panel(panel);
        vis.save_pdf(path, self.width_in, self.height_in)
    }
}

/// Trajectory report generator
pub struct TrajectoryReport<R: ChartRenderer> {
    config: TrajectoryReportConfig,
    charts: Vec<ChartSpec>,
    renderer: R,
}

impl TrajectoryReport<GnuplotPdfRenderer> {
    /// Create a report rendered with gnuplot
    pub fn with_gnuplot(config: TrajectoryReportConfig) -> Self {
        let renderer = GnuplotPdfRenderer::new(config.page_width_in, config.page_height_in);
        Self::new(config, renderer)
    }
}

impl<R: ChartRenderer> TrajectoryReport<R> {
    pub fn new(config: TrajectoryReportConfig, renderer: R) -> Self {
        Self {
            config,
            charts: TRAJECTORY_CHARTS.to_vec(),
            renderer,
        }
    }

    pub fn config(&self) -> &TrajectoryReportConfig {
        &self.config
    }

    /// Temporary file of every chart, in page order
    pub fn temporary_files(&self) -> Vec<PathBuf> {
        self.charts
            .iter()
            .map(|c| self.config.work_dir.join(format!("{}.pdf", c.name)))
            .collect()
    }

    /// Read the configured log and write the merged report
    pub fn generate(&mut self) -> ToolResult<PathBuf> {
        let samples = read_trajectory_log(&self.config.input)?;
        self.generate_from(&samples)
    }

    /// Write the merged report for already loaded samples
    pub fn generate_from(&mut self, samples: &[TrajectorySample]) -> ToolResult<PathBuf> {
        // gnuplot cannot draw a chart without series
        if samples.is_empty() {
            return Err(ToolError::EmptyLog(format!(
                "{} has no trajectory samples",
                self.config.input.display()
            )));
        }
        let trajectories = group_by_trajectory(samples);
        log::info!(
            "Plotting {} samples across {} trajectories",
            samples.len(),
            trajectories.len()
        );

        let temporaries = self.temporary_files();
        for (spec, path) in self.charts.iter().zip(temporaries.iter()) {
            let chart = spec.build(&trajectories);
            self.renderer.render(&chart, path)?;
        }

        merge_pdfs(&temporaries, &self.config.output)?;

        for path in &temporaries {
            fs::remove_file(path)?;
            log::debug!("Removed {}", path.display());
        }

        log::info!("Wrote {}", self.config.output.display());
        Ok(self.config.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logfile::trajectory_log::write_trajectory_log;
    use crate::plotting::pdf_merge::page_count;
    use crate::plotting::pdf_merge::tests::{page_labels, write_labeled_page};
    use crate::common::Pose;

    /// Writes one labeled page per chart and records what it was asked to draw
    struct LabelRenderer {
        rendered: Vec<Chart>,
    }

    impl ChartRenderer for LabelRenderer {
        fn render(&mut self, chart: &Chart, path: &Path) -> ToolResult<()> {
            write_labeled_page(path, &chart.name);
            self.rendered.push(chart.clone());
            Ok(())
        }
    }

    struct FailingRenderer;

    impl ChartRenderer for FailingRenderer {
        fn render(&mut self, _chart: &Chart, _path: &Path) -> ToolResult<()> {
            Err(ToolError::Visualization("gnuplot not found".to_string()))
        }
    }

    fn two_trajectories() -> Vec<TrajectorySample> {
        (0..10)
            .flat_map(|i| {
                let t = i as f64 * 0.1;
                vec![
                    TrajectorySample::new("0", t, Pose::new(t, t * 2.0, 1.0, 0.0)),
                    TrajectorySample::new("1", t, Pose::new(-t, t, 1.5, 0.2)),
                ]
            })
            .collect()
    }

    fn config_in(dir: &Path) -> TrajectoryReportConfig {
        TrajectoryReportConfig {
            input: dir.join("trajectories.log"),
            output: dir.join("result.pdf"),
            work_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_report_has_five_pages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_trajectory_log(&config.input, &two_trajectories()).unwrap();

        let mut report = TrajectoryReport::new(config, LabelRenderer { rendered: Vec::new() });
        let output = report.generate().unwrap();

        assert_eq!(page_count(&output).unwrap(), 5);
        assert_eq!(
            page_labels(&output),
            vec!["pos_x", "pos_y", "pos_z", "yaw", "pos_xy"]
        );
        for chart in &report.renderer.rendered {
            assert_eq!(chart.series.len(), 2);
        }
    }

    #[test]
    fn test_report_removes_temporaries() {
        let dir = tempfile::tempdir().unwrap();
        let mut report = TrajectoryReport::new(config_in(dir.path()), LabelRenderer { rendered: Vec::new() });
        report.generate_from(&two_trajectories()).unwrap();

        for path in report.temporary_files() {
            assert!(!path.exists(), "{} left behind", path.display());
        }
        let remaining: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(remaining, vec!["result.pdf".to_string()]);
    }

    #[test]
    fn test_malformed_log_produces_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, "0 0.0 0.0 0.0 1.0 0.0\n1 0.0 0.0\n").unwrap();

        let mut report = TrajectoryReport::new(config.clone(), LabelRenderer { rendered: Vec::new() });
        let err = report.generate().unwrap_err();
        assert!(matches!(err, ToolError::Parse { line: 2, .. }));
        assert!(!config.output.exists());
        assert!(report.renderer.rendered.is_empty());
    }

    #[test]
    fn test_empty_log_is_rejected_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, "\n").unwrap();

        let mut report = TrajectoryReport::new(config.clone(), LabelRenderer { rendered: Vec::new() });
        assert!(matches!(report.generate(), Err(ToolError::EmptyLog(_))));
        assert!(report.renderer.rendered.is_empty());
        assert!(!config.output.exists());
    }

    #[test]
    fn test_renderer_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut report = TrajectoryReport::new(config.clone(), FailingRenderer);
        assert!(report.generate_from(&two_trajectories()).is_err());
        assert!(!config.output.exists());
    }

    #[test]
    #[ignore = "requires the gnuplot binary"]
    fn test_gnuplot_report_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_trajectory_log(&config.input, &two_trajectories()).unwrap();

        let output = TrajectoryReport::with_gnuplot(config).generate().unwrap();
        assert_eq!(page_count(&output).unwrap(), 5);
    }
}
