//! Visualization utilities for drone_log_tools
//!
//! Figures are described as panels of line series first and handed to
//! gnuplot only when saved or shown, so the same description can be
//! written to a PDF or opened in an interactive window.

use std::path::Path;

use gnuplot::{AxesCommon, Caption, CloseSentinel, Color, Figure, LineWidth};

use crate::common::{ToolError, ToolResult};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const BLUE: &str = "#0000FF";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const REAL: &str = BLUE;
    pub const DESIRED: &str = RED;

    /// Hue wheel used for per-trajectory series
    pub const SERIES: [&str; 8] = [
        "#F8766D", "#00BFC4", "#7CAE00", "#C77CFF", "#CD9600", "#00A9FF", "#FF61C3", GRAY,
    ];

    /// Color of the `index`-th series, cycling through `SERIES`
    pub fn series(index: usize) -> &'static str {
        SERIES[index % SERIES.len()]
    }
}

/// Style for path rendering
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 1.5,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: colors::BLACK.to_string(),
            line_width: 1.5,
            caption: String::new(),
        }
    }
}

/// Connected 2D polyline
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub style: PathStyle,
}

impl LineSeries {
    pub fn new(x: Vec<f64>, y: Vec<f64>, style: PathStyle) -> Self {
        assert_eq!(x.len(), y.len());
        Self { x, y, style }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }
}

/// Connected 3D polyline
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries3D {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub style: PathStyle,
}

impl LineSeries3D {
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, style: PathStyle) -> Self {
        assert!(x.len() == y.len() && y.len() == z.len());
        Self { x, y, z, style }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelData {
    Planar(Vec<LineSeries>),
    Spatial(Vec<LineSeries3D>),
}

/// One set of axes inside a figure
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub z_label: String,
    pub data: PanelData,
}

impl Panel {
    /// Create an empty 2D panel
    pub fn planar(x_label: &str, y_label: &str) -> Self {
        Self {
            title: String::new(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            z_label: String::new(),
            data: PanelData::Planar(Vec::new()),
        }
    }

    /// Create an empty 3D panel
    pub fn spatial(x_label: &str, y_label: &str, z_label: &str) -> Self {
        Self {
            title: String::new(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            z_label: z_label.to_string(),
            data: PanelData::Spatial(Vec::new()),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Add a path to a 2D panel
    pub fn plot_path_xy(&mut self, x: &[f64], y: &[f64], style: &PathStyle) -> ToolResult<&mut Self> {
        match &mut self.data {
            PanelData::Planar(series) => {
                series.push(LineSeries::new(x.to_vec(), y.to_vec(), style.clone()));
                Ok(self)
            }
            PanelData::Spatial(_) => Err(ToolError::Visualization(
                "cannot add a 2D path to a 3D panel".to_string(),
            )),
        }
    }

    /// Add a path to a 3D panel
    pub fn plot_path_xyz(
        &mut self,
        x: &[f64],
        y: &[f64],
        z: &[f64],
        style: &PathStyle,
    ) -> ToolResult<&mut Self> {
        match &mut self.data {
            PanelData::Spatial(series) => {
                series.push(LineSeries3D::new(x.to_vec(), y.to_vec(), z.to_vec(), style.clone()));
                Ok(self)
            }
            PanelData::Planar(_) => Err(ToolError::Visualization(
                "cannot add a 3D path to a 2D panel".to_string(),
            )),
        }
    }

    /// Point count of every series, in drawing order
    pub fn series_lengths(&self) -> Vec<usize> {
        match &self.data {
            PanelData::Planar(s) => s.iter().map(LineSeries::len).collect(),
            PanelData::Spatial(s) => s.iter().map(LineSeries3D::len).collect(),
        }
    }

    fn draw(&self, figure: &mut Figure) {
        match &self.data {
            PanelData::Planar(series) => {
                let axes = figure.axes2d();
                if !self.title.is_empty() {
                    axes.set_title(&self.title, &[]);
                }
                axes.set_x_label(&self.x_label, &[]);
                axes.set_y_label(&self.y_label, &[]);
                for s in series {
                    axes.lines(&s.x, &s.y, &[
                        Caption(s.style.caption.as_str()),
                        Color(s.style.color.as_str()),
                        LineWidth(s.style.line_width),
                    ]);
                }
            }
            PanelData::Spatial(series) => {
                let axes = figure.axes3d();
                if !self.title.is_empty() {
                    axes.set_title(&self.title, &[]);
                }
                axes.set_x_label(&self.x_label, &[]);
                axes.set_y_label(&self.y_label, &[]);
                axes.set_z_label(&self.z_label, &[]);
                for s in series {
                    axes.lines(&s.x, &s.y, &s.z, &[
                        Caption(s.style.caption.as_str()),
                        Color(s.style.color.as_str()),
                        LineWidth(s.style.line_width),
                    ]);
                }
            }
        }
    }
}

/// A figure made of one or more panels
#[derive(Debug, Clone, Default)]
pub struct Visualizer {
    title: String,
    layout: Option<(usize, usize)>,
    panels: Vec<Panel>,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the figure title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Arrange panels on a rows x columns grid, filled row by row
    pub fn set_layout(&mut self, rows: usize, columns: usize) -> &mut Self {
        self.layout = Some((rows, columns));
        self
    }

    pub fn layout(&self) -> Option<(usize, usize)> {
        self.layout
    }

    pub fn add_panel(&mut self, panel: Panel) -> &mut Self {
        self.panels.push(panel);
        self
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    fn build_figure(&self) -> Figure {
        let mut figure = Figure::new();
        if let Some((rows, columns)) = self.layout {
            figure.set_multiplot_layout(rows, columns);
        }
        if !self.title.is_empty() {
            figure.set_title(&self.title);
        }
        for panel in &self.panels {
            panel.draw(&mut figure);
        }
        figure
    }

    /// Save the figure as a single page PDF.
    ///
    /// Returns once gnuplot has exited, so the file is complete.
    pub fn save_pdf<P: AsRef<Path>>(&self, path: P, width_in: f64, height_in: f64) -> ToolResult<()> {
        let path = path.as_ref();
        let mut figure = self.build_figure();
        figure
            .save_to_pdf(path, width_in as f32, height_in as f32)
            .map_err(|e| ToolError::Visualization(e.to_string()))?;
        log::debug!("Rendered {}", path.display());
        Ok(())
    }

    /// Open the figure in an interactive window without waiting for it.
    ///
    /// Dropping the returned sentinel blocks until the window is closed;
    /// open every figure first, then pass the sentinels to [`wait_for_close`].
    pub fn show(&self) -> ToolResult<CloseSentinel> {
        let mut figure = self.build_figure();
        figure
            .show()
            .map_err(|e| ToolError::Visualization(e.to_string()))
    }
}

/// Block until every shown window has been closed
pub fn wait_for_close(sentinels: Vec<CloseSentinel>) -> ToolResult<()> {
    for mut sentinel in sentinels {
        let status = sentinel.wait()?;
        if !status.success() {
            log::warn!("gnuplot exited with {}", status);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_palette_cycles() {
        assert_eq!(colors::series(0), colors::series(colors::SERIES.len()));
        assert_ne!(colors::series(0), colors::series(1));
    }

    #[test]
    fn test_path_style() {
        let style = PathStyle::new(colors::RED, "desired").with_line_width(3.0);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.color, colors::RED);
    }

    #[test]
    fn test_panel_rejects_mismatched_dimension() {
        let mut planar = Panel::planar("x", "y");
        assert!(planar
            .plot_path_xyz(&[0.0], &[0.0], &[0.0], &PathStyle::default())
            .is_err());
        planar.plot_path_xy(&[0.0, 1.0], &[1.0, 2.0], &PathStyle::default()).unwrap();
        assert_eq!(planar.series_lengths(), vec![2]);

        let mut spatial = Panel::spatial("X", "Y", "Z");
        assert!(spatial.plot_path_xy(&[0.0], &[0.0], &PathStyle::default()).is_err());
    }

    #[test]
    fn test_visualizer_layout() {
        let mut vis = Visualizer::new();
        vis.set_layout(2, 3).add_panel(Panel::planar("t", "x"));
        assert_eq!(vis.layout(), Some((2, 3)));
        assert_eq!(vis.panels().len(), 1);
    }
}
