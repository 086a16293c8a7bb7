//! Utility modules for drone_log_tools

pub mod visualization;

pub use visualization::{colors, wait_for_close, LineSeries, LineSeries3D, Panel, PanelData, PathStyle, Visualizer};
