//! drone_log_tools - flight log plotting and clock synchronization tools
//!
//! This crate backs three small binaries: a multi-trajectory PDF report,
//! a real vs desired pose comparison viewer, and a publisher that
//! repeats one captured timestamp at a fixed rate.

// Core modules
pub mod common;
pub mod config;
pub mod utils;

// Tool modules
pub mod clock;
pub mod logfile;
pub mod plotting;

// Re-export common types for convenience
pub use common::{Point3D, Pose, PoseSample, TrajectorySample, TrajectorySeries};
pub use common::{ChartRenderer, StampPublisher};
pub use common::{ToolError, ToolResult};
pub use config::ToolsConfig;

/// Initialize env_logger with an `info` default filter
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}
