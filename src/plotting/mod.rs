//! Plotting of trajectory and pose logs
//!
//! - `chart`: chart descriptions for the multi-trajectory report
//! - `trajectory_report`: five-page PDF report of a trajectory log
//! - `pose_comparison`: real vs desired figures of a pose log
//! - `pdf_merge`: page concatenation of PDF documents
//! - `tracking_error`: real vs desired error statistics

pub mod chart;
pub mod pdf_merge;
pub mod pose_comparison;
pub mod tracking_error;
pub mod trajectory_report;

pub use chart::{Chart, ChartSpec, Field, TRAJECTORY_CHARTS};
pub use pdf_merge::{merge_pdfs, page_count};
pub use pose_comparison::{normalize_time, PoseColumns, PoseComparison, PoseComparisonConfig};
pub use tracking_error::{tracking_error, TrackingError};
pub use trajectory_report::{GnuplotPdfRenderer, TrajectoryReport, TrajectoryReportConfig};
