//! Whitespace-delimited flight logs
//!
//! Both log formats are plain text with one sample per line, no header
//! and a fixed number of columns. The trajectory log ignores blank lines,
//! the pose log rejects them. Any line with the wrong column count or a
//! non-numeric value aborts the read.

pub mod pose_log;
pub mod trajectory_log;

pub use pose_log::{parse_pose_log, read_pose_log, write_pose_log, POSE_LOG_COLUMNS};
pub use trajectory_log::{
    group_by_trajectory, parse_trajectory_log, read_trajectory_log, write_trajectory_log,
    TRAJECTORY_LOG_COLUMNS,
};

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::common::{ToolError, ToolResult};

/// What a log format does with empty or whitespace-only lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlankLines {
    Skip,
    Reject,
}

/// Parse every line of `reader` with `parse_row`.
///
/// `parse_row` receives the 1-based line number and exactly `columns` fields.
pub(crate) fn read_rows<R, T, F>(
    reader: R,
    columns: usize,
    blank_lines: BlankLines,
    mut parse_row: F,
) -> ToolResult<Vec<T>>
where
    R: Read,
    F: FnMut(usize, &[&str]) -> ToolResult<T>,
{
    let mut rows = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() && blank_lines == BlankLines::Skip {
            continue;
        }
        if fields.len() != columns {
            return Err(ToolError::parse(
                line_no,
                format!("expected {} columns, found {}", columns, fields.len()),
            ));
        }
        rows.push(parse_row(line_no, &fields)?);
    }
    Ok(rows)
}

pub(crate) fn open_log(path: &Path) -> ToolResult<File> {
    File::open(path).map_err(|e| {
        log::error!("Cannot open {}: {}", path.display(), e);
        ToolError::Io(e)
    })
}

pub(crate) fn parse_f64(line_no: usize, name: &str, field: &str) -> ToolResult<f64> {
    field
        .parse::<f64>()
        .map_err(|e| ToolError::parse(line_no, format!("column {}: '{}' ({})", name, field, e)))
}
