//! Multi-trajectory log: `index time x y z yaw`

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use itertools::Itertools;

use crate::common::{Pose, ToolResult, TrajectorySample, TrajectorySeries};
use super::{open_log, parse_f64, read_rows, BlankLines};

pub const TRAJECTORY_LOG_COLUMNS: usize = 6;

/// Read a trajectory log from disk
pub fn read_trajectory_log<P: AsRef<Path>>(path: P) -> ToolResult<Vec<TrajectorySample>> {
    let path = path.as_ref();
    let samples = parse_trajectory_log(open_log(path)?)?;
    log::info!("Loaded {} trajectory samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parse trajectory rows from any reader
pub fn parse_trajectory_log<R: Read>(reader: R) -> ToolResult<Vec<TrajectorySample>> {
    read_rows(reader, TRAJECTORY_LOG_COLUMNS, BlankLines::Skip, |line_no, f| {
        Ok(TrajectorySample::new(
            f[0],
            parse_f64(line_no, "time", f[1])?,
            Pose::new(
                parse_f64(line_no, "x", f[2])?,
                parse_f64(line_no, "y", f[3])?,
                parse_f64(line_no, "z", f[4])?,
                parse_f64(line_no, "yaw", f[5])?,
            ),
        ))
    })
}

/// Split samples into one series per trajectory id.
///
/// Series appear in order of the first row of each id; rows inside a
/// series keep file order.
pub fn group_by_trajectory(samples: &[TrajectorySample]) -> Vec<TrajectorySeries> {
    samples
        .iter()
        .map(|s| s.trajectory_id.as_str())
        .unique()
        .map(|id| TrajectorySeries {
            trajectory_id: id.to_string(),
            samples: samples
                .iter()
                .filter(|s| s.trajectory_id == id)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Write samples in the format read by `read_trajectory_log`
pub fn write_trajectory_log<P: AsRef<Path>>(path: P, samples: &[TrajectorySample]) -> ToolResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for s in samples {
        writeln!(
            out,
            "{} {} {} {} {} {}",
            s.trajectory_id, s.time, s.pose.x, s.pose.y, s.pose.z, s.pose.yaw
        )?;
    }
    out.flush()?;
    Ok(())
}
