//! Real-vs-desired pose log:
//! `time real_x real_y real_z real_yaw desired_x desired_y desired_z desired_yaw`

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::common::{Pose, PoseSample, ToolResult};
use super::{open_log, parse_f64, read_rows, BlankLines};

pub const POSE_LOG_COLUMNS: usize = 9;

const FIELD_NAMES: [&str; POSE_LOG_COLUMNS] = [
    "time",
    "real_x",
    "real_y",
    "real_z",
    "real_yaw",
    "desired_x",
    "desired_y",
    "desired_z",
    "desired_yaw",
];

/// Read a pose log from disk
pub fn read_pose_log<P: AsRef<Path>>(path: P) -> ToolResult<Vec<PoseSample>> {
    let path = path.as_ref();
    let samples = parse_pose_log(open_log(path)?)?;
    log::info!("Loaded {} pose samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parse pose rows from any reader. A blank line is a short line.
pub fn parse_pose_log<R: Read>(reader: R) -> ToolResult<Vec<PoseSample>> {
    read_rows(reader, POSE_LOG_COLUMNS, BlankLines::Reject, |line_no, fields| {
        let mut v = [0.0; POSE_LOG_COLUMNS];
        for (i, field) in fields.iter().enumerate() {
            v[i] = parse_f64(line_no, FIELD_NAMES[i], field)?;
        }
        Ok(PoseSample::new(
            v[0],
            Pose::new(v[1], v[2], v[3], v[4]),
            Pose::new(v[5], v[6], v[7], v[8]),
        ))
    })
}

/// Write samples in the format read by `read_pose_log`
pub fn write_pose_log<P: AsRef<Path>>(path: P, samples: &[PoseSample]) -> ToolResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for s in samples {
        writeln!(
            out,
            "{} {} {} {} {} {} {} {} {}",
            s.time,
            s.real.x,
            s.real.y,
            s.real.z,
            s.real.yaw,
            s.desired.x,
            s.desired.y,
            s.desired.z,
            s.desired.yaw
        )?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ToolError;

    #[test]
    fn test_parse_by_position() {
        let samples = parse_pose_log("100.5 1 2 3 0.1 4 5 6 0.2\n".as_bytes()).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].time, 100.5);
        assert_eq!(samples[0].real, Pose::new(1.0, 2.0, 3.0, 0.1));
        assert_eq!(samples[0].desired, Pose::new(4.0, 5.0, 6.0, 0.2));
    }

    #[test]
    fn test_short_line_is_fatal() {
        let input = "0 1 2 3 0.1 4 5 6 0.2\n1 1 2 3 0.1 4 5 6\n";
        let err = parse_pose_log(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ToolError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_blank_line_is_fatal() {
        let input = "0 1 2 3 0.1 4 5 6 0.2\n\n1 1 2 3 0.1 4 5 6 0.2\n";
        let err = parse_pose_log(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ToolError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_non_numeric_field_is_fatal() {
        let err = parse_pose_log("0 1 2 3 yaw 4 5 6 0.2\n".as_bytes()).unwrap_err();
        match err {
            ToolError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("real_yaw"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_write_then_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dronepose.log");
        let samples = vec![
            PoseSample::new(10.0, Pose::new(0.0, 0.0, 1.0, 0.0), Pose::new(0.5, 0.0, 1.0, 0.0)),
            PoseSample::new(10.1, Pose::new(0.1, 0.0, 1.0, 0.0), Pose::new(0.5, 0.0, 1.0, 0.0)),
        ];
        write_pose_log(&path, &samples).unwrap();
        assert_eq!(read_pose_log(&path).unwrap(), samples);
    }
}
