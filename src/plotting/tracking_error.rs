//! Summary of how closely the real pose followed the desired one

use std::fmt;

use nalgebra::Vector4;

use crate::common::{PoseSample, ToolError, ToolResult};

/// Per-axis error statistics, axes ordered x, y, z, yaw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingError {
    pub samples: usize,
    pub rms: Vector4<f64>,
    pub max_abs: Vector4<f64>,
    /// RMS of the Euclidean position error
    pub position_rms: f64,
}

/// Compute tracking statistics over every sample
pub fn tracking_error(samples: &[PoseSample]) -> ToolResult<TrackingError> {
    if samples.is_empty() {
        return Err(ToolError::EmptyLog("no samples to compare".to_string()));
    }

    let n = samples.len() as f64;
    let mut sum_sq = Vector4::zeros();
    let mut max_abs = Vector4::<f64>::zeros();
    let mut position_sum_sq = 0.0;

    for sample in samples {
        let e = sample.tracking_error();
        sum_sq += e.component_mul(&e);
        max_abs = max_abs.sup(&e.abs());
        position_sum_sq += sample.real.position().distance(&sample.desired.position()).powi(2);
    }

    Ok(TrackingError {
        samples: samples.len(),
        rms: (sum_sq / n).map(f64::sqrt),
        max_abs,
        position_rms: (position_sum_sq / n).sqrt(),
    })
}

impl fmt::Display for TrackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} samples, rms x={:.3} y={:.3} z={:.3} yaw={:.3}, max x={:.3} y={:.3} z={:.3} yaw={:.3}, position rms={:.3}",
            self.samples,
            self.rms[0],
            self.rms[1],
            self.rms[2],
            self.rms[3],
            self.max_abs[0],
            self.max_abs[1],
            self.max_abs[2],
            self.max_abs[3],
            self.position_rms
        )
    }
}
