//! Common types used throughout drone_log_tools

use nalgebra::{Vector3, Vector4};

/// 3D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    pub fn distance(&self, other: &Point3D) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Drone pose: position plus heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, z: f64, yaw: f64) -> Self {
        Self { x, y, z, yaw }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0, yaw: 0.0 }
    }

    pub fn position(&self) -> Point3D {
        Point3D::new(self.x, self.y, self.z)
    }

    pub fn to_vector(&self) -> Vector4<f64> {
        Vector4::new(self.x, self.y, self.z, self.yaw)
    }
}

impl From<Vector4<f64>> for Pose {
    fn from(v: Vector4<f64>) -> Self {
        Self { x: v[0], y: v[1], z: v[2], yaw: v[3] }
    }
}

/// One row of a multi-trajectory log
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySample {
    /// Kept verbatim so that "1" and "01" stay distinct series
    pub trajectory_id: String,
    pub time: f64,
    pub pose: Pose,
}

impl TrajectorySample {
    pub fn new(trajectory_id: &str, time: f64, pose: Pose) -> Self {
        Self {
            trajectory_id: trajectory_id.to_string(),
            time,
            pose,
        }
    }
}

/// One row of a real-vs-desired pose log
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSample {
    pub time: f64,
    pub real: Pose,
    pub desired: Pose,
}

impl PoseSample {
    pub fn new(time: f64, real: Pose, desired: Pose) -> Self {
        Self { time, real, desired }
    }

    /// Difference desired minus real as [x, y, z, yaw]
    pub fn tracking_error(&self) -> Vector4<f64> {
        self.desired.to_vector() - self.real.to_vector()
    }
}

/// All samples of a single trajectory, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySeries {
    pub trajectory_id: String,
    pub samples: Vec<TrajectorySample>,
}

impl TrajectorySeries {
    pub fn new(trajectory_id: &str) -> Self {
        Self {
            trajectory_id: trajectory_id.to_string(),
            samples: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn push(&mut self, sample: TrajectorySample) {
        self.samples.push(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point3d_distance() {
        let p1 = Point3D::origin();
        let p2 = Point3D::new(2.0, 3.0, 6.0);
        assert!((p1.distance(&p2) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_pose_position() {
        let pose = Pose::new(1.0, 2.0, 3.0, 0.5);
        assert_eq!(pose.position(), Point3D::new(1.0, 2.0, 3.0));
        assert_eq!(Pose::from(pose.to_vector()), pose);
    }

    #[test]
    fn test_pose_sample_tracking_error() {
        let sample = PoseSample::new(
            0.0,
            Pose::new(1.0, 1.0, 1.0, 0.0),
            Pose::new(2.0, 0.5, 1.0, 0.25),
        );
        let err = sample.tracking_error();
        assert_eq!(err, Vector4::new(1.0, -0.5, 0.0, 0.25));
    }
}
