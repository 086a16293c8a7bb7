//! Chart descriptions for the multi-trajectory report

use crate::common::{TrajectorySample, TrajectorySeries};
use crate::utils::{colors, LineSeries, PathStyle};

/// Column of a trajectory sample that can be put on an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Time,
    X,
    Y,
    Z,
    Yaw,
}

impl Field {
    pub fn value(&self, sample: &TrajectorySample) -> f64 {
        match self {
            Field::Time => sample.time,
            Field::X => sample.pose.x,
            Field::Y => sample.pose.y,
            Field::Z => sample.pose.z,
            Field::Yaw => sample.pose.yaw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Time => "time",
            Field::X => "posX",
            Field::Y => "posY",
            Field::Z => "posZ",
            Field::Yaw => "yaw",
        }
    }
}

/// Which pair of fields a chart plots and the file stem it is saved under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub name: &'static str,
    pub x: Field,
    pub y: Field,
}

impl ChartSpec {
    pub const fn new(name: &'static str, x: Field, y: Field) -> Self {
        Self { name, x, y }
    }

    /// One connected line per trajectory, colored by series index
    pub fn build(&self, trajectories: &[TrajectorySeries]) -> Chart {
        let series = trajectories
            .iter()
            .enumerate()
            .map(|(i, t)| {
                LineSeries::new(
                    t.samples.iter().map(|s| self.x.value(s)).collect(),
                    t.samples.iter().map(|s| self.y.value(s)).collect(),
                    PathStyle::new(colors::series(i), &t.trajectory_id),
                )
            })
            .collect();

        Chart {
            name: self.name.to_string(),
            x_label: self.x.label().to_string(),
            y_label: self.y.label().to_string(),
            series,
        }
    }
}

/// Charts of the trajectory report, in page order
pub const TRAJECTORY_CHARTS: [ChartSpec; 5] = [
    ChartSpec::new("pos_x", Field::Time, Field::X),
    ChartSpec::new("pos_y", Field::Time, Field::Y),
    ChartSpec::new("pos_z", Field::Time, Field::Z),
    ChartSpec::new("yaw", Field::Time, Field::Yaw),
    ChartSpec::new("pos_xy", Field::X, Field::Y),
];

/// Fully resolved chart, ready for a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub name: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<LineSeries>,
}
