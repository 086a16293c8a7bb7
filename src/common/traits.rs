//! Common traits defining the seams between parsing, rendering and publishing

use std::path::Path;

use crate::clock::Stamp;
use crate::common::error::ToolResult;
use crate::plotting::Chart;

/// Trait for backends that turn a chart description into a document on disk
pub trait ChartRenderer {
    /// Render a single chart into the file at `path`
    fn render(&mut self, chart: &Chart, path: &Path) -> ToolResult<()>;
}

/// Trait for sinks that carry timestamps to a named channel
pub trait StampPublisher {
    /// Fire-and-forget publish of one stamp on `topic`
    fn publish(&mut self, topic: &str, stamp: &Stamp) -> ToolResult<()>;
}

impl<T: StampPublisher + ?Sized> StampPublisher for Box<T> {
    fn publish(&mut self, topic: &str, stamp: &Stamp) -> ToolResult<()> {
        (**self).publish(topic, stamp)
    }
}
