//! Fixed-time clock publishing
//!
//! `FixedTimePublisher` captures one timestamp at startup and republishes
//! it on a named channel at a fixed rate until its running flag is cleared.

pub mod fixed_time;
pub mod publisher;
pub mod rate;
pub mod stamp;

pub use fixed_time::{FixedTimeConfig, FixedTimePublisher, PublisherState};
pub use publisher::{ChannelPublisher, UdpPublisher, WriterPublisher};
pub use rate::Rate;
pub use stamp::Stamp;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::common::ToolResult;

/// Install a Ctrl-C / SIGTERM handler that clears the returned flag
pub fn setup_interrupt_handler() -> ToolResult<Arc<AtomicBool>> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    })?;
    Ok(running)
}
