//! Publisher that repeats one captured timestamp at a fixed rate
//!
//! Used to hand every node of a setup the same reference time. The stamp
//! is captured once in `initialize` and never changes afterwards.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::common::{StampPublisher, ToolError, ToolResult};
use super::{Rate, Stamp};

/// Lifecycle of the publisher; transitions only move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublisherState {
    Idle,
    Initialized,
    Running,
    Stopped,
}

impl fmt::Display for PublisherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublisherState::Idle => "idle",
            PublisherState::Initialized => "initialized",
            PublisherState::Running => "running",
            PublisherState::Stopped => "stopped",
        };
        write!(f, "{}", name)
    }
}

/// Configuration for the fixed-time publisher
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimeConfig {
    /// Channel name
    pub topic: String,
    pub rate_hz: f64,
}

impl Default for FixedTimeConfig {
    fn default() -> Self {
        Self {
            topic: "/clock".to_string(),
            rate_hz: 10.0,
        }
    }
}

pub struct FixedTimePublisher<P: StampPublisher> {
    config: FixedTimeConfig,
    publisher: P,
    state: PublisherState,
    stamp: Option<Stamp>,
}

impl<P: StampPublisher> FixedTimePublisher<P> {
    pub fn new(config: FixedTimeConfig, publisher: P) -> Self {
        Self {
            config,
            publisher,
            state: PublisherState::Idle,
            stamp: None,
        }
    }

    pub fn state(&self) -> PublisherState {
        self.state
    }

    /// The captured timestamp, once initialized
    pub fn stamp(&self) -> Option<Stamp> {
        self.stamp
    }

    pub fn topic(&self) -> &str {
        &self.config.topic
    }

    /// Capture the current time (Idle -> Initialized)
    pub fn initialize(&mut self) -> ToolResult<Stamp> {
        self.initialize_with(Stamp::now())
    }

    /// Capture a given time (Idle -> Initialized)
    pub fn initialize_with(&mut self, stamp: Stamp) -> ToolResult<Stamp> {
        self.expect_state(PublisherState::Idle, "initialize")?;
        self.stamp = Some(stamp);
        self.state = PublisherState::Initialized;
        log::info!("Captured {} for {}", stamp, self.config.topic);
        Ok(stamp)
    }

    /// Publish the captured stamp once per tick while `running` is set.
    ///
    /// Initialized -> Running -> Stopped. Returns the number of messages
    /// published.
    pub fn run(&mut self, running: &Arc<AtomicBool>) -> ToolResult<u64> {
        self.expect_state(PublisherState::Initialized, "run")?;
        let stamp = self
            .stamp
            .ok_or_else(|| ToolError::InvalidState("no stamp captured".to_string()))?;
        let mut rate = Rate::new(self.config.rate_hz)?;

        self.state = PublisherState::Running;
        log::info!(
            "Publishing on {} at {} Hz",
            self.config.topic,
            self.config.rate_hz
        );

        let mut ticks = 0u64;
        rate.reset();
        while running.load(Ordering::SeqCst) {
            self.publisher.publish(&self.config.topic, &stamp)?;
            ticks += 1;
            rate.sleep();
        }

        self.state = PublisherState::Stopped;
        log::info!("Stopped after {} messages", ticks);
        Ok(ticks)
    }

    fn expect_state(&self, expected: PublisherState, operation: &str) -> ToolResult<()> {
        if self.state != expected {
            return Err(ToolError::InvalidState(format!(
                "cannot {} while {}",
                operation, self.state
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ChannelPublisher;
    use std::sync::mpsc;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn test_run_before_initialize_fails() {
        let (tx, _rx) = mpsc::channel();
        let mut node = FixedTimePublisher::new(FixedTimeConfig::default(), ChannelPublisher::new(tx));
        let running = Arc::new(AtomicBool::new(true));
        assert!(matches!(node.run(&running), Err(ToolError::InvalidState(_))));
        assert_eq!(node.state(), PublisherState::Idle);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (tx, _rx) = mpsc::channel();
        let mut node = FixedTimePublisher::new(FixedTimeConfig::default(), ChannelPublisher::new(tx));
        node.initialize().unwrap();
        assert_eq!(node.state(), PublisherState::Initialized);
        assert!(node.initialize().is_err());
    }

    #[test]
    fn test_bad_rate_is_rejected() {
        let (tx, _rx) = mpsc::channel();
        let config = FixedTimeConfig {
            rate_hz: 0.0,
            ..Default::default()
        };
        let mut node = FixedTimePublisher::new(config, ChannelPublisher::new(tx));
        node.initialize().unwrap();
        let running = Arc::new(AtomicBool::new(true));
        assert!(matches!(node.run(&running), Err(ToolError::InvalidParameter(_))));
    }

    #[test]
    fn test_publishes_same_stamp_at_fixed_rate() {
        let (tx, rx) = mpsc::channel();
        let mut node = FixedTimePublisher::new(FixedTimeConfig::default(), ChannelPublisher::new(tx));
        let captured = node.initialize().unwrap();

        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();
        let window = Duration::from_millis(1050);
        let started = Instant::now();
        let handle = thread::spawn(move || {
            let ticks = node.run(&flag);
            (ticks, node.state())
        });

        thread::sleep(window);
        running.store(false, Ordering::SeqCst);
        let elapsed = started.elapsed();
        let (ticks, state) = handle.join().unwrap();
        let ticks = ticks.unwrap();

        let received: Vec<Stamp> = rx.try_iter().collect();
        assert_eq!(received.len() as u64, ticks);
        assert!(received.iter().all(|s| *s == captured));

        let expected = (10.0 * elapsed.as_secs_f64()).floor() as i64;
        assert!(
            (received.len() as i64 - expected).abs() <= 1,
            "{} messages in {:?}",
            received.len(),
            elapsed
        );
        assert_eq!(state, PublisherState::Stopped);
    }

    #[test]
    fn test_interrupt_stops_cleanly() {
        let (tx, _rx) = mpsc::channel();
        let mut node = FixedTimePublisher::new(FixedTimeConfig::default(), ChannelPublisher::new(tx));
        node.initialize_with(Stamp::new(100, 0)).unwrap();
        let running = Arc::new(AtomicBool::new(false));
        assert_eq!(node.run(&running).unwrap(), 0);
        assert_eq!(node.state(), PublisherState::Stopped);
        assert_eq!(node.stamp(), Some(Stamp::new(100, 0)));
    }
}
