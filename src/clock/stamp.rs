//! Wall clock timestamp in seconds and nanoseconds

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Stamp {
    pub secs: u32,
    pub nsecs: u32,
}

impl Stamp {
    pub fn new(secs: u32, nsecs: u32) -> Self {
        Self { secs, nsecs }
    }

    /// Current wall clock time
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        Self::from(since_epoch)
    }

    pub fn to_sec(&self) -> f64 {
        self.secs as f64 + self.nsecs as f64 * 1e-9
    }
}

impl From<Duration> for Stamp {
    fn from(d: Duration) -> Self {
        Self {
            secs: d.as_secs() as u32,
            nsecs: d.subsec_nanos(),
        }
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.secs, self.nsecs)
    }
}
