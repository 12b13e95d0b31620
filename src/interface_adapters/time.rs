use crate::domain::TimeSource;
use std::time::Duration;
use tokio::time::Instant;

/// Monotonic time from the tokio clock, so paused-time tests drive the real loop.
#[derive(Debug, Clone, Copy)]
pub struct TokioTime {
    origin: Instant,
}

impl TokioTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for TokioTime {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
