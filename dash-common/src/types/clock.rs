use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock timestamp, stored as seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clock(f64);

impl Clock {
    pub fn now() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self(now.as_secs_f64())
    }

    pub fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> f64 {
        self.0
    }

    /// Milliseconds since the epoch, the unit used by activity records.
    pub fn as_millis(&self) -> i64 {
        (self.0 * 1000.0).round() as i64
    }
}
