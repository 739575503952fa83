use serde::{Deserialize, Serialize};
use uuid::Uuid;

const HOUR_MILLIS: i64 = 3_600_000;
const DAY_MILLIS: i64 = 24 * HOUR_MILLIS;

/// One past activity, as listed by the history endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    /// Start time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub activity: String,
    /// Human readable duration, e.g. "1 hr 10 min".
    pub duration: String,
}

impl ActivityRecord {
    pub fn new(id: &str, timestamp: i64, activity: &str, duration: &str) -> Self {
        Self {
            id: id.to_string(),
            timestamp,
            activity: activity.to_string(),
            duration: duration.to_string(),
        }
    }

    /// Fixed history shown when the service cannot be reached, relative to `now_millis`.
    pub fn canned_history(now_millis: i64) -> Vec<ActivityRecord> {
        [
            (HOUR_MILLIS, "Running", "35 min"),
            (DAY_MILLIS, "Walking", "1 hr 10 min"),
            (2 * DAY_MILLIS, "Cycling", "45 min"),
            (3 * DAY_MILLIS, "Hiking", "2 hr"),
            (4 * DAY_MILLIS, "Running", "20 min"),
        ]
        .into_iter()
        .map(|(age, activity, duration)| {
            ActivityRecord::new(
                &Uuid::new_v4().to_string(),
                now_millis - age,
                activity,
                duration,
            )
        })
        .collect()
    }
}
