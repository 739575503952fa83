//! General functionality for the `sensor-dashboard` workspace.
//!
//! Holds the 3-axis [`Sample`] recorded from the phone sensors and the bounded
//! buffers that keep the most recent samples around for charting.

pub mod constants;

#[doc(hidden)]
pub mod types;

// Re-export types
#[doc(inline)]
pub use types::{buffers, Clock, Sample};
