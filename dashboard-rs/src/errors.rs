//! Module errors

use thiserror::Error;

use activity_rs::ActivityError;

/// Errors raised while building a dashboard. A running session never fails.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Activity(#[from] ActivityError),
}
