//! # Crate dashboard-rs
//!
//! ## dashboard-rs
//!
//! Core of a sensor dashboard. Accelerometer and gyroscope readings arrive through a
//! [`publisher::Publisher`], are kept in bounded buffers, and are turned on demand into a plain
//! [`view::DashboardView`] with gauges, line charts and the current activity.
//!
//! Features include:
//! - A [`session::DashboardSession`] per screen activation that polls the activity service on a
//!   cancellable [`periodic::PeriodicTask`].
//! - A [`source::MockSensorSource`] producing synthetic readings for demos.
//! - A JSON [`config::DashboardConfig`] with defaults for every field.
//!
//! Network failures never reach the view: predictions fall back to a local classifier and the
//! history to a fixed list.

use std::sync::Arc;

use activity_rs::adapters::ActivityHttp;

pub mod config;
pub mod errors;
pub mod periodic;
pub mod session;
pub mod source;
pub mod view;

pub use config::DashboardConfig;
pub use errors::DashboardError;
pub use periodic::PeriodicTask;
pub use session::{fetch_history, DashboardSession};
pub use source::{SensorKind, SensorReading};
pub use view::DashboardView;

/// Builds a session talking to the activity service at `config.base_url`.
///
/// Returns an InvalidConfig error if the configuration does not validate, and an Activity error
/// if the HTTP client cannot be created. The poll is not started.
pub fn connect_session(
    config: DashboardConfig,
) -> Result<DashboardSession<ActivityHttp>, DashboardError> {
    config.validate()?;
    let service = activity_rs::connect(
        &config.base_url,
        config.request_timeout(),
        config.bands.clone(),
    )?;
    Ok(DashboardSession::new(config, Arc::new(service)))
}
