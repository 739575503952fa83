//! # Crate activity-rs
//!
//! ## activity-rs
//!
//! The `activity-rs` crate talks to the remote activity service that classifies what the
//! phone holder is doing and keeps a history of past activities.
//!
//! Features include:
//! - A [`ports::ActivityPort`] trait with an HTTP adapter ([`adapters::ActivityHttp`]) and a
//!   scripted/offline mock ([`adapters::ActivityMock`]).
//! - An [`services::ActivityService`] that never fails: when the remote call errors, the
//!   prediction falls back to a magnitude-threshold heuristic ([`classifier::ActivityBands`])
//!   and the history falls back to a fixed list of records.
//!
//! **NOTE** The service object is built explicitly and shared by the caller; there is no
//! process-wide client.

pub mod adapters;
pub mod classifier;
pub mod errors;
mod helpers;
mod http_client;
pub mod models;
pub mod ports;
pub mod services;

pub use classifier::ActivityBands;
pub use errors::ActivityError;
pub use models::{ActivityRecord, Prediction, PredictionSource};
pub use services::{connect, ActivityService};
