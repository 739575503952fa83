//! # Crate chart-rs
//!
//! ## chart-rs
//!
//! Turns buffer snapshots into plain drawing data: line charts of the X, Y and Z axes plus an
//! optional dashed magnitude series, and circular gauges. Nothing here touches a canvas; the
//! output is a list of points and segments in pixel space that any front end can stroke.
//!
//! ```
//! use chart_rs::{ChartConfig, ChartRenderer, Size};
//! use dash_common::Sample;
//!
//! let renderer = ChartRenderer::new(ChartConfig::symmetric(20.0, 3), Size::new(100.0, 50.0));
//! let samples = [Sample::from_axes(0.0, 0.0, 0.0), Sample::from_axes(20.0, 0.0, 0.0)];
//! let frame = renderer.render_samples(&samples, false);
//!
//! let x_axis = &frame.series[0];
//! assert_eq!(x_axis.points.len(), 2);
//! assert_eq!(x_axis.points[1].x, 50.0);
//! assert_eq!(x_axis.points[1].y, 0.0);
//! ```

pub mod color;
pub mod config;
pub mod gauge;
pub mod renderer;
pub mod series;

pub use color::Rgba;
pub use config::{ChartConfig, ValueRange};
pub use gauge::{Gauge, GaugeArc};
pub use renderer::{ChartFrame, ChartRenderer, Point, RenderedSeries, Segment, Size};
pub use series::{Axis, ChartSeries, Stroke};
