use serde::{Deserialize, Serialize};

use dash_common::Sample;

use crate::color::Rgba;
use crate::config::{ChartConfig, ValueRange};
use crate::series::{ChartSeries, Stroke};

const ZERO_LINE_ALPHA: f32 = 0.5;
const ZERO_LINE_WIDTH: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// One series after mapping into pixel space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedSeries {
    pub name: String,
    pub color: Rgba,
    pub stroke: Stroke,
    pub points: Vec<Point>,
    /// Consecutive points joined in chronological order. Empty with fewer than two points.
    pub segments: Vec<Segment>,
}

impl RenderedSeries {
    /// A lone point is drawn as a marker rather than a path.
    pub fn is_marker(&self) -> bool {
        self.points.len() == 1
    }
}

/// Everything needed to draw one chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub size: Size,
    pub zero_line: Segment,
    pub zero_line_color: Rgba,
    pub zero_line_width: f64,
    pub series: Vec<RenderedSeries>,
}

impl ChartFrame {
    pub fn series(&self, name: &str) -> Option<&RenderedSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }
}

/// Stateless mapper from series values to pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartRenderer {
    config: ChartConfig,
    size: Size,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig, size: Size) -> Self {
        Self { config, size }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn render(&self, series: &[ChartSeries]) -> ChartFrame {
        let zero_y = self.config.range.zero_y(self.size.height);
        ChartFrame {
            size: self.size,
            zero_line: Segment {
                from: Point::new(0.0, zero_y),
                to: Point::new(self.size.width, zero_y),
            },
            zero_line_color: Rgba::GREY.with_alpha(ZERO_LINE_ALPHA),
            zero_line_width: ZERO_LINE_WIDTH,
            series: series.iter().map(|s| self.render_series(s)).collect(),
        }
    }

    /// Charts a buffer snapshot. Symmetric charts show the three axes plus the optional
    /// magnitude; zero-based charts show the magnitude alone.
    pub fn render_samples(&self, samples: &[Sample], with_magnitude: bool) -> ChartFrame {
        let series = match self.config.range {
            ValueRange::Symmetric(_) => ChartSeries::axes_with_magnitude(samples, with_magnitude),
            ValueRange::ZeroBased(_) => ChartSeries::magnitude_only(samples),
        };
        self.render(&series)
    }

    fn render_series(&self, series: &ChartSeries) -> RenderedSeries {
        let step = self.config.x_step(self.size.width);
        // Older values than the chart has slots for fall off the left edge.
        let skip = series.values.len().saturating_sub(self.config.point_count);
        if skip > 0 {
            log::debug!(
                "Series {} has {} values for {} slots",
                series.name,
                series.values.len(),
                self.config.point_count
            );
        }

        let points: Vec<Point> = series.values[skip..]
            .iter()
            .enumerate()
            .map(|(i, value)| {
                Point::new(
                    i as f64 * step,
                    self.config.range.map(*value, self.size.height),
                )
            })
            .collect();
        let segments = points
            .windows(2)
            .map(|pair| Segment {
                from: pair[0],
                to: pair[1],
            })
            .collect();

        RenderedSeries {
            name: series.name.clone(),
            color: series.color,
            stroke: series.stroke.clone(),
            points,
            segments,
        }
    }
}
