use serde::{Deserialize, Serialize};

use dash_common::Sample;

use crate::color::Rgba;

const STROKE_WIDTH: f64 = 2.0;
const MAGNITUDE_DASH: [f64; 2] = [10.0, 10.0];
const MAGNITUDE_ALPHA: f32 = 0.8;

/// Line style of a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    /// Alternating on/off lengths in pixels. `None` for a solid line.
    pub dash: Option<Vec<f64>>,
}

impl Stroke {
    pub fn solid(width: f64) -> Self {
        Self { width, dash: None }
    }

    pub fn dashed(width: f64, pattern: &[f64]) -> Self {
        Self {
            width,
            dash: Some(pattern.to_vec()),
        }
    }

    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }
}

/// Logical series drawn from a 3-axis sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
    Magnitude,
}

impl Axis {
    pub const XYZ: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::Magnitude => "Magnitude",
        }
    }

    pub fn color(&self) -> Rgba {
        match self {
            Axis::X => Rgba::RED,
            Axis::Y => Rgba::GREEN,
            Axis::Z => Rgba::BLUE,
            Axis::Magnitude => Rgba::WHITE.with_alpha(MAGNITUDE_ALPHA),
        }
    }

    pub fn stroke(&self) -> Stroke {
        match self {
            Axis::Magnitude => Stroke::dashed(STROKE_WIDTH, &MAGNITUDE_DASH),
            _ => Stroke::solid(STROKE_WIDTH),
        }
    }

    pub fn value(&self, sample: &Sample) -> f64 {
        match self {
            Axis::X => sample.x(),
            Axis::Y => sample.y(),
            Axis::Z => sample.z(),
            Axis::Magnitude => sample.magnitude(),
        }
    }
}

/// Named, coloured sequence of scalars, oldest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: Rgba,
    pub stroke: Stroke,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(name: &str, color: Rgba, stroke: Stroke, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            color,
            stroke,
            values,
        }
    }

    pub fn from_axis(axis: Axis, samples: &[Sample]) -> Self {
        Self::new(
            axis.name(),
            axis.color(),
            axis.stroke(),
            samples.iter().map(|s| axis.value(s)).collect(),
        )
    }

    /// X, Y and Z series, followed by the magnitude when requested.
    pub fn axes_with_magnitude(samples: &[Sample], with_magnitude: bool) -> Vec<Self> {
        let magnitude = with_magnitude.then_some(Axis::Magnitude);
        Axis::XYZ
            .into_iter()
            .chain(magnitude)
            .map(|axis| Self::from_axis(axis, samples))
            .collect()
    }

    pub fn magnitude_only(samples: &[Sample]) -> Vec<Self> {
        vec![Self::from_axis(Axis::Magnitude, samples)]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_with_magnitude() {
        let samples = [Sample::from_axes(3.0, 4.0, 0.0), Sample::from_axes(1.0, 2.0, 2.0)];
        let series = ChartSeries::axes_with_magnitude(&samples, true);

        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["X", "Y", "Z", "Magnitude"]);
        assert_eq!(series[0].values, vec![3.0, 1.0]);
        assert_eq!(series[2].values, vec![0.0, 2.0]);
        assert_eq!(series[3].values, vec![5.0, 3.0]);
        assert!(series[3].stroke.is_dashed());
        assert!(!series[0].stroke.is_dashed());
    }

    #[test]
    fn test_axes_without_magnitude() {
        let series = ChartSeries::axes_with_magnitude(&[], false);
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(ChartSeries::is_empty));
    }

    #[test]
    fn test_palette() {
        assert_eq!(Axis::X.color(), Rgba::from_rgb(0xFF5252));
        assert_eq!(Axis::Y.color(), Rgba::from_rgb(0x4CAF50));
        assert_eq!(Axis::Z.color(), Rgba::from_rgb(0x448AFF));
        assert_eq!(Axis::Magnitude.color().alpha, 0.8);
        assert_eq!(Axis::Magnitude.stroke().dash, Some(vec![10.0, 10.0]));
        assert_eq!(Axis::Z.stroke().width, 2.0);
    }
}
