use serde::{Deserialize, Serialize};

/// Value range a chart maps onto its height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ValueRange {
    /// `[-R, R]`, zero in the vertical middle.
    Symmetric(f64),
    /// `[0, R]`, zero at the bottom edge.
    ZeroBased(f64),
}

impl ValueRange {
    pub fn limit(&self) -> f64 {
        match self {
            ValueRange::Symmetric(limit) | ValueRange::ZeroBased(limit) => *limit,
        }
    }

    fn is_usable(&self) -> bool {
        let limit = self.limit();
        limit.is_finite() && limit > 0.0
    }

    /// Vertical pixel position of the value zero.
    pub fn zero_y(&self, height: f64) -> f64 {
        match self {
            ValueRange::Symmetric(_) => height / 2.0,
            ValueRange::ZeroBased(_) => height,
        }
    }

    /// Maps `value` to a vertical pixel position, with y growing downwards.
    ///
    /// Values outside the range are clamped to the nearest edge. NaN, and every value when
    /// the limit is not a finite positive number, map to the zero position.
    pub fn map(&self, value: f64, height: f64) -> f64 {
        if value.is_nan() || !self.is_usable() {
            return self.zero_y(height);
        }
        match *self {
            ValueRange::Symmetric(limit) => {
                let mid_y = height / 2.0;
                let normalized = (value / limit).clamp(-1.0, 1.0);
                mid_y - normalized * mid_y
            }
            ValueRange::ZeroBased(limit) => {
                let clamped = value.clamp(0.0, limit);
                height - (clamped / limit) * height
            }
        }
    }
}

/// Range and horizontal resolution of one chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub range: ValueRange,
    /// Number of horizontal slots, normally the buffer capacity.
    pub point_count: usize,
}

impl ChartConfig {
    pub fn new(range: ValueRange, point_count: usize) -> Self {
        Self { range, point_count }
    }

    pub fn symmetric(limit: f64, point_count: usize) -> Self {
        Self::new(ValueRange::Symmetric(limit), point_count)
    }

    pub fn zero_based(limit: f64, point_count: usize) -> Self {
        Self::new(ValueRange::ZeroBased(limit), point_count)
    }

    /// Horizontal distance between consecutive slots. Zero with fewer than two slots.
    pub fn x_step(&self, width: f64) -> f64 {
        if self.point_count < 2 {
            0.0
        } else {
            width / (self.point_count - 1) as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HEIGHT: f64 = 200.0;

    #[test]
    fn test_symmetric_mapping() {
        let range = ValueRange::Symmetric(10.0);
        assert_eq!(range.map(0.0, HEIGHT), 100.0);
        assert_eq!(range.map(10.0, HEIGHT), 0.0);
        assert_eq!(range.map(-10.0, HEIGHT), 200.0);
        assert_eq!(range.map(5.0, HEIGHT), 50.0);
    }

    #[test]
    fn test_symmetric_mapping_clamps() {
        let range = ValueRange::Symmetric(10.0);
        assert_eq!(range.map(1000.0, HEIGHT), 0.0);
        assert_eq!(range.map(-1000.0, HEIGHT), HEIGHT);
        assert_eq!(range.map(f64::INFINITY, HEIGHT), 0.0);
    }

    #[test]
    fn test_zero_based_mapping() {
        let range = ValueRange::ZeroBased(20.0);
        assert_eq!(range.zero_y(HEIGHT), HEIGHT);
        assert_eq!(range.map(0.0, HEIGHT), HEIGHT);
        assert_eq!(range.map(10.0, HEIGHT), 100.0);
        assert_eq!(range.map(20.0, HEIGHT), 0.0);
        assert_eq!(range.map(-3.0, HEIGHT), HEIGHT);
        assert_eq!(range.map(50.0, HEIGHT), 0.0);
    }

    #[test]
    fn test_degenerate_values_map_to_zero_line() {
        assert_eq!(ValueRange::Symmetric(10.0).map(f64::NAN, HEIGHT), 100.0);
        assert_eq!(ValueRange::Symmetric(0.0).map(5.0, HEIGHT), 100.0);
        assert_eq!(ValueRange::Symmetric(-1.0).map(5.0, HEIGHT), 100.0);
        assert_eq!(ValueRange::ZeroBased(f64::NAN).map(5.0, HEIGHT), HEIGHT);
        assert_eq!(ValueRange::ZeroBased(f64::INFINITY).map(5.0, HEIGHT), HEIGHT);
    }

    #[test]
    fn test_x_step() {
        assert_eq!(ChartConfig::symmetric(10.0, 101).x_step(500.0), 5.0);
        assert_eq!(ChartConfig::symmetric(10.0, 2).x_step(500.0), 500.0);
        assert_eq!(ChartConfig::symmetric(10.0, 1).x_step(500.0), 0.0);
        assert_eq!(ChartConfig::symmetric(10.0, 0).x_step(500.0), 0.0);
    }

    proptest! {
        #[test]
        fn symmetric_mapping_is_strictly_decreasing(a in -10.0f64..10.0, b in -10.0f64..10.0) {
            prop_assume!(a < b);
            let range = ValueRange::Symmetric(10.0);
            prop_assert!(range.map(a, HEIGHT) > range.map(b, HEIGHT));
        }

        #[test]
        fn mapping_stays_inside_chart(value in proptest::num::f64::ANY, limit in 0.1f64..100.0) {
            for range in [ValueRange::Symmetric(limit), ValueRange::ZeroBased(limit)] {
                let y = range.map(value, HEIGHT);
                prop_assert!((0.0..=HEIGHT).contains(&y));
            }
        }
    }
}
