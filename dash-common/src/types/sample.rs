use nalgebra::Vector3;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::N_XYZ_COORDINATES;

/// One 3-axis sensor reading.
///
/// Samples are immutable once recorded. The magnitude is never stored and is
/// recomputed on demand.
///
/// # Examples
///
/// ```
/// use dash_common::Sample;
///
/// let sample = Sample::new([3.0, 4.0, 0.0]);
/// assert_eq!(sample.magnitude(), 5.0);
/// assert_eq!(sample.inner(), [3.0, 4.0, 0.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Sample(Vector3<f64>);

impl Sample {
    pub fn new(data: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(data))
    }

    pub fn from_axes(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn inner(&self) -> [f64; N_XYZ_COORDINATES] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Euclidean norm of the three axes. Zero only when every axis is zero.
    pub fn magnitude(&self) -> f64 {
        self.0.x.hypot(self.0.y).hypot(self.0.z)
    }
}

impl From<[f64; N_XYZ_COORDINATES]> for Sample {
    fn from(value: [f64; N_XYZ_COORDINATES]) -> Self {
        Self::new(value)
    }
}

impl From<Sample> for [f64; N_XYZ_COORDINATES] {
    fn from(value: Sample) -> Self {
        value.inner()
    }
}

impl From<(f32, f32, f32)> for Sample {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::from_axes(x as f64, y as f64, z as f64)
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.len() != N_XYZ_COORDINATES {
            return Err("Can't convert to Sample");
        }
        Ok(Self(Vector3::from_vec(value)))
    }
}

impl Serialize for Sample {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Sample", N_XYZ_COORDINATES)?;
        state.serialize_field("x", &self.0.x)?;
        state.serialize_field("y", &self.0.y)?;
        state.serialize_field("z", &self.0.z)?;
        state.end()
    }
}

// Accepts either `{"x":..,"y":..,"z":..}` (missing axes read as 0) or `[x, y, z]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SampleRepr {
    Object {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        z: f64,
    },
    Array([f64; N_XYZ_COORDINATES]),
}

impl<'de> Deserialize<'de> for Sample {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match SampleRepr::deserialize(deserializer)? {
            SampleRepr::Object { x, y, z } => Sample::from_axes(x, y, z),
            SampleRepr::Array(data) => Sample::new(data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new() {
        let data = [1.0, 2.0, 3.0];
        let sample = Sample::new(data);
        assert_eq!(sample.inner(), data);
        assert_eq!(sample.x(), 1.0);
        assert_eq!(sample.y(), 2.0);
        assert_eq!(sample.z(), 3.0);
    }

    #[test]
    fn test_magnitude_pythagorean() {
        assert_eq!(Sample::from_axes(3.0, 4.0, 0.0).magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_zero() {
        assert_eq!(Sample::from_axes(0.0, 0.0, 0.0).magnitude(), 0.0);
        assert_eq!(Sample::default().magnitude(), 0.0);
    }

    #[test]
    fn test_from_f32_triple() {
        let sample = Sample::from((0.5f32, -1.0f32, 9.75f32));
        assert_eq!(sample.inner(), [0.5, -1.0, 9.75]);
    }

    #[test]
    fn test_try_from_vec() {
        let sample = Sample::try_from(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(sample.inner(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_try_from_vec_invalid_length() {
        assert!(Sample::try_from(vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_serialize() {
        let sample = Sample::new([1.0, 2.0, 3.0]);
        let serialized = serde_json::to_string(&sample).unwrap();
        assert_eq!(serialized, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
    }

    #[test]
    fn test_deserialize_object_with_missing_axis() {
        let sample: Sample = serde_json::from_str(r#"{"x":1.0,  "z": 3.0}"#).unwrap();
        assert_eq!(sample.inner(), [1.0, 0.0, 3.0]);
    }

    #[test]
    fn test_deserialize_array() {
        let sample: Sample = serde_json::from_str("[1.0, 2.0, 3.0]").unwrap();
        assert_eq!(sample.inner(), [1.0, 2.0, 3.0]);
    }

    proptest! {
        #[test]
        fn magnitude_is_non_negative(x in -1e6f64..1e6, y in -1e6f64..1e6, z in -1e6f64..1e6) {
            let magnitude = Sample::from_axes(x, y, z).magnitude();
            prop_assert!(magnitude >= 0.0);
            if x != 0.0 || y != 0.0 || z != 0.0 {
                prop_assert!(magnitude > 0.0);
            }
        }
    }
}
