use rand::Rng;
use rand_distr::{Distribution, Normal};

use dash_common::Sample;

use crate::errors::DashboardError;

/// Zero-mean Gaussian noise added to each axis of a sample.
#[derive(Clone, Debug)]
pub(super) struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    pub(super) fn new(stdev: f64) -> Result<Self, DashboardError> {
        let normal = Normal::new(0.0, stdev)
            .map_err(|e| DashboardError::InvalidConfig(format!("noise stdev {stdev}: {e}")))?;
        Ok(Self { normal })
    }

    pub(super) fn add_noise<R: Rng + ?Sized>(&self, rng: &mut R, sample: Sample) -> Sample {
        let [x, y, z] = sample.inner();
        Sample::from_axes(
            x + self.normal.sample(rng),
            y + self.normal.sample(rng),
            z + self.normal.sample(rng),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_gaussian_new() {
        let noise = GaussianNoise::new(0.5).unwrap();
        assert_eq!(noise.normal.mean(), 0.0);
        assert_eq!(noise.normal.std_dev(), 0.5);
        assert!(GaussianNoise::new(-1.0).is_err());
    }

    #[test]
    fn test_noise_stays_close() {
        let mut rng = StdRng::seed_from_u64(7);
        let noise = GaussianNoise::new(0.1).unwrap();
        for _ in 0..100 {
            let noisy = noise.add_noise(&mut rng, Sample::from_axes(0.0, 0.0, 9.81));
            assert!(noisy.x().abs() < 1.0);
            assert!((noisy.z() - 9.81).abs() < 1.0);
        }
    }

    #[test]
    fn test_zero_stdev_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let noise = GaussianNoise::new(0.0).unwrap();
        let sample = Sample::from_axes(1.0, 2.0, 3.0);
        assert_eq!(noise.add_noise(&mut rng, sample), sample);
    }
}
