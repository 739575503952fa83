// Synthetic accelerometer and gyroscope readings for demos and tests.

use std::f64::consts::TAU;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use dash_common::Sample;
use publisher::{Publishable, Publisher};

use super::gaussian::GaussianNoise;
use super::{SensorKind, SensorReading};
use crate::errors::DashboardError;
use crate::periodic::PeriodicTask;

const GRAVITY: f64 = 9.81;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockSourceConfig {
    pub period_millis: u64,
    /// Frequency of the simulated motion, e.g. the step rate while walking.
    pub frequency_hz: f64,
    pub accel_amplitude: f64,
    pub gyro_amplitude: f64,
    /// Standard deviation of the per-axis noise. `None` for clean signals.
    pub noise_stdev: Option<f64>,
}

impl Default for MockSourceConfig {
    fn default() -> Self {
        Self {
            period_millis: 50,
            frequency_hz: 1.5,
            accel_amplitude: 3.0,
            gyro_amplitude: 1.5,
            noise_stdev: Some(0.2),
        }
    }
}

/// Emits gravity plus a periodic motion term, with optional noise, to every listener of its
/// publisher.
pub struct MockSensorSource {
    config: MockSourceConfig,
    publisher: Publisher<SensorReading>,
    noise: Option<GaussianNoise>,
}

impl MockSensorSource {
    /// Returns an InvalidConfig error if the period is zero or the noise is not a valid
    /// standard deviation.
    pub fn new(config: MockSourceConfig) -> Result<Self, DashboardError> {
        if config.period_millis == 0 {
            return Err(DashboardError::InvalidConfig(
                "mock source period_millis must be greater than zero".to_string(),
            ));
        }
        let noise = config.noise_stdev.map(GaussianNoise::new).transpose()?;
        Ok(Self {
            config,
            publisher: Publisher::new(),
            noise,
        })
    }

    pub fn publisher(&self) -> &Publisher<SensorReading> {
        &self.publisher
    }

    pub fn config(&self) -> &MockSourceConfig {
        &self.config
    }

    /// Noise-free signal of `kind` at `t_secs` since the source started.
    pub fn signal(&self, kind: SensorKind, t_secs: f64) -> Sample {
        let phase = TAU * self.config.frequency_hz * t_secs;
        match kind {
            SensorKind::Accelerometer => {
                let a = self.config.accel_amplitude;
                Sample::from_axes(
                    a * phase.sin(),
                    0.5 * a * phase.cos(),
                    GRAVITY + 0.25 * a * (2.0 * phase).sin(),
                )
            }
            SensorKind::Gyroscope => {
                let g = self.config.gyro_amplitude;
                Sample::from_axes(g * phase.cos(), 0.5 * g * phase.sin(), 0.25 * g * phase.cos())
            }
        }
    }

    /// Publishes one reading per sensor for time `t_secs`.
    pub fn emit(&self, t_secs: f64, rng: &mut StdRng) {
        for kind in SensorKind::ALL {
            let mut sample = self.signal(kind, t_secs);
            if let Some(noise) = self.noise.as_ref() {
                sample = noise.add_noise(rng, sample);
            }
            self.publisher
                .notify_listeners(Arc::new(SensorReading::new(kind, sample)));
        }
    }

    /// Starts emitting on a background task. Dropping the returned task stops the source.
    pub fn start(self: &Arc<Self>) -> PeriodicTask {
        let source = self.clone();
        let started = Instant::now();
        let mut rng = StdRng::from_entropy();
        PeriodicTask::spawn(
            "mock-sensor-source",
            Duration::from_millis(self.config.period_millis),
            move || {
                source.emit(started.elapsed().as_secs_f64(), &mut rng);
                std::future::ready(())
            },
        )
    }
}
