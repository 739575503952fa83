use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use activity_rs::ports::ActivityPort;
use activity_rs::{ActivityRecord, ActivityService, Prediction};
use chart_rs::{ChartConfig, ChartRenderer, Gauge, Size};
use dash_common::buffers::{SharedSampleBuffer, Snapshot};
use dash_common::Sample;
use publisher::{listener, Publishable, Publisher};

use crate::config::{ChannelConfig, DashboardConfig};
use crate::periodic::PeriodicTask;
use crate::source::{SensorKind, SensorReading};
use crate::view::{DashboardView, SensorPanel};

pub const INITIAL_STATUS: &str = "Initializing...";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State written by the sensor listener and the poll task.
struct SessionState {
    accel: SharedSampleBuffer<Sample>,
    gyro: SharedSampleBuffer<Sample>,
    latest_accel: Mutex<Option<Sample>>,
    latest_gyro: Mutex<Option<Sample>>,
    prediction: Mutex<Option<Prediction>>,
}

impl SessionState {
    fn new(config: &DashboardConfig) -> Self {
        Self {
            accel: SharedSampleBuffer::new(config.accel.history),
            gyro: SharedSampleBuffer::new(config.gyro.history),
            latest_accel: Mutex::new(None),
            latest_gyro: Mutex::new(None),
            prediction: Mutex::new(None),
        }
    }

    fn buffer(&self, kind: SensorKind) -> &SharedSampleBuffer<Sample> {
        match kind {
            SensorKind::Accelerometer => &self.accel,
            SensorKind::Gyroscope => &self.gyro,
        }
    }

    fn latest(&self, kind: SensorKind) -> &Mutex<Option<Sample>> {
        match kind {
            SensorKind::Accelerometer => &self.latest_accel,
            SensorKind::Gyroscope => &self.latest_gyro,
        }
    }

    fn push(&self, reading: &SensorReading) {
        *lock(self.latest(reading.kind)) = Some(reading.sample);
        self.buffer(reading.kind).push(reading.sample);
    }

    fn process_reading(&self, _listener_id: Uuid, reading: Arc<SensorReading>) {
        self.push(&reading);
    }
}

/// Live state of one dashboard screen.
///
/// Created when the screen opens and dropped when it closes. Readings arrive through a
/// [`Publisher`] listener and land in per-sensor buffers; a poll task classifies the latest
/// accelerometer sample on a fixed period.
pub struct DashboardSession<C>
where
    C: ActivityPort + 'static,
{
    config: DashboardConfig,
    state: Arc<SessionState>,
    service: Arc<ActivityService<C>>,
    poll: Option<PeriodicTask>,
    /// Publisher handle and listener id of the current subscription.
    attached: Option<(Publisher<SensorReading>, Uuid)>,
}

impl<C> DashboardSession<C>
where
    C: ActivityPort + 'static,
{
    pub fn new(config: DashboardConfig, service: Arc<ActivityService<C>>) -> Self {
        Self {
            state: Arc::new(SessionState::new(&config)),
            config,
            service,
            poll: None,
            attached: None,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn service(&self) -> &Arc<ActivityService<C>> {
        &self.service
    }

    /// Subscribes to `publisher`. A session listens to one publisher at a time; attaching
    /// again drops the previous subscription first.
    pub fn attach(&mut self, publisher: &Publisher<SensorReading>) -> Uuid {
        if let Some((previous, id)) = self.attached.take() {
            log::warn!("Session already attached, replacing listener {id}");
            if let Err(e) = previous.unregister_listener(id) {
                log::warn!("Failed to drop previous subscription: {e}");
            }
        }
        let state = self.state.clone();
        let mut listener = listener!(state.process_reading);
        let id = publisher.register_listener(&mut listener);
        self.attached = Some((publisher.clone(), id));
        id
    }

    /// Unsubscribes from `publisher`. Returns the id of the removed listener, if any.
    pub fn detach(&mut self, publisher: &Publisher<SensorReading>) -> Option<Uuid> {
        let (attached, id) = self.attached.take()?;
        if publisher.unregister_listener(id).is_err() {
            // Not the publisher the session was attached to.
            if let Err(e) = attached.unregister_listener(id) {
                log::warn!("Failed to detach session: {e}");
                return None;
            }
        }
        Some(id)
    }

    /// Stores a reading as if it had been published.
    pub fn on_reading(&self, reading: &SensorReading) {
        self.state.push(reading);
    }

    /// Starts polling the activity service. Does nothing if the poll is already running.
    pub fn start(&mut self) {
        if self.is_running() {
            log::debug!("Prediction poll already running");
            return;
        }
        let state = self.state.clone();
        let service = self.service.clone();
        log::info!(
            "Starting prediction poll against {} every {:?}",
            service.get_tag(),
            self.config.poll_period()
        );
        self.poll = Some(PeriodicTask::spawn(
            "prediction-poll",
            self.config.poll_period(),
            move || {
                let state = state.clone();
                let service = service.clone();
                async move {
                    let sample = lock(&state.latest_accel).unwrap_or_default();
                    let prediction = service.predict(&sample).await;
                    log::debug!("Activity: {}", prediction.activity);
                    *lock(&state.prediction) = Some(prediction);
                }
            },
        ));
    }

    /// Stops the poll and waits for an in-flight prediction to land.
    pub async fn stop(&mut self) {
        if let Some(poll) = self.poll.take() {
            poll.shutdown().await;
            log::info!("Prediction poll stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.poll.as_ref().map(PeriodicTask::is_running).unwrap_or(false)
    }

    pub fn status(&self) -> String {
        lock(&self.state.prediction)
            .as_ref()
            .map(|p| p.activity.clone())
            .unwrap_or_else(|| INITIAL_STATUS.to_string())
    }

    pub fn prediction(&self) -> Option<Prediction> {
        lock(&self.state.prediction).clone()
    }

    pub fn snapshot(&self, kind: SensorKind) -> Snapshot<Sample> {
        self.state.buffer(kind).snapshot()
    }

    pub fn latest(&self, kind: SensorKind) -> Option<Sample> {
        *lock(self.state.latest(kind))
    }

    fn channel(&self, kind: SensorKind) -> &ChannelConfig {
        match kind {
            SensorKind::Accelerometer => &self.config.accel,
            SensorKind::Gyroscope => &self.config.gyro,
        }
    }

    fn panel(&self, kind: SensorKind, chart_size: Size) -> SensorPanel {
        let channel = self.channel(kind);
        let sample = self.latest(kind).unwrap_or_default();
        let renderer = ChartRenderer::new(
            ChartConfig::symmetric(channel.range, channel.history),
            chart_size,
        );
        SensorPanel {
            gauge: Gauge::from_sample(kind.label(), &sample, channel.gauge_full_scale),
            chart: renderer.render_samples(&self.snapshot(kind), true),
        }
    }

    /// Builds the plain view of the screen. Sensors without readings show zero.
    pub fn view(&self, chart_size: Size) -> DashboardView {
        DashboardView {
            status: self.status(),
            prediction: self.prediction(),
            accel: self.panel(SensorKind::Accelerometer, chart_size),
            gyro: self.panel(SensorKind::Gyroscope, chart_size),
        }
    }
}

/// Activity list for the history screen, never empty when the service is down.
pub async fn fetch_history<C: ActivityPort>(service: &ActivityService<C>) -> Vec<ActivityRecord> {
    let history = service.history().await;
    log::debug!("Fetched {} history records", history.len());
    history
}
