use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Repeating timer running on the tokio runtime.
///
/// The first tick runs as soon as the task is spawned, then one tick per period. A tick
/// that is in flight when the task is stopped runs to completion. Dropping the task aborts
/// it without waiting.
pub struct PeriodicTask {
    name: String,
    abort_signal: Arc<Notify>,
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTask {
    pub fn spawn<F, Fut>(name: &str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let abort_signal = Arc::new(Notify::new());
        let handle = tokio::spawn({
            let abort_signal = abort_signal.clone();
            let name = name.to_string();
            async move {
                log::info!("{name}: started, period {period:?}");
                loop {
                    tick().await;
                    tokio::select! {
                        biased;
                        _ = abort_signal.notified() => {
                            break;
                        }
                        _ = tokio::time::sleep(period) => {}
                    }
                }
                log::info!("{name}: stopped");
            }
        });

        Self {
            name: name.to_string(),
            abort_signal,
            handle: Some(handle),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asks the task to stop after the current tick. Does not wait.
    pub fn stop(&self) {
        // notify_one keeps a permit, so a stop issued mid-tick is not lost.
        self.abort_signal.notify_one();
    }

    /// Stops the task and waits until it has finished.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                log::error!("{}: task failed: {:?}", self.name, e);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
