use dashmap::DashMap;
use rayon::prelude::*;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::listener::{Callback, Notifiable};

#[derive(Debug, Error, PartialEq, Clone)]
pub enum PublisherError {
    #[error("listener with id {0} not found")]
    ListenerNotFound(Uuid),
}

pub trait Publishable<T> {
    fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid;
    fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError>;
    fn unregister_all(&self);
    fn notify_listeners(&self, data: Arc<T>);
}

/// Registry of listeners notified on every published event.
///
/// Clones share the same registry.
#[derive(Clone)]
pub struct Publisher<T> {
    listeners: Arc<DashMap<Uuid, Callback<T>>>,
}

impl<T> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Publisher<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(DashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Publishable<T> for Publisher<T>
where
    T: Send + Sync + 'static,
{
    fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid {
        let callback = listener.get_callback();
        let listener_id = Uuid::new_v4();
        listener.set_id(listener_id);
        self.listeners.insert(listener_id, callback);
        log::debug!("Registered listener {listener_id}");
        listener_id
    }

    fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError> {
        self.listeners
            .remove(&listener_id)
            .map(|_| log::debug!("Unregistered listener {listener_id}"))
            .ok_or(PublisherError::ListenerNotFound(listener_id))
    }

    fn unregister_all(&self) {
        self.listeners.clear();
    }

    /// Calls every registered listener. Returns once all callbacks have run.
    fn notify_listeners(&self, data: Arc<T>) {
        // Collect first so no shard lock is held while callbacks run.
        let listeners: Vec<(Uuid, Callback<T>)> = self
            .listeners
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        listeners.into_par_iter().for_each(|(id, callback)| {
            callback(id, data.clone());
        });
    }
}
