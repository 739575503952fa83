use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{SampleBuffer, Snapshot};

/// Cloneable handle to a [`SampleBuffer`] shared by one producer and one reader.
///
/// The producer pushes from the sensor callback while the reader takes
/// snapshots at its own cadence. Snapshots are copied out inside a short
/// critical section, so a reader never observes a half-applied push.
#[derive(Clone, Debug)]
pub struct SharedSampleBuffer<T> {
    inner: Arc<Mutex<SampleBuffer<T>>>,
}

impl<T> SharedSampleBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SampleBuffer::new(capacity))),
        }
    }

    // A push either fully lands or never starts, so a poisoned lock still guards a
    // consistent buffer.
    fn lock(&self) -> MutexGuard<'_, SampleBuffer<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, elem: T) -> Option<T> {
        self.lock().push(elem)
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T: Clone> SharedSampleBuffer<T> {
    pub fn snapshot(&self) -> Snapshot<T> {
        self.lock().snapshot()
    }

    pub fn latest(&self) -> Option<T> {
        self.lock().latest().cloned()
    }
}
