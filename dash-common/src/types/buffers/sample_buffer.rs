use std::collections::VecDeque;

use super::Snapshot;

/// Bounded, insertion-ordered buffer of the most recent `capacity` elements.
///
/// Unlike a pre-filled ring, the buffer starts empty and grows until it reaches
/// its capacity. From then on every push evicts the single oldest element, so
/// the length never exceeds the capacity and iteration order is chronological.
///
/// # Examples
///
/// ```
/// use dash_common::buffers::SampleBuffer;
///
/// let mut buffer = SampleBuffer::new(3);
/// for i in 1..=5 {
///     buffer.push(i);
/// }
/// assert_eq!(buffer.snapshot().to_vec(), vec![3, 4, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct SampleBuffer<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> SampleBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    /// A zero capacity is accepted; such a buffer never retains anything.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `elem`. Returns the evicted oldest element once the buffer overflows.
    pub fn push(&mut self, elem: T) -> Option<T> {
        self.buffer.push_back(elem);
        if self.buffer.len() > self.capacity {
            return self.buffer.pop_front();
        }
        None
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Most recently pushed element.
    pub fn latest(&self) -> Option<&T> {
        self.buffer.back()
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }
}

impl<T: Clone> SampleBuffer<T> {
    /// Immutable copy of the current contents, oldest first.
    pub fn snapshot(&self) -> Snapshot<T> {
        self.buffer.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample;
    use proptest::prelude::*;

    #[test]
    fn test_new() {
        let buffer: SampleBuffer<i32> = SampleBuffer::new(3);
        assert_eq!(buffer.capacity(), 3);
        assert!(buffer.is_empty());
        assert!(buffer.snapshot().is_empty());
    }

    #[test]
    fn test_push() {
        let mut buffer: SampleBuffer<i32> = SampleBuffer::new(3);
        assert_eq!(buffer.push(1), None);
        assert_eq!(buffer.push(2), None);
        assert_eq!(buffer.push(3), None);
        assert_eq!(buffer.push(4), Some(1));
        assert_eq!(
            buffer.buffer,
            vec![2, 3, 4].into_iter().collect::<VecDeque<_>>()
        );
        assert_eq!(buffer.latest(), Some(&4));
    }

    #[test]
    fn test_partial_buffer_keeps_order() {
        let mut buffer = SampleBuffer::new(5);
        buffer.push(10);
        buffer.push(20);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.snapshot().to_vec(), vec![10, 20]);
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let mut buffer = SampleBuffer::new(0);
        assert_eq!(buffer.push(7), Some(7));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_25_pushes_into_capacity_20() {
        let mut buffer = SampleBuffer::new(20);
        for i in 1..=25 {
            buffer.push(Sample::from_axes(i as f64, 0.0, 0.0));
        }
        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.len(), 20);
        let xs: Vec<f64> = snapshot.iter().map(|s| s.x()).collect();
        let expected: Vec<f64> = (6..=25).map(|i| i as f64).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_pushes() {
        let mut buffer = SampleBuffer::new(2);
        buffer.push(1);
        buffer.push(2);
        let snapshot = buffer.snapshot();
        buffer.push(3);
        assert_eq!(snapshot.to_vec(), vec![1, 2]);
        assert_eq!(buffer.snapshot().to_vec(), vec![2, 3]);
    }

    proptest! {
        #[test]
        fn snapshot_is_bounded_suffix_of_pushes(
            capacity in 0usize..64,
            values in proptest::collection::vec(any::<i32>(), 0..200),
        ) {
            let mut buffer = SampleBuffer::new(capacity);
            for (pushed, value) in values.iter().enumerate() {
                buffer.push(*value);
                prop_assert!(buffer.len() <= capacity);
                prop_assert_eq!(buffer.len(), (pushed + 1).min(capacity));
            }
            let start = values.len().saturating_sub(capacity);
            prop_assert_eq!(buffer.snapshot().to_vec(), values[start..].to_vec());
        }
    }
}
