use std::ops::Deref;
use std::sync::Arc;

/// Immutable, point-in-time copy of a buffer's contents, oldest first.
///
/// Cloning a snapshot is cheap; all clones share the same storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<T>(Arc<[T]>);

impl<T> Snapshot<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn latest(&self) -> Option<&T> {
        self.0.last()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromIterator<T> for Snapshot<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Snapshot<T> {
    fn from(value: Vec<T>) -> Self {
        Self(Arc::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let snapshot: Snapshot<f64> = Snapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.latest(), None);
    }

    #[test]
    fn test_clone_shares_contents() {
        let snapshot = Snapshot::from(vec![1, 2, 3]);
        let other = snapshot.clone();
        assert_eq!(other.as_slice(), &[1, 2, 3]);
        assert_eq!(snapshot.latest(), Some(&3));
    }
}
