//! Storage backends for memo tables and visited sets.

use std::hash::Hash;

use fxhash::FxHashMap;

/// A storage backend for memoized search results.
///
/// A backend is a plain cache: it may forget entries at any time (see
/// [`NoCacheBackend`]) and the searches that use it must still produce the
/// same result, only slower.
pub trait MemoBackend<K, V> {
    /// Returns the cached value for `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Stores `value` for `key`, replacing any previous entry.
    fn insert(&mut self, key: K, value: V);

    /// Forgets every entry.
    fn clear(&mut self);

    /// Number of cached entries.
    fn len(&self) -> usize;

    /// Returns true iff nothing is cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A hash map backend for arbitrary hashable keys.
#[derive(Debug, Clone)]
pub struct HashMapBackend<K, V> {
    data: FxHashMap<K, V>,
}

impl<K, V> HashMapBackend<K, V> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: FxHashMap::default(),
        }
    }
}

impl<K, V> Default for HashMapBackend<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> MemoBackend<K, V> for HashMapBackend<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.data.get(key)
    }

    fn insert(&mut self, key: K, value: V) {
        self.data.insert(key, value);
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// A backend that never stores anything.
///
/// Turns a memoized search into a plain exhaustive one; used as the
/// reference when checking that memoization does not change results.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCacheBackend;

impl NoCacheBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<K, V> MemoBackend<K, V> for NoCacheBackend {
    fn get(&self, _key: &K) -> Option<&V> {
        None
    }

    fn insert(&mut self, _key: K, _value: V) {}

    fn clear(&mut self) {}

    fn len(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_backend_insert_and_get() {
        let mut backend: HashMapBackend<(u8, u32), u64> = HashMapBackend::new();
        assert!(backend.is_empty());

        backend.insert((1, 4), 42);
        assert_eq!(backend.get(&(1, 4)), Some(&42));
        assert_eq!(backend.get(&(1, 5)), None);

        // Replaces the previous entry
        backend.insert((1, 4), 7);
        assert_eq!(backend.get(&(1, 4)), Some(&7));
        assert_eq!(backend.len(), 1);

        backend.clear();
        assert!(backend.is_empty());
        assert_eq!(backend.get(&(1, 4)), None);
    }

    #[test]
    fn test_no_cache_backend_forgets_everything() {
        let mut backend = NoCacheBackend::new();
        MemoBackend::<u32, u32>::insert(&mut backend, 1, 2);
        assert_eq!(MemoBackend::<u32, u32>::get(&backend, &1), None);
        assert!(MemoBackend::<u32, u32>::is_empty(&backend));
    }
}
