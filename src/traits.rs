//! # Cache Traits
//!
//! The single-threaded [`LruCore`](crate::policy::lru::LruCore) implements a
//! small trait stack so generic code can be written against the operations it
//! needs rather than the concrete type.
//!
//! ```text
//!   ┌─────────────────────────────────────┐
//!   │          CoreCache<K, V>            │
//!   │  insert / get / contains / len      │
//!   │  is_empty / capacity / clear        │
//!   └─────────────────┬───────────────────┘
//!                     ▼
//!   ┌─────────────────────────────────────┐
//!   │         MutableCache<K, V>          │
//!   │  remove / remove_batch              │
//!   └─────────────────┬───────────────────┘
//!                     ▼
//!   ┌─────────────────────────────────────┐
//!   │        LruCacheTrait<K, V>          │
//!   │  pop_lru / peek_lru / touch         │
//!   │  recency_rank                       │
//!   └─────────────────────────────────────┘
//!
//!   ConcurrentCache: Send + Sync marker for internally locked caches
//! ```
//!
//! All methods take `&mut self`: they are meant for an owner that already
//! serializes access. The thread-safe
//! [`ConcurrentLruCache`](crate::policy::lru::ConcurrentLruCache) exposes the
//! same operations as inherent `&self` methods instead.

/// Operations every cache supports.
///
/// ```
/// use std::sync::Arc;
/// use lrukit::policy::lru::LruCore;
/// use lrukit::traits::CoreCache;
///
/// fn warm<C: CoreCache<u64, Arc<String>>>(cache: &mut C, data: &[(u64, &str)]) {
///     for (key, value) in data {
///         cache.insert(*key, Arc::new(value.to_string()));
///     }
/// }
///
/// let mut cache = LruCore::new(8);
/// warm(&mut cache, &[(1, "one"), (2, "two")]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key existed.
    ///
    /// May evict the least recently used entry when the cache is full.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value for `key` and records the access.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if `key` is cached. Does not record an access.
    fn contains(&self, key: &K) -> bool;

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries retained.
    fn capacity(&self) -> usize;

    /// Removes every entry; capacity is unchanged.
    fn clear(&mut self);
}

/// Adds removal of arbitrary keys.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key`, returning its value if it was cached.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes each key in order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Recency-specific operations.
///
/// ```
/// use std::sync::Arc;
/// use lrukit::policy::lru::LruCore;
/// use lrukit::traits::{CoreCache, LruCacheTrait};
///
/// let mut cache: LruCore<u64, &str> = LruCore::new(3);
/// cache.insert(1, Arc::new("a"));
/// cache.insert(2, Arc::new("b"));
/// cache.insert(3, Arc::new("c"));
///
/// cache.get(&1);
/// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
///
/// assert!(cache.touch(&2));
/// assert_eq!(cache.recency_rank(&2), Some(0));
///
/// let (key, _) = cache.pop_lru().unwrap();
/// assert_eq!(key, 3);
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used entry without changing order.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` as most recently used; `false` if absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of `key` counted from the MRU end (0 = MRU). O(n).
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

/// Marker for caches that lock internally and can be shared across threads.
///
/// ```
/// use lrukit::policy::lru::ConcurrentLruCache;
/// use lrukit::traits::ConcurrentCache;
///
/// fn share<C: ConcurrentCache + Clone + 'static>(cache: &C) -> std::thread::JoinHandle<()> {
///     let cache = cache.clone();
///     std::thread::spawn(move || drop(cache))
/// }
///
/// let cache: ConcurrentLruCache<String, u32> = ConcurrentLruCache::new(4);
/// share(&cache).join().unwrap();
/// ```
#[cfg(feature = "concurrency")]
pub trait ConcurrentCache: Send + Sync {}
