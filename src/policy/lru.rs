//! # Least Recently Used (LRU) Cache
//!
//! A bounded key→value cache that evicts the entry that has gone longest
//! without being read or written.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                      ConcurrentLruCache<K, V>                        │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │                 Arc<Mutex<LruCore<K, V>>>                    │   │
//!   │   └──────────────────────────────┬───────────────────────────────┘   │
//!   │                                  ▼                                   │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │                        LruCore<K, V>                         │   │
//!   │   │                                                              │   │
//!   │   │   index: FxHashMap<K, SlotId>                                │   │
//!   │   │   ┌────────┬────────┐                                        │   │
//!   │   │   │  "a"   │ id_0 ──┼──────────────┐                         │   │
//!   │   │   │  "b"   │ id_2 ──┼────────┐     │                         │   │
//!   │   │   │  "c"   │ id_1 ──┼──┐     │     │                         │   │
//!   │   │   └────────┴────────┘  │     │     │                         │   │
//!   │   │                        ▼     ▼     ▼                         │   │
//!   │   │   list: IntrusiveList<Entry<K, V>>                           │   │
//!   │   │   head ──► [c] ◄──► [b] ◄──► [a] ◄── tail                    │   │
//!   │   │            MRU                LRU                            │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each list node stores the key next to the value, so evicting the tail
//! finds its index entry directly. The index entry is only dropped after
//! checking it points at the evicted node's `SlotId`.
//!
//! ## Operations Flow
//!
//! ```text
//!   set(d) on a full cache (capacity = 3)
//!
//!     head ──► [c] ◄──► [b] ◄──► [a] ◄── tail
//!
//!     1. push [d] at head, index d → id
//!     2. len 4 > capacity 3: unlink tail [a], drop index entry "a"
//!
//!     head ──► [d] ◄──► [c] ◄──► [b] ◄── tail
//!
//!   get(b)
//!
//!     1. index lookup b → id: O(1)
//!     2. move id to head: O(1)
//!
//!     head ──► [b] ◄──► [d] ◄──► [c] ◄── tail
//! ```
//!
//! ## Key Components
//!
//! | Component               | Description                                   |
//! |-------------------------|-----------------------------------------------|
//! | `LruCore<K, V>`         | Single-threaded list + index + capacity bound |
//! | `ConcurrentLruCache`    | `LruCore` behind one `parking_lot::Mutex`     |
//! | `Entry<K, V>`           | List payload: key plus `Arc<V>`               |
//!
//! ## Concurrency Model
//!
//! `get` reorders the list, so it is a write as far as the list is concerned.
//! `ConcurrentLruCache` therefore uses a single exclusive `Mutex` for every
//! operation, including `peek` and `contains`. Operations are totally ordered
//! by lock acquisition; each one observes the list and index in agreement.
//! Critical sections are O(1) apart from the diagnostic `recency_rank`,
//! `keys_mru` and `check_invariants`.
//!
//! ## Capacity Zero
//!
//! `new(0)` builds a cache that retains nothing: `set` stores nothing and
//! returns `false`. `try_new(0)` rejects the configuration instead.

use std::fmt;
use std::hash::Hash;
use std::mem;
use std::sync::Arc;

use log::{debug, trace, warn};
#[cfg(feature = "concurrency")]
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Payload stored in each list node.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: Arc<V>,
}

/// Single-threaded LRU cache: recency list plus key index.
///
/// Invariant: `index.len() == list.len() <= capacity`, and every index entry
/// names the node whose `Entry::key` is that key.
pub struct LruCore<K, V> {
    index: FxHashMap<K, SlotId>,
    list: IntrusiveList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache bounded to `capacity` entries, reserving storage up front.
    ///
    /// A capacity of 0 creates a cache that retains nothing.
    ///
    /// ```
    /// use lrukit::policy::lru::LruCore;
    /// use lrukit::traits::CoreCache;
    ///
    /// let cache: LruCore<String, u32> = LruCore::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::with_reserve(capacity, capacity)
    }

    /// Like [`new`](Self::new) but rejects a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        Ok(Self::new(capacity))
    }

    /// Creates a cache bounded to `capacity` that reserves room for `reserve` entries.
    pub(crate) fn with_reserve(capacity: usize, reserve: usize) -> Self {
        let reserve = reserve.min(capacity);
        debug!(
            "creating LRU cache (capacity={}, reserved={})",
            capacity, reserve
        );
        LruCore {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            list: IntrusiveList::with_capacity(reserve),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Stores `value` under `key` and marks it most recently used.
    ///
    /// Returns `true` if the key was already cached (its value is replaced),
    /// `false` if it is new. Inserting a new key into a full cache evicts the
    /// least recently used entry.
    ///
    /// ```
    /// use lrukit::policy::lru::LruCore;
    ///
    /// let mut cache = LruCore::new(2);
    /// assert!(!cache.set("k", 1));
    /// assert!(cache.set("k", 2));
    /// assert_eq!(cache.get_cloned(&"k"), Some(2));
    /// ```
    pub fn set(&mut self, key: K, value: V) -> bool {
        self.insert(key, Arc::new(value)).is_some()
    }

    /// Returns a clone of the value for `key`, recording the access.
    pub fn get_cloned(&mut self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.get(key).map(|value| V::clone(value))
    }

    /// Returns the value for `key` without changing recency order.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let id = *self.index.get(key)?;
        let entry = self.list.get(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_hit();

        Some(Arc::clone(&entry.value))
    }

    /// Keys from most to least recently used.
    pub fn keys_mru(&self) -> Vec<K> {
        self.list.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Checks that the list and the index describe the same set of nodes.
    ///
    /// O(n). Intended for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index has {} entries but list has {} nodes",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.list.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "list holds {} nodes, over capacity {}",
                self.list.len(),
                self.capacity
            )));
        }

        let mut walked = 0usize;
        for (id, entry) in self.list.iter_entries() {
            walked += 1;
            if walked > self.list.len() {
                return Err(InvariantError::new("cycle in recency list"));
            }
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {},
                Some(&indexed) => {
                    return Err(InvariantError::new(format!(
                        "node {} is indexed under its key as node {}",
                        id.index(),
                        indexed.index()
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "node {} has no index entry",
                        id.index()
                    )));
                },
            }
        }
        if walked != self.list.len() {
            return Err(InvariantError::new(format!(
                "walked {} nodes but list reports {}",
                walked,
                self.list.len()
            )));
        }
        if self.list.is_empty() != self.list.front_id().is_none()
            || self.list.is_empty() != self.list.back_id().is_none()
        {
            return Err(InvariantError::new("head/tail disagree with list length"));
        }
        Ok(())
    }

    /// Drops the index entry for `key` only if it refers to node `id`.
    fn unindex(&mut self, key: &K, id: SlotId) {
        match self.index.get(key) {
            Some(&indexed) if indexed == id => {
                self.index.remove(key);
            },
            _ => {
                warn!("node {} was not indexed under its key", id.index());
                debug_assert!(false, "node {} was not indexed under its key", id.index());
            },
        }
    }

    /// Unlinks the tail node and drops its index entry.
    fn remove_tail(&mut self) -> Option<(K, Arc<V>)> {
        let victim = self.list.back_id()?;
        let entry = self.list.remove(victim)?;
        self.unindex(&entry.key, victim);
        Some((entry.key, entry.value))
    }

    #[inline]
    fn debug_check_len(&self) {
        debug_assert_eq!(self.index.len(), self.list.len());
        debug_assert!(self.list.len() <= self.capacity);
    }
}

impl<K, V> CoreCache<K, Arc<V>> for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(id) = self.index.get(&key).copied() {
            if let Some(entry) = self.list.get_mut(id) {
                #[cfg(feature = "metrics")]
                self.metrics.record_insert_update();

                let previous = mem::replace(&mut entry.value, value);
                self.list.move_to_front(id);
                self.debug_check_len();
                return Some(previous);
            }
            warn!("index entry points at a missing node {}", id.index());
            debug_assert!(false, "index entry points at a missing node");
            self.index.remove(&key);
        }

        if self.capacity == 0 {
            trace!("LRU cache has zero capacity; insert dropped");
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        // A new key grows the list by exactly one, so one eviction restores the bound.
        if self.list.len() > self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if self.remove_tail().is_some() {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();

                trace!(
                    "evicted least recently used entry (len={}, capacity={})",
                    self.list.len(),
                    self.capacity
                );
            }
        }

        self.debug_check_len();
        None
    }

    fn get(&mut self, key: &K) -> Option<&Arc<V>> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        let dropped = self.list.len();
        self.list.clear();
        self.index.clear();
        if dropped > 0 {
            debug!("cleared LRU cache ({} entries dropped)", dropped);
        }
    }
}

impl<K, V> MutableCache<K, Arc<V>> for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<Arc<V>> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.index.remove(key)?;
        let entry = self.list.remove(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        trace!("removed entry (len={})", self.list.len());
        self.debug_check_len();
        Some(entry.value)
    }
}

impl<K, V> LruCacheTrait<K, Arc<V>> for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, Arc<V>)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let popped = self.remove_tail()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        self.debug_check_len();
        Some(popped)
    }

    fn peek_lru(&self) -> Option<(&K, &Arc<V>)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_call();

        let entry = self.list.back()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.index.get(key) else {
            return false;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_found();

        self.list.move_to_front(id)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        self.metrics.record_recency_rank_call();

        let &target = self.index.get(key)?;
        for (rank, id) in self.list.iter_ids().enumerate() {
            #[cfg(feature = "metrics")]
            self.metrics.record_recency_rank_scan_step();

            if id == target {
                #[cfg(feature = "metrics")]
                self.metrics.record_recency_rank_found();
                return Some(rank);
            }
        }
        None
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            clear_calls: self.metrics.clear_calls,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_hits: self.metrics.peek_hits.get(),
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.list.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> fmt::Debug for LruCore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCore")
            .field("len", &self.list.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LRU cache with a default capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}

impl<K, V> Extend<(K, Arc<V>)> for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, Arc<V>)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Thread-safe LRU cache: an [`LruCore`] behind one exclusive lock.
///
/// Cloning is cheap and yields another handle to the same cache.
///
/// ```
/// use lrukit::policy::lru::ConcurrentLruCache;
///
/// let cache: ConcurrentLruCache<String, u32> = ConcurrentLruCache::new(3);
/// assert!(!cache.set("a".to_string(), 1));
/// assert!(!cache.set("b".to_string(), 2));
/// assert!(!cache.set("c".to_string(), 3));
///
/// assert_eq!(cache.get(&"a".to_string()).as_deref(), Some(&1));
/// assert!(!cache.set("d".to_string(), 4));
///
/// // "b" was least recently used.
/// assert!(cache.get(&"b".to_string()).is_none());
/// assert_eq!(cache.len(), 3);
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentLruCache<K, V> {
    inner: Arc<Mutex<LruCore<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.list.len())
            .field("capacity", &cache.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> Default for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a concurrent LRU cache with a default capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> From<LruCore<K, V>> for ConcurrentLruCache<K, V> {
    fn from(core: LruCore<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(core)),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a thread-safe cache bounded to `capacity` entries.
    ///
    /// A capacity of 0 creates a cache that retains nothing.
    pub fn new(capacity: usize) -> Self {
        Self::from(LruCore::new(capacity))
    }

    /// Like [`new`](Self::new) but rejects a zero capacity.
    ///
    /// ```
    /// use lrukit::policy::lru::ConcurrentLruCache;
    ///
    /// assert!(ConcurrentLruCache::<u64, u64>::try_new(8).is_ok());
    /// assert!(ConcurrentLruCache::<u64, u64>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        LruCore::try_new(capacity).map(Self::from)
    }

    /// Stores `value` under `key`; `true` if the key was already cached.
    ///
    /// See [`LruCore::set`].
    pub fn set(&self, key: K, value: V) -> bool {
        self.insert(key, value).is_some()
    }

    /// Stores `value` under `key` and returns the value it replaced.
    pub fn insert(&self, key: K, value: V) -> Option<Arc<V>> {
        let value = Arc::new(value);
        self.insert_arc(key, value)
    }

    /// Stores an already shared value.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use lrukit::policy::lru::ConcurrentLruCache;
    ///
    /// let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(4);
    /// let shared = Arc::new("page".to_string());
    /// cache.insert_arc(1, Arc::clone(&shared));
    /// assert!(Arc::ptr_eq(&shared, &cache.get(&1).unwrap()));
    /// ```
    pub fn insert_arc(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        let mut cache = self.inner.lock();
        cache.insert(key, value)
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// The returned handle stays valid after the entry is evicted.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.lock();
        cache.get(key).map(Arc::clone)
    }

    /// Returns the value for `key` without changing recency order.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        let cache = self.inner.lock();
        cache.peek(key)
    }

    /// Removes `key` and returns its value.
    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.lock();
        cache.remove(key)
    }

    /// Marks `key` most recently used; `false` if absent.
    pub fn touch(&self, key: &K) -> bool {
        let mut cache = self.inner.lock();
        cache.touch(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, Arc<V>)> {
        let mut cache = self.inner.lock();
        cache.pop_lru()
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(K, Arc<V>)> {
        let cache = self.inner.lock();
        cache
            .peek_lru()
            .map(|(key, value)| (key.clone(), Arc::clone(value)))
    }

    /// Position of `key` from the MRU end. O(n) under the lock.
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        let cache = self.inner.lock();
        cache.recency_rank(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.lock();
        cache.contains(key)
    }

    pub fn len(&self) -> usize {
        let cache = self.inner.lock();
        cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        let cache = self.inner.lock();
        cache.capacity()
    }

    /// Drops every entry; capacity is unchanged.
    pub fn clear(&self) {
        let mut cache = self.inner.lock();
        cache.clear();
    }

    /// Keys from most to least recently used, as of one lock acquisition.
    pub fn keys_mru(&self) -> Vec<K> {
        let cache = self.inner.lock();
        cache.keys_mru()
    }

    /// See [`LruCore::check_invariants`].
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let cache = self.inner.lock();
        cache.check_invariants()
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        let cache = self.inner.lock();
        cache.metrics_snapshot()
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentLruCache<K, V>
where
    K: Send,
    V: Send + Sync,
{
}
