//! Configuration layer for LRU caches.
//!
//! The only setting that changes behavior is the capacity. `prealloc` is a
//! sizing hint: when on (the default) the index and node arena reserve room
//! for `capacity` entries up front; when off they grow on demand.
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::LruCacheBuilder;
//!
//! let mut cache = LruCacheBuilder::new(100).build_core::<u64, String>();
//! cache.set(1, "hello".to_string());
//! assert_eq!(cache.get_cloned(&1), Some("hello".to_string()));
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
#[cfg(feature = "concurrency")]
use crate::policy::lru::ConcurrentLruCache;
use crate::policy::lru::LruCore;

/// Capacity used by [`LruCacheBuilder::default`].
pub const DEFAULT_CAPACITY: usize = 1000;

/// Builder for [`LruCore`] and [`ConcurrentLruCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LruCacheBuilder {
    capacity: usize,
    prealloc: bool,
}

impl LruCacheBuilder {
    /// Create a new builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            prealloc: true,
        }
    }

    /// Replace the capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reserve storage for the full capacity at construction.
    pub fn prealloc(mut self, prealloc: bool) -> Self {
        self.prealloc = prealloc;
        self
    }

    /// Build a single-threaded cache.
    ///
    /// A capacity of 0 yields a cache that retains nothing.
    pub fn build_core<K, V>(self) -> LruCore<K, V>
    where
        K: Eq + Hash + Clone,
    {
        let reserve = if self.prealloc { self.capacity } else { 0 };
        LruCore::with_reserve(self.capacity, reserve)
    }

    /// Build a single-threaded cache, rejecting a zero capacity.
    pub fn try_build_core<K, V>(self) -> Result<LruCore<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.validate()?;
        Ok(self.build_core())
    }

    /// Build a thread-safe cache.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lrukit::builder::LruCacheBuilder;
    ///
    /// let cache = LruCacheBuilder::new(2).prealloc(false).build::<&str, i32>();
    /// cache.set("a", 1);
    /// cache.set("b", 2);
    /// cache.set("c", 3);
    /// assert!(!cache.contains(&"a"));
    /// ```
    #[cfg(feature = "concurrency")]
    pub fn build<K, V>(self) -> ConcurrentLruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        ConcurrentLruCache::from(self.build_core())
    }

    /// Build a thread-safe cache, rejecting a zero capacity.
    #[cfg(feature = "concurrency")]
    pub fn try_build<K, V>(self) -> Result<ConcurrentLruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.try_build_core().map(ConcurrentLruCache::from)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for LruCacheBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CoreCache;

    #[test]
    fn test_build_core_basic_ops() {
        let mut cache = LruCacheBuilder::new(10).build_core::<u64, String>();

        assert!(!cache.set(1, "one".to_string()));
        assert!(!cache.set(2, "two".to_string()));
        assert_eq!(cache.get_cloned(&1), Some("one".to_string()));
        assert_eq!(cache.get_cloned(&3), None);
        assert_eq!(cache.len(), 2);

        assert!(cache.set(1, "ONE".to_string()));
        assert_eq!(cache.get_cloned(&1), Some("ONE".to_string()));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_enforcement() {
        let mut cache = LruCacheBuilder::new(2)
            .prealloc(false)
            .build_core::<u64, &str>();

        cache.set(1, "one");
        cache.set(2, "two");
        cache.set(3, "three"); // evicts 1

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn test_capacity_setter_and_default() {
        let builder = LruCacheBuilder::default();
        assert_eq!(builder.build_core::<u8, u8>().capacity(), DEFAULT_CAPACITY);
        let builder = builder.capacity(7);
        assert_eq!(builder.build_core::<u8, u8>().capacity(), 7);
    }

    #[test]
    fn test_try_build_rejects_zero() {
        let err = LruCacheBuilder::new(0)
            .try_build_core::<u8, u8>()
            .unwrap_err();
        assert_eq!(err.message(), "cache capacity must be greater than zero");

        // the infallible path still produces a cache that stores nothing
        let mut cache = LruCacheBuilder::new(0).build_core::<u8, u8>();
        assert!(!cache.set(1, 1));
        assert!(cache.is_empty());
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn test_build_concurrent() {
        let cache = LruCacheBuilder::new(3).build::<String, u32>();
        assert!(!cache.set("a".into(), 1));
        assert_eq!(cache.capacity(), 3);
        assert!(LruCacheBuilder::new(0).try_build::<String, u32>().is_err());
        assert!(LruCacheBuilder::new(1).try_build::<String, u32>().is_ok());
    }
}
