// ==============================================
// LRU CACHE SCENARIOS (integration)
// ==============================================
//
// End-to-end behavior through the public API of the single-threaded core
// and, when enabled, the thread-safe wrapper.

use std::sync::Arc;

use lrukit::builder::LruCacheBuilder;
use lrukit::ds::IntrusiveList;
use lrukit::policy::lru::LruCore;
use lrukit::traits::{CoreCache, LruCacheTrait};

// ==============================================
// Eviction Order
// ==============================================

mod eviction_order {
    use super::*;

    #[test]
    fn read_of_oldest_entry_redirects_eviction() {
        let mut cache = LruCore::new(3);
        assert!(!cache.set("a", 1));
        assert!(!cache.set("b", 2));
        assert!(!cache.set("c", 3));

        assert_eq!(cache.get_cloned(&"a"), Some(1));
        assert!(!cache.set("d", 4));

        assert_eq!(cache.get_cloned(&"b"), None);
        assert_eq!(cache.get_cloned(&"a"), Some(1));
        assert_eq!(cache.get_cloned(&"c"), Some(3));
        assert_eq!(cache.get_cloned(&"d"), Some(4));
    }

    #[test]
    fn distinct_inserts_saturate_at_capacity() {
        for capacity in [1usize, 2, 7, 64] {
            let mut cache = LruCore::new(capacity);
            for i in 0..capacity * 3 {
                cache.set(i, i);
            }
            assert_eq!(cache.len(), capacity);
            assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(capacity * 2));
            cache.check_invariants().unwrap();
        }
    }

    #[test]
    fn pop_lru_drains_oldest_first() {
        let mut cache = LruCore::new(4);
        for key in ["w", "x", "y", "z"] {
            cache.set(key, key.len());
        }
        cache.touch(&"w");

        let drained: Vec<_> = std::iter::from_fn(|| cache.pop_lru().map(|(k, _)| k)).collect();
        assert_eq!(drained, vec!["x", "y", "z", "w"]);
        assert!(cache.is_empty());
    }
}

// ==============================================
// Update Semantics
// ==============================================

mod updates {
    use super::*;

    #[test]
    fn second_set_reports_existing_and_replaces_value() {
        let mut cache = LruCore::new(8);
        let before = cache.len();
        assert!(!cache.set("k", "v1"));
        assert!(cache.set("k", "v2"));
        assert_eq!(cache.len(), before + 1);
        assert_eq!(cache.get_cloned(&"k"), Some("v2"));
    }

    #[test]
    fn reads_change_order_but_not_size_or_values() {
        let mut cache = LruCore::new(3);
        cache.set(1, 'a');
        cache.set(2, 'b');
        cache.set(3, 'c');

        for key in [1, 3, 1, 2] {
            let len = cache.len();
            let value = cache.get(&key).map(|v| **v);
            assert_eq!(cache.len(), len);
            assert_eq!(value, Some((b'a' + key as u8 - 1) as char));
        }
        assert_eq!(cache.keys_mru(), vec![2, 1, 3]);
    }

    #[test]
    fn insert_hands_back_the_replaced_arc() {
        let mut cache = LruCore::new(2);
        let first = Arc::new(String::from("first"));
        cache.insert(1, Arc::clone(&first));
        let replaced = cache.insert(1, Arc::new(String::from("second"))).unwrap();
        assert!(Arc::ptr_eq(&first, &replaced));
    }
}

// ==============================================
// Clear
// ==============================================

mod clear {
    use super::*;

    #[test]
    fn clear_is_idempotent() {
        let mut cache: LruCore<String, u32> = LruCore::new(3);
        cache.clear();
        cache.clear();
        assert!(cache.is_empty());

        cache.set("a".into(), 1);
        cache.set("b".into(), 2);
        cache.clear();
        assert!(cache.get(&"a".to_string()).is_none());
        assert!(cache.get(&"b".to_string()).is_none());
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), 3);
    }
}

// ==============================================
// Configuration
// ==============================================

mod configuration {
    use super::*;

    #[test]
    fn zero_capacity_paths() {
        assert!(LruCore::<u8, u8>::try_new(0).is_err());
        assert!(LruCacheBuilder::new(0).try_build_core::<u8, u8>().is_err());

        let mut cache = LruCore::new(0);
        assert!(!cache.set(1u8, 1u8));
        assert!(!cache.set(1u8, 2u8));
        assert!(cache.is_empty());
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn builder_produces_shared_cache() {
        let cache = LruCacheBuilder::new(3).prealloc(false).build::<u32, u32>();
        let other = cache.clone();
        for i in 0..5 {
            other.set(i, i);
        }
        assert_eq!(cache.keys_mru(), vec![4, 3, 2]);
    }
}

// ==============================================
// Ordered List
// ==============================================

mod ordered_list {
    use super::*;

    #[test]
    fn list_tracks_recency_by_handle() {
        let mut list = IntrusiveList::new();
        assert!(list.front().is_none());
        assert!(list.back().is_none());

        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_back("c");
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);

        assert!(list.move_to_front(c));
        assert_eq!(list.front(), Some(&"c"));
        assert_eq!(list.back(), Some(&"a"));

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.remove(a), None);
        assert_eq!(list.len(), 2);
        assert_eq!(list.back(), Some(&"b"));
        assert_eq!(list.back_id(), Some(b));
    }
}
