#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::policy::lru::LruCore;
use lrukit::traits::{CoreCache, LruCacheTrait, MutableCache};

// Fuzz arbitrary operation sequences on LruCore
//
// First byte picks the capacity (0..=15). Each following pair is an op and a
// key. The cache must stay within capacity and keep list and index in step.
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap_byte % 16);
    let mut cache: LruCore<u8, u32> = LruCore::new(capacity);

    for (step, chunk) in ops.chunks_exact(2).enumerate() {
        let key = chunk[1] % 32;
        match chunk[0] % 8 {
            0 | 1 | 2 => {
                let existed = cache.contains(&key);
                assert_eq!(cache.set(key, step as u32), existed);
                if capacity > 0 {
                    assert_eq!(cache.keys_mru().first(), Some(&key));
                }
            },
            3 | 4 => {
                let present = cache.contains(&key);
                let len = cache.len();
                assert_eq!(cache.get(&key).is_some(), present);
                assert_eq!(cache.len(), len);
                if present {
                    assert_eq!(cache.recency_rank(&key), Some(0));
                }
            },
            5 => {
                let present = cache.contains(&key);
                assert_eq!(cache.remove(&key).is_some(), present);
                assert!(!cache.contains(&key));
            },
            6 => {
                let lru = cache.peek_lru().map(|(k, _)| *k);
                assert_eq!(cache.pop_lru().map(|(k, _)| k), lru);
            },
            _ => {
                if key == 0 {
                    cache.clear();
                    assert!(cache.is_empty());
                } else {
                    let present = cache.contains(&key);
                    assert_eq!(cache.touch(&key), present);
                }
            },
        }

        assert!(cache.len() <= capacity);
        assert_eq!(cache.keys_mru().len(), cache.len());
        if let Err(err) = cache.check_invariants() {
            panic!("invariant violated after step {}: {}", step, err);
        }
    }
});
