use lrukit::policy::lru::LruCore;
use lrukit::traits::{CoreCache, LruCacheTrait};

fn main() {
    env_logger::init();

    let mut cache: LruCore<u32, String> = LruCore::new(2);

    cache.set(1, "alpha".to_string());
    cache.set(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value.as_str());
    }

    cache.set(3, "gamma".to_string());

    println!("contains 2? {}", cache.contains(&2));
    println!("updated 3? {}", cache.set(3, "GAMMA".to_string()));
    println!("lru: {:?}", cache.peek_lru().map(|(k, _)| *k));
}

// Expected output:
// hit 1: alpha
// contains 2? false
// updated 3? true
// lru: Some(1)
//
// Explanation: capacity=2; after get(&1), key 1 is MRU and key 2 is LRU.
// Setting key 3 evicts key 2. Re-setting key 3 reports an update and leaves
// key 1 as the least recently used entry.
//
// Run with RUST_LOG=trace to see construction and eviction logging.
