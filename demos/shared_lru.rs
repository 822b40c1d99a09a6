use std::thread;

use lrukit::builder::LruCacheBuilder;

fn main() {
    env_logger::init();

    let cache = LruCacheBuilder::new(100).build::<u64, String>();

    let handles: Vec<_> = (0..4u64)
        .map(|tid| {
            let cache = cache.clone();
            thread::spawn(move || {
                let mut hits = 0;
                for i in 0..1_000u64 {
                    let key = (tid * 31 + i) % 150;
                    if cache.get(&key).is_some() {
                        hits += 1;
                    } else {
                        cache.set(key, format!("page-{}", key));
                    }
                }
                hits
            })
        })
        .collect();

    for (tid, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(hits) => println!("thread {} hits: {}", tid, hits),
            Err(_) => eprintln!("thread {} panicked", tid),
        }
    }

    println!("len: {} / {}", cache.len(), cache.capacity());
    match cache.check_invariants() {
        Ok(()) => println!("list and index agree"),
        Err(err) => eprintln!("invariant violated: {}", err),
    }
}
