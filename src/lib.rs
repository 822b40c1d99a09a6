//! lrukit: a bounded least-recently-used cache and the arena-backed
//! recency list it is built on.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache: LruCore<&str, u32> = LruCore::new(2);
//! cache.set("a", 1);
//! cache.set("b", 2);
//! cache.get(&"a");
//! cache.set("c", 3);
//! assert_eq!(cache.keys_mru(), vec!["c", "a"]);
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
