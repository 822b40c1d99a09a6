//! Operation counters for the LRU cache (`metrics` feature).

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
