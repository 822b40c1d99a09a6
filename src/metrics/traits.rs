//! Recorder traits the LRU core calls into when the `metrics` feature is on.
//!
//! Mutating operations go through `&mut self` recorders; read-only paths
//! (`peek`, `peek_lru`, `recency_rank`) go through [`LruMetricsReadRecorder`],
//! which bumps [`MetricsCell`](super::cell::MetricsCell)s.

/// Counters common to every cache operation.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Counters for recency-specific mutations.
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
}

/// Counters for `&self` lookups.
pub trait LruMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_hit(&self);
    fn record_peek_lru_call(&self);
    fn record_peek_lru_found(&self);
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_step(&self);
}

/// Anything that can produce a point-in-time metrics snapshot.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
