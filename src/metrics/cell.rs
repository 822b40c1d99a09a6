use std::cell::Cell;

/// Counter that can be bumped through `&self`.
///
/// Used for read paths such as `peek` that only borrow the cache. The cell is
/// `Send` but not `Sync`; the concurrent cache only touches it while holding
/// its mutex.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.add(1);
    }

    #[inline]
    pub fn add(&self, n: u64) {
        self.0.set(self.0.get().saturating_add(n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incr_and_add() {
        let cell = MetricsCell::new();
        cell.incr();
        cell.add(4);
        assert_eq!(cell.get(), 5);
    }

    #[test]
    fn add_saturates() {
        let cell = MetricsCell::new();
        cell.add(u64::MAX);
        cell.incr();
        assert_eq!(cell.get(), u64::MAX);
    }
}
