//! Slot storage with stable integer handles.
//!
//! `SlotArena` hands out a [`SlotId`] for every inserted value. The id stays
//! valid until the value is removed; freed slots go on a free list and are
//! reused by later inserts, so the backing `Vec` never grows past the peak
//! number of live values.
//!
//! ```text
//!   slots:     [ Some(a) | None | Some(c) | Some(d) ]
//!   free_list: [ 1 ]
//!
//!   insert(e) -> SlotId(1)   (reuses the hole)
//!   insert(f) -> SlotId(4)   (appends)
//! ```
//!
//! A removed id may be handed out again for a different value. Holders of
//! ids must drop them in the same step that removes the value.

/// Stable handle to a value stored in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Vector-backed arena with free-slot reuse.
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Creates an arena with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns its handle.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = match self.free_list.pop() {
            Some(idx) => {
                debug_assert!(self.slots[idx].is_none());
                self.slots[idx] = Some(value);
                idx
            },
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            },
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Takes the value out of `id`'s slot; `None` if the slot is empty.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let value = self.slots.get_mut(id.0)?.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: SlotId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every value and forgets all handles. Keeps the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }

    /// Iterates occupied slots in index order (not insertion order).
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|value| (SlotId(idx), value)))
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut arena = SlotArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(a));
        assert!(arena.contains(b));
    }

    #[test]
    fn removed_slot_is_reused() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        arena.insert(2);
        arena.remove(a);

        let c = arena.insert(3);
        assert_eq!(c.index(), a.index());
        assert_eq!(arena.get(c), Some(&3));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn double_remove_is_noop() {
        let mut arena = SlotArena::new();
        let a = arena.insert(10);
        assert_eq!(arena.remove(a), Some(10));
        assert_eq!(arena.remove(a), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn out_of_range_id_is_absent() {
        let mut arena: SlotArena<u8> = SlotArena::new();
        let bogus = SlotId(42);
        assert_eq!(arena.get(bogus), None);
        assert_eq!(arena.get_mut(bogus), None);
        assert_eq!(arena.remove(bogus), None);
        assert!(!arena.contains(bogus));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = SlotArena::new();
        let id = arena.insert(String::from("x"));
        if let Some(value) = arena.get_mut(id) {
            value.push('y');
        }
        assert_eq!(arena.get(id).map(String::as_str), Some("xy"));
    }

    #[test]
    fn clear_keeps_allocation() {
        let mut arena = SlotArena::with_capacity(8);
        for i in 0..8 {
            arena.insert(i);
        }
        let cap = arena.capacity();
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.capacity(), cap);
        assert_eq!(arena.iter().count(), 0);
    }

    #[test]
    fn iter_skips_holes() {
        let mut arena = SlotArena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        let c = arena.insert('c');
        arena.remove(b);

        let seen: Vec<_> = arena.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(seen, vec![(a, 'a'), (c, 'c')]);
    }
}
