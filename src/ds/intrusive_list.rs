//! Recency-ordered doubly linked list backed by `SlotArena`.
//!
//! Nodes live in a [`SlotArena`] and point at each other by [`SlotId`], so
//! there are no raw pointers and no reference cycles. Callers keep the
//! returned `SlotId` as a handle to their node and use it for O(1) removal
//! and promotion.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬────────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                     │
//!   ├────────┼────────────────────────────────────────────────┤
//!   │ id_0   │ { value: A, prev: None,       next: id_2 }     │
//!   │ id_1   │ { value: C, prev: id_2,       next: None }     │
//!   │ id_2   │ { value: B, prev: id_0,       next: id_1 }     │
//!   └────────┴────────────────────────────────────────────────┘
//!
//!   head (MRU) ─► [id_0] ◄──► [id_2] ◄──► [id_1] ◄── tail (LRU)
//! ```
//!
//! ## Operations
//!
//! | Operation         | Cost | Notes                                   |
//! |-------------------|------|-----------------------------------------|
//! | `push_front/back` | O(1) | allocates exactly one node              |
//! | `pop_front/back`  | O(1) |                                         |
//! | `remove(id)`      | O(1) | absent id is a no-op returning `None`   |
//! | `move_to_front`   | O(1) | head is a no-op                         |
//! | `move_to_back`    | O(1) | tail is a no-op                         |
//! | `iter*`           | O(n) | head to tail                            |
//!
//! The list is not synchronized. [`LruCore`](crate::policy::lru::LruCore)
//! owns one and the concurrent cache serializes access to it.
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked list whose nodes are addressed by `SlotId`.
#[derive(Debug)]
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the front (MRU) of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the `SlotId` at the front (MRU) of the list.
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns the value at the back (LRU) of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the `SlotId` at the back (LRU) of the list.
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Returns an iterator over values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator of `SlotId`s from front to back.
    pub fn iter_ids(&self) -> IdIter<'_, T> {
        IdIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator of `(SlotId, &T)` from front to back.
    pub fn iter_entries(&self) -> EntryIter<'_, T> {
        EntryIter {
            list: self,
            current: self.head,
        }
    }

    /// Inserts a new node at the front and returns its `SlotId`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.set_prev(old_head, Some(id)),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Inserts a new node at the back and returns its `SlotId`.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.set_next(old_tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.remove(id)
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Unlinks node `id` and returns its value.
    ///
    /// Returns `None` without touching the list if `id` is not a live node.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the front; returns `false` if `id` is not present.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Moves an existing node to the back; returns `false` if `id` is not present.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.tail == Some(id) {
            return true;
        }
        self.detach(id);
        self.attach_back(id);
        true
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    fn set_prev(&mut self, id: SlotId, prev: Option<SlotId>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, id: SlotId, next: Option<SlotId>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.next = next;
        }
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => self.set_next(prev_id, next),
            None => self.head = next,
        }
        match next {
            Some(next_id) => self.set_prev(next_id, prev),
            None => self.tail = prev,
        }

        let node = self.arena.get_mut(id)?;
        node.prev = None;
        node.next = None;
        Some(())
    }

    fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        self.set_prev(id, None);
        self.set_next(id, old_head);
        match old_head {
            Some(old_head) => self.set_prev(old_head, Some(id)),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    fn attach_back(&mut self, id: SlotId) {
        let old_tail = self.tail;
        self.set_next(id, None);
        self.set_prev(id, old_tail);
        match old_tail {
            Some(old_tail) => self.set_next(old_tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Walks the list both ways and panics on any broken link.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut forward = Vec::with_capacity(self.len());
        let mut current = self.head;
        let mut prev = None;
        while let Some(id) = current {
            let node = self.arena.get(id).expect("node missing");
            assert_eq!(node.prev, prev, "prev link of {:?} is stale", id);
            forward.push(id);
            assert!(forward.len() <= self.len(), "cycle in forward walk");
            prev = Some(id);
            current = node.next;
        }
        assert_eq!(prev, self.tail);
        assert_eq!(forward.len(), self.len());

        let mut backward = Vec::with_capacity(self.len());
        let mut current = self.tail;
        while let Some(id) = current {
            backward.push(id);
            assert!(backward.len() <= self.len(), "cycle in backward walk");
            current = self.arena.get(id).expect("node missing").prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over values from front to back.
pub struct Iter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

/// Iterator over `SlotId`s from front to back.
pub struct IdIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IdIter<'a, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.list.arena.get(id)?.next;
        Some(id)
    }
}

/// Iterator over `(SlotId, &T)` pairs from front to back.
pub struct EntryIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for EntryIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some((id, &node.value))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    #[derive(Debug, Clone)]
    enum Op {
        PushFront(u16),
        PushBack(u16),
        PopFront,
        PopBack,
        Remove(usize),
        MoveToFront(usize),
        MoveToBack(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u16>().prop_map(Op::PushFront),
            any::<u16>().prop_map(Op::PushBack),
            Just(Op::PopFront),
            Just(Op::PopBack),
            any::<usize>().prop_map(Op::Remove),
            any::<usize>().prop_map(Op::MoveToFront),
            any::<usize>().prop_map(Op::MoveToBack),
        ]
    }

    proptest! {
        /// Property: the list matches a VecDeque of (id, value) after every op
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_deque_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
            let mut list = IntrusiveList::new();
            let mut model: VecDeque<(SlotId, u16)> = VecDeque::new();

            for op in ops {
                match op {
                    Op::PushFront(v) => {
                        let id = list.push_front(v);
                        model.push_front((id, v));
                    }
                    Op::PushBack(v) => {
                        let id = list.push_back(v);
                        model.push_back((id, v));
                    }
                    Op::PopFront => {
                        prop_assert_eq!(list.pop_front(), model.pop_front().map(|(_, v)| v));
                    }
                    Op::PopBack => {
                        prop_assert_eq!(list.pop_back(), model.pop_back().map(|(_, v)| v));
                    }
                    Op::Remove(pick) => {
                        if !model.is_empty() {
                            let (id, v) = model.remove(pick % model.len()).unwrap();
                            prop_assert_eq!(list.remove(id), Some(v));
                        }
                    }
                    Op::MoveToFront(pick) => {
                        if !model.is_empty() {
                            let entry = model.remove(pick % model.len()).unwrap();
                            prop_assert!(list.move_to_front(entry.0));
                            model.push_front(entry);
                        }
                    }
                    Op::MoveToBack(pick) => {
                        if !model.is_empty() {
                            let entry = model.remove(pick % model.len()).unwrap();
                            prop_assert!(list.move_to_back(entry.0));
                            model.push_back(entry);
                        }
                    }
                }

                list.debug_validate_invariants();
                prop_assert_eq!(list.len(), model.len());
                let actual: Vec<_> = list.iter_entries().map(|(id, v)| (id, *v)).collect();
                let expected: Vec<_> = model.iter().copied().collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
