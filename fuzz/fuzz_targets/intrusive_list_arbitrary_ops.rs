#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::IntrusiveList;

// Fuzz arbitrary operation sequences on IntrusiveList
//
// Mirrors every operation on a Vec model and compares front-to-back order
// after each step. Only live ids are used, since a freed slot may be reused.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut model: Vec<(lrukit::ds::SlotId, u32)> = Vec::new();

    for chunk in data.chunks_exact(2) {
        let op = chunk[0] % 9;
        let value = u32::from(chunk[1]);

        match op {
            0 => {
                let id = list.push_front(value);
                model.insert(0, (id, value));
                assert_eq!(list.front_id(), Some(id));
            },
            1 => {
                let id = list.push_back(value);
                model.push((id, value));
                assert_eq!(list.back_id(), Some(id));
            },
            2 => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0).1)
                };
                assert_eq!(list.pop_front(), expected);
            },
            3 => {
                assert_eq!(list.pop_back(), model.pop().map(|(_, v)| v));
            },
            4 => {
                if !model.is_empty() {
                    let pos = value as usize % model.len();
                    let entry = model.remove(pos);
                    model.insert(0, entry);
                    assert!(list.move_to_front(entry.0));
                }
            },
            5 => {
                if !model.is_empty() {
                    let pos = value as usize % model.len();
                    let entry = model.remove(pos);
                    model.push(entry);
                    assert!(list.move_to_back(entry.0));
                }
            },
            6 => {
                if !model.is_empty() {
                    let pos = value as usize % model.len();
                    let (id, v) = model.remove(pos);
                    assert_eq!(list.remove(id), Some(v));
                    assert_eq!(list.remove(id), None);
                    assert!(!list.move_to_front(id));
                }
            },
            7 => {
                if !model.is_empty() {
                    let pos = value as usize % model.len();
                    let (id, v) = model[pos];
                    assert_eq!(list.get(id), Some(&v));
                    assert!(list.contains(id));
                }
            },
            _ => {
                if value % 16 == 0 {
                    list.clear();
                    model.clear();
                }
            },
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.front(), model.first().map(|(_, v)| v));
        assert_eq!(list.back(), model.last().map(|(_, v)| v));
        list.debug_validate_invariants();
    }

    let order: Vec<u32> = list.iter().copied().collect();
    let expected: Vec<u32> = model.iter().map(|(_, v)| *v).collect();
    assert_eq!(order, expected);
});
