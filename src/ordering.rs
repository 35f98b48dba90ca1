// ABOUTME: Dense zero-based ordering helpers shared by exercises, sets, and modules
// ABOUTME: Every insert, delete, or move renumbers siblings so order values stay contiguous
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::models::{Exercise, ExerciseSet, LibraryModule};

/// Anything that carries a dense zero-based `order` value within its parent
pub trait Ordered {
    /// Current position
    fn order(&self) -> u32;
    /// Assign a new position
    fn set_order(&mut self, order: u32);
}

impl Ordered for Exercise {
    fn order(&self) -> u32 {
        self.order
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl Ordered for ExerciseSet {
    fn order(&self) -> u32 {
        self.order
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl Ordered for LibraryModule {
    fn order(&self) -> u32 {
        self.order
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Sort by the stored order, then rewrite orders as `0..len`.
///
/// Collapses any gaps left by deletions and resolves duplicates by current
/// relative position (stable sort).
pub fn renumber<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(Ordered::order);
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32);
    }
}

/// Move the item currently at `from` to position `to`, shifting the items in
/// between, then renumber densely. Out-of-range `to` clamps to the end.
pub fn move_to_index<T: Ordered>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let target = to.min(items.len());
    items.insert(target, item);
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32);
    }
}

/// Whether the order values form exactly `{0, 1, .., len-1}`
#[must_use]
pub fn is_dense<T: Ordered>(items: &[T]) -> bool {
    let mut orders: Vec<u32> = items.iter().map(Ordered::order).collect();
    orders.sort_unstable();
    orders
        .iter()
        .enumerate()
        .all(|(index, order)| *order == index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: char,
        order: u32,
    }

    impl Ordered for Item {
        fn order(&self) -> u32 {
            self.order
        }
        fn set_order(&mut self, order: u32) {
            self.order = order;
        }
    }

    fn items(entries: &[(char, u32)]) -> Vec<Item> {
        entries
            .iter()
            .map(|(id, order)| Item { id: *id, order: *order })
            .collect()
    }

    #[test]
    fn test_renumber_collapses_gaps() {
        let mut list = items(&[('a', 0), ('b', 4), ('c', 2)]);
        renumber(&mut list);
        let ids: Vec<char> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!['a', 'c', 'b']);
        assert!(is_dense(&list));
    }

    #[test]
    fn test_move_to_index_reindexes() {
        // Orders [0,1,2,3]; moving index 3 to index 1 yields a,d,b,c re-numbered 0..4
        let mut list = items(&[('a', 0), ('b', 1), ('c', 2), ('d', 3)]);
        move_to_index(&mut list, 3, 1);
        let ids: Vec<char> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!['a', 'd', 'b', 'c']);
        assert!(is_dense(&list));
    }

    #[test]
    fn test_move_clamps_out_of_range_target() {
        let mut list = items(&[('a', 0), ('b', 1)]);
        move_to_index(&mut list, 0, 99);
        let ids: Vec<char> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!['b', 'a']);
        assert!(is_dense(&list));
    }
}
