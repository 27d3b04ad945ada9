use crate::{Error, Result};
use std::cmp::Ordering;

/// An array-backed binary heap ordered by a caller-supplied comparator.
///
/// The greatest item w.r.t. the comparator sits on top.
/// Pass a reversed comparator to get a min-heap.
///
/// |          | Complexity         |
/// | -------- | ------------------ |
/// | `push`   | $O(\log n)$        |
/// | `peek`   | $O(1)$             |
/// | `pop`    | $O(\log n)$        |
/// | `remove` | $O(n)$             |
///
/// Every mutation bumps a version counter.
/// A [Cursor] remembers the version it was created at,
/// and [Heap::advance] refuses to move it once the heap has changed.
#[derive(Clone)]
pub struct Heap<T, F> {
    items: Vec<T>,
    compare: F,
    version: u64,
}

/// A detached position in a [Heap] enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    version: u64,
    position: usize,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self::with_capacity(0, compare)
    }

    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            compare,
            version: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over items in their internal (heap) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn push(&mut self, item: T) {
        self.version += 1;
        self.items.push(item);
        let last = self.items.len() - 1;
        self.sift_up(last);
    }

    pub fn peek(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyStructure)
    }

    pub fn pop(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyStructure);
        }
        self.version += 1;
        let top = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    pub fn clear(&mut self) {
        self.version += 1;
        self.items.clear();
    }

    /// Consumes the heap and returns its items from top to bottom.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut res = Vec::with_capacity(self.items.len());
        while let Ok(x) = self.pop() {
            res.push(x);
        }
        res
    }

    /// Starts an enumeration that is invalidated by any later mutation.
    pub fn cursor(&self) -> Cursor {
        Cursor {
            version: self.version,
            position: 0,
        }
    }

    /// Yields the item under `cursor` and moves it forward.
    pub fn advance(&self, cursor: &mut Cursor) -> Result<Option<&T>> {
        if cursor.version != self.version {
            return Err(Error::ConcurrentModification);
        }
        let res = self.items.get(cursor.position);
        if res.is_some() {
            cursor.position += 1;
        }
        Ok(res)
    }

    fn greater(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.items[a], &self.items[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.greater(idx, parent) {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let n = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut top = idx;
            if left < n && self.greater(left, top) {
                top = left;
            }
            if right < n && self.greater(right, top) {
                top = right;
            }
            if top == idx {
                break;
            }
            self.items.swap(idx, top);
            idx = top;
        }
    }
}

impl<T, F> Heap<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> Ordering,
{
    /// Removes one occurrence of `item`, returning whether it was found.
    pub fn remove(&mut self, item: &T) -> bool {
        let idx = match self.items.iter().position(|x| x == item) {
            Some(idx) => idx,
            None => return false,
        };
        self.version += 1;
        self.items.swap_remove(idx);
        if idx < self.items.len() {
            if idx > 0 && self.greater(idx, (idx - 1) / 2) {
                self.sift_up(idx);
            } else {
                self.sift_down(idx);
            }
        }
        true
    }
}

impl<T, F> std::fmt::Debug for Heap<T, F>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heap")
            .field("items", &self.items)
            .field("version", &self.version)
            .finish()
    }
}
