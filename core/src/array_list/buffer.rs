//! Fixed-capacity slot storage backing [`ArrayList`](super::ArrayList).
//!
//! Live elements always sit in `slots[..len]` with no gaps; every slot from
//! `len` to the end is `None`. Growth replaces the whole slot array in one
//! step, and capacity never shrinks.

use crate::{Box, Vec};
use core::iter;

pub(crate) struct SlotBuffer<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    growth_factor: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> SlotBuffer<T> {
    pub(crate) fn new(capacity: usize, growth_factor: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
            growth_factor,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Make room for one more element if the buffer is full.
    #[inline]
    pub(crate) fn reserve_one(&mut self) {
        if self.len == self.capacity() {
            self.reserve_one_unchecked();
        }
    }

    #[cold]
    fn reserve_one_unchecked(&mut self) {
        debug_assert_eq!(self.len, self.capacity());
        let old_cap = self.capacity();
        let new_cap = old_cap
            .saturating_mul(self.growth_factor)
            .max(old_cap.saturating_add(1));
        self.grow(new_cap);
        tracing::debug!(old_cap, new_cap, "grew list buffer");
    }

    fn grow(&mut self, new_cap: usize) {
        assert!(new_cap >= self.len);
        let mut slots: Vec<Option<T>> = Vec::with_capacity(new_cap);
        slots.extend(self.slots[..self.len].iter_mut().map(Option::take));
        slots.resize_with(new_cap, || None);
        self.slots = slots.into_boxed_slice();
    }

    /// Move `slots[from..len]` up by `count`, leaving `count` empty slots
    /// starting at `from`. Does not change `len`.
    ///
    /// The rotation walks the range from the top down, so nothing is
    /// overwritten before it has moved.
    fn shift_right(&mut self, from: usize, count: usize) {
        debug_assert!(from <= self.len);
        debug_assert!(self.len + count <= self.capacity());
        self.slots[from..self.len + count].rotate_right(count);
    }

    /// Move `slots[from..len]` down by `count` into the empty slots just
    /// below `from`. The emptied slots end up at the top of the live range.
    /// Does not change `len`.
    fn shift_left(&mut self, from: usize, count: usize) {
        debug_assert!(count <= from && from <= self.len);
        debug_assert!(self.slots[from - count..from].iter().all(Option::is_none));
        self.slots[from - count..self.len].rotate_left(count);
    }

    /// Insert at `index <= len`. The caller must have reserved room.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        self.shift_right(index, 1);
        self.slots[index] = Some(value);
        self.len += 1;
    }

    /// Remove the element at `index < len`, closing the gap.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let value = self.slots[index].take();
        self.shift_left(index + 1, 1);
        self.len -= 1;
        value
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.live().get(index)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let len = self.len;
        self.slots[..len].get_mut(index)?.as_mut()
    }

    /// Drop every live element, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        let len = self.len;
        self.slots[..len].iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    pub(crate) fn live(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    pub(crate) fn into_slots(self) -> (Box<[Option<T>]>, usize) {
        (self.slots, self.len)
    }
}

impl<T: Clone> Clone for SlotBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
            growth_factor: self.growth_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contents(buf: &SlotBuffer<u32>) -> Vec<Option<u32>> {
        buf.slots.to_vec()
    }

    #[test]
    fn test_grow() {
        let mut buf = SlotBuffer::new(2, 2);
        buf.reserve_one();
        buf.insert(0, 1);
        buf.reserve_one();
        buf.insert(1, 2);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.capacity(), 2);

        buf.reserve_one();
        buf.insert(2, 3);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(contents(&buf), [Some(1), Some(2), Some(3), None]);
    }

    #[test]
    fn test_grow_uses_factor() {
        let mut buf = SlotBuffer::new(3, 3);
        for i in 0..4 {
            buf.reserve_one();
            buf.insert(i, i as u32);
        }
        assert_eq!(buf.capacity(), 9);
        assert_eq!(buf.growth_factor(), 3);
    }

    #[test]
    fn test_insert_shifts_from_the_top() {
        let mut buf = SlotBuffer::new(5, 2);
        for (i, v) in [10, 20, 30].into_iter().enumerate() {
            buf.insert(i, v);
        }
        buf.insert(0, 5);
        assert_eq!(contents(&buf), [Some(5), Some(10), Some(20), Some(30), None]);
        buf.insert(2, 15);
        assert_eq!(
            contents(&buf),
            [Some(5), Some(10), Some(15), Some(20), Some(30)]
        );
    }

    #[test]
    fn test_remove_clears_vacated_slot() {
        let mut buf = SlotBuffer::new(4, 2);
        for (i, v) in [1, 2, 3, 4].into_iter().enumerate() {
            buf.insert(i, v);
        }
        assert_eq!(buf.remove(1), Some(2));
        assert_eq!(contents(&buf), [Some(1), Some(3), Some(4), None]);
        assert_eq!(buf.remove(2), Some(4));
        assert_eq!(contents(&buf), [Some(1), Some(3), None, None]);
        assert_eq!(buf.remove(2), None);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buf = SlotBuffer::new(4, 2);
        buf.insert(0, 7);
        buf.insert(1, 8);
        buf.clear();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(contents(&buf), [None, None, None, None]);
    }
}
