//! Plain Rust iterators over an [`ArrayList`](super::ArrayList).
//!
//! These borrow or consume the list, so the compiler already rules out
//! changes while they are alive. Use [`Cursor`](super::Cursor) when the list
//! has to stay editable between steps.

use crate::{Box, vec};
use core::iter::FusedIterator;
use core::slice;

/// Borrowing iterator returned by [`ArrayList::iter`](super::ArrayList::iter).
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(live: &'a [Option<T>]) -> Self {
        Self { slots: live.iter() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

/// Owning iterator returned by `ArrayList::into_iter`.
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(slots: Box<[Option<T>]>, len: usize) -> Self {
        let mut slots = slots.into_vec();
        slots.truncate(len);
        Self {
            slots: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
