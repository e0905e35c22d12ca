//! The ordered-list contract.

use crate::error::Result;

/// An ordered collection addressed by position, with no ordering imposed on
/// the elements themselves.
///
/// Positions run from `0` to `size() - 1`. Lookups by value use the
/// element's [`PartialEq`] and always pick the first match from the front.
pub trait IndexedList<T: PartialEq> {
    /// Fail-fast forward traversal handle.
    type Cursor;

    /// Insert `element` before every other element.
    fn add_to_front(&mut self, element: T);

    /// Append `element` after every other element.
    fn add_to_rear(&mut self, element: T);

    /// Same as [`add_to_rear`](Self::add_to_rear).
    fn add(&mut self, element: T) {
        self.add_to_rear(element);
    }

    /// Insert `element` directly after the first occurrence of `target`.
    fn add_after(&mut self, element: T, target: &T) -> Result<()>;

    /// Insert `element` at `index`, moving later elements back by one.
    fn add_at(&mut self, index: usize, element: T) -> Result<()>;

    fn remove_first(&mut self) -> Result<T>;

    fn remove_last(&mut self) -> Result<T>;

    /// Remove and return the first element equal to `element`.
    fn remove_by_value(&mut self, element: &T) -> Result<T>;

    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Replace the element at `index`, returning the old one.
    fn set(&mut self, index: usize, element: T) -> Result<T>;

    fn get(&self, index: usize) -> Result<&T>;

    /// Position of the first element equal to `element`.
    fn index_of(&self, element: &T) -> Option<usize>;

    fn first(&self) -> Result<&T>;

    fn last(&self) -> Result<&T>;

    fn contains(&self, target: &T) -> bool {
        self.index_of(target).is_some()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn size(&self) -> usize;

    /// Start a forward traversal from the front.
    fn cursor(&self) -> Self::Cursor;

    /// Bidirectional traversal from the front.
    fn list_cursor(&self) -> Result<Self::Cursor>;

    /// Bidirectional traversal starting at `index`.
    fn list_cursor_at(&self, index: usize) -> Result<Self::Cursor>;
}
