//! ArrayList: a growable, contiguous ordered list.
//!
//! The list keeps its elements packed at the front of a slot buffer and
//! counts every change it makes to its contents. [`Cursor`]s remember that
//! count when they are created and refuse to continue once someone else has
//! changed the list underneath them.
//!
//! ```
//! use iulist_core::ArrayList;
//!
//! let mut list = ArrayList::new();
//! list.add_to_rear(1);
//! list.add_to_rear(2);
//! list.add_to_front(0);
//! assert_eq!(list.to_string(), "[0,1,2]");
//!
//! list.remove_by_value(&1).unwrap();
//! assert_eq!(list.to_string(), "[0,2]");
//! assert_eq!(list.size(), 2);
//! ```

mod buffer;
mod cursor;
mod iter;


pub use cursor::Cursor;
pub use iter::{IntoIter, Iter};

use crate::error::{ListError, Result};
use crate::list::IndexedList;
use crate::options::{ListOptions, ListOptionsOverride};
use buffer::SlotBuffer;
use core::fmt;

/// An ordered list stored contiguously in a growable buffer.
pub struct ArrayList<T> {
    buf: SlotBuffer<T>,
    /// Bumped on every add, remove, set and clear.
    mod_count: u64,
}

static_assertions::assert_impl_all!(ArrayList<u8>: Send, Sync, Default, Clone);

impl<T> ArrayList<T> {
    /// Create an empty list with room for
    /// [`ListOptions::DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::from_options(ListOptions::default())
    }

    /// Create an empty list with room for `capacity` elements.
    ///
    /// Fails with [`ListError::InvalidOptions`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_options(ListOptionsOverride {
            initial_capacity: Some(capacity),
            ..Default::default()
        })
    }

    /// Create an empty list from the defaults with `over` applied.
    pub fn with_options(over: ListOptionsOverride) -> Result<Self> {
        let options = ListOptions::default().override_with(&over);
        options.validate()?;
        Ok(Self::from_options(options))
    }

    fn from_options(options: ListOptions) -> Self {
        Self {
            buf: SlotBuffer::new(options.initial_capacity, options.growth_factor),
            mod_count: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn growth_factor(&self) -> usize {
        self.buf.growth_factor()
    }

    /// How many times the contents have changed since construction.
    pub fn mod_count(&self) -> u64 {
        self.mod_count
    }

    #[inline]
    fn touch(&mut self) {
        self.mod_count = self.mod_count.wrapping_add(1);
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size() {
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        Ok(())
    }

    fn insert_at(&mut self, index: usize, element: T) {
        self.buf.reserve_one();
        self.buf.insert(index, element);
        self.touch();
    }

    fn take_at(&mut self, index: usize) -> Result<T> {
        let size = self.size();
        let element = self
            .buf
            .remove(index)
            .ok_or(ListError::IndexOutOfRange { index, size })?;
        self.touch();
        Ok(element)
    }

    pub fn add_to_front(&mut self, element: T) {
        self.insert_at(0, element);
    }

    pub fn add_to_rear(&mut self, element: T) {
        let rear = self.size();
        self.insert_at(rear, element);
    }

    /// Same as [`add_to_rear`](Self::add_to_rear).
    pub fn add(&mut self, element: T) {
        self.add_to_rear(element);
    }

    /// Insert `element` at `index`; `index == size()` appends.
    pub fn add_at(&mut self, index: usize, element: T) -> Result<()> {
        if index > self.size() {
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        self.insert_at(index, element);
        Ok(())
    }

    pub fn remove_first(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::NotFound);
        }
        self.take_at(0)
    }

    pub fn remove_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::NotFound);
        }
        self.take_at(self.size() - 1)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        self.take_at(index)
    }

    /// Replace the element at `index` and return the previous one.
    ///
    /// Counts as a modification: open cursors go stale.
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        self.check_index(index)?;
        let size = self.size();
        let slot = self
            .buf
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, size })?;
        let old = core::mem::replace(slot, element);
        self.touch();
        Ok(old)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.buf.get(index).ok_or(ListError::IndexOutOfRange {
            index,
            size: self.size(),
        })
    }

    pub fn first(&self) -> Result<&T> {
        self.buf.get(0).ok_or(ListError::NotFound)
    }

    pub fn last(&self) -> Result<&T> {
        let last = self.size().checked_sub(1).ok_or(ListError::NotFound)?;
        self.buf.get(last).ok_or(ListError::NotFound)
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.buf.clear();
            self.touch();
        }
    }

    /// Start a fail-fast traversal from the front.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self.mod_count)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.buf.live())
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Position of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|stored| stored == element)
    }

    pub fn contains(&self, target: &T) -> bool {
        self.index_of(target).is_some()
    }

    /// Insert `element` directly after the first element equal to `target`.
    pub fn add_after(&mut self, element: T, target: &T) -> Result<()> {
        let index = self.index_of(target).ok_or(ListError::NotFound)?;
        self.insert_at(index + 1, element);
        Ok(())
    }

    /// Remove the first element equal to `element`.
    pub fn remove_by_value(&mut self, element: &T) -> Result<T> {
        let index = self.index_of(element).ok_or(ListError::NotFound)?;
        self.take_at(index)
    }
}

impl<T: PartialEq> IndexedList<T> for ArrayList<T> {
    type Cursor = Cursor<T>;

    fn add_to_front(&mut self, element: T) {
        ArrayList::add_to_front(self, element)
    }

    fn add_to_rear(&mut self, element: T) {
        ArrayList::add_to_rear(self, element)
    }

    fn add_after(&mut self, element: T, target: &T) -> Result<()> {
        ArrayList::add_after(self, element, target)
    }

    fn add_at(&mut self, index: usize, element: T) -> Result<()> {
        ArrayList::add_at(self, index, element)
    }

    fn remove_first(&mut self) -> Result<T> {
        ArrayList::remove_first(self)
    }

    fn remove_last(&mut self) -> Result<T> {
        ArrayList::remove_last(self)
    }

    fn remove_by_value(&mut self, element: &T) -> Result<T> {
        ArrayList::remove_by_value(self, element)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        ArrayList::remove_at(self, index)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T> {
        ArrayList::set(self, index, element)
    }

    fn get(&self, index: usize) -> Result<&T> {
        ArrayList::get(self, index)
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        ArrayList::index_of(self, element)
    }

    fn first(&self) -> Result<&T> {
        ArrayList::first(self)
    }

    fn last(&self) -> Result<&T> {
        ArrayList::last(self)
    }

    fn size(&self) -> usize {
        ArrayList::size(self)
    }

    fn cursor(&self) -> Cursor<T> {
        ArrayList::cursor(self)
    }

    fn list_cursor(&self) -> Result<Cursor<T>> {
        Err(ListError::UnsupportedOperation("list cursor"))
    }

    fn list_cursor_at(&self, _index: usize) -> Result<Cursor<T>> {
        Err(ListError::UnsupportedOperation("list cursor"))
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            mod_count: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[a,b,c]`; an empty list renders as `[]`.
impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_to_rear(element);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (slots, len) = self.buf.into_slots();
        IntoIter::new(slots, len)
    }
}
