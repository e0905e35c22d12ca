//! Fail-fast forward cursor.
//!
//! A [`Cursor`] does not borrow the list. It remembers the next position to
//! visit and the list's modification count at the time it last agreed with
//! the list; every call takes the list explicitly. If anything other than
//! the cursor itself changes the list, the next `advance` reports
//! [`ListError::ConcurrentModification`] instead of yielding stale data.
//!
//! ```
//! use iulist_core::{ArrayList, ListError};
//!
//! let mut list: ArrayList<char> = "abc".chars().collect();
//! let mut cursor = list.cursor();
//! assert_eq!(cursor.advance(&list), Ok(&'a'));
//! assert_eq!(cursor.advance(&list), Ok(&'b'));
//! assert_eq!(cursor.remove_current(&mut list), Ok('b'));
//! assert_eq!(cursor.advance(&list), Ok(&'c'));
//! assert!(!cursor.has_next(&list));
//!
//! let mut stale = list.cursor();
//! list.add_to_rear('d');
//! assert!(matches!(
//!     stale.advance(&list),
//!     Err(ListError::ConcurrentModification { .. })
//! ));
//! ```
//!
//! A cursor must only be used with the list that created it.

use super::ArrayList;
use crate::error::{ListError, Result};
use core::marker::PhantomData;

pub struct Cursor<T> {
    /// Position of the element the next `advance` yields.
    next: usize,
    expected_mod_count: u64,
    can_remove: bool,
    _elem: PhantomData<fn(&T)>,
}

impl<T> Cursor<T> {
    pub(super) fn new(mod_count: u64) -> Self {
        Self {
            next: 0,
            expected_mod_count: mod_count,
            can_remove: false,
            _elem: PhantomData,
        }
    }

    fn check_fresh(&self, list: &ArrayList<T>) -> Result<()> {
        if list.mod_count() != self.expected_mod_count {
            tracing::debug!(
                expected = self.expected_mod_count,
                found = list.mod_count(),
                "stale cursor"
            );
            return Err(ListError::ConcurrentModification {
                expected: self.expected_mod_count,
                found: list.mod_count(),
            });
        }
        Ok(())
    }

    pub fn has_next(&self, list: &ArrayList<T>) -> bool {
        self.next < list.size()
    }

    /// Yield the next element.
    ///
    /// Staleness is checked first, then exhaustion.
    pub fn advance<'a>(&mut self, list: &'a ArrayList<T>) -> Result<&'a T> {
        self.check_fresh(list)?;
        let element = list.buf.get(self.next).ok_or(ListError::NoSuchElement)?;
        self.next += 1;
        self.can_remove = true;
        Ok(element)
    }

    /// Remove the element returned by the last `advance`.
    ///
    /// Allowed once per `advance`. The cursor keeps working afterwards;
    /// every other cursor over `list` goes stale.
    pub fn remove_current(&mut self, list: &mut ArrayList<T>) -> Result<T> {
        self.check_fresh(list)?;
        if !self.can_remove {
            return Err(ListError::IllegalIteratorState);
        }
        let index = self.next - 1;
        let removed = list.take_at(index)?;
        self.next = index;
        self.can_remove = false;
        self.expected_mod_count = list.mod_count();
        tracing::trace!(index, "removed through cursor");
        Ok(removed)
    }
}

impl<T> core::fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("next", &self.next)
            .field("expected_mod_count", &self.expected_mod_count)
            .field("can_remove", &self.can_remove)
            .finish()
    }
}
