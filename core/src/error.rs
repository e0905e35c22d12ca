//! Error type for list and cursor operations.
//!
//! Every fallible operation validates its preconditions before touching the
//! buffer, so an `Err` always leaves the list exactly as it was.

use crate::String;
use thiserror::Error;

/// Errors raised by [`ArrayList`](crate::ArrayList) and its
/// [`Cursor`](crate::Cursor).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The target element is absent, or the list is empty when an element
    /// is required (`add_after`, `remove_first`, `remove_last`,
    /// `remove_by_value`, `first`, `last`).
    #[error("element not found")]
    NotFound,

    /// The index is outside the valid range for the operation.
    ///
    /// `get`, `set` and `remove_at` need `index < size`; `add_at` also
    /// accepts `index == size`.
    #[error("index {index} out of range for list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// `remove_current` was called without an unconsumed `advance`.
    #[error("cursor has no current element to remove")]
    IllegalIteratorState,

    /// The list was modified outside of this cursor since it last looked.
    #[error("list modified during iteration (expected modification {expected}, found {found})")]
    ConcurrentModification { expected: u64, found: u64 },

    /// `advance` was called on an exhausted cursor.
    #[error("cursor is exhausted")]
    NoSuchElement,

    /// The requested traversal mode is not provided by this list.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Construction options were rejected.
    #[error("invalid list options: {0}")]
    InvalidOptions(String),
}

/// Shorthand for results of list operations.
pub type Result<T> = core::result::Result<T, ListError>;
