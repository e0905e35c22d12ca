#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Array-backed ordered list with index and position-relative editing, and a
//! fail-fast forward cursor.

// This works on std and no_std and is harmless.
extern crate alloc;

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod array_list;
pub mod error;
pub mod list;
pub mod options;

pub use array_list::{ArrayList, Cursor, IntoIter, Iter};
pub use error::{ListError, Result};
pub use list::IndexedList;
pub use options::{ListOptions, ListOptionsOverride};
