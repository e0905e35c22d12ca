//! iulist - an array-backed indexed list with a fail-fast cursor
//!
//! # Overview
//!
//! [`ArrayList`] keeps its elements packed at the front of a growable buffer
//! and supports editing at any position:
//!
//! - At either end (`add_to_front`, `add_to_rear`, `remove_first`, `remove_last`)
//! - By index (`add_at`, `remove_at`, `get`, `set`)
//! - Relative to an existing element (`add_after`, `remove_by_value`)
//!
//! # Quick Start
//!
//! ```
//! use iulist::ArrayList;
//!
//! let mut list = ArrayList::new();
//! list.add_to_rear(1);
//! list.add_to_rear(2);
//! list.add_to_front(0);
//! assert_eq!(list.to_string(), "[0,1,2]");
//!
//! list.add_after(5, &1).unwrap();
//! assert_eq!(list.to_string(), "[0,1,5,2]");
//! assert_eq!(list.get(2), Ok(&5));
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] walks the list front to back without holding a borrow, so the
//! list can still be edited between steps. Edits made through the cursor
//! keep it valid; any other edit makes it fail with
//! [`ListError::ConcurrentModification`] on its next step:
//!
//! ```
//! use iulist::{ArrayList, ListError};
//!
//! let mut list: ArrayList<u32> = (1..=5).collect();
//! let mut cursor = list.cursor();
//! while cursor.has_next(&list) {
//!     if cursor.advance(&list)? % 2 == 0 {
//!         cursor.remove_current(&mut list)?;
//!     }
//! }
//! assert_eq!(list.to_string(), "[1,3,5]");
//!
//! let mut stale = list.cursor();
//! list.add_to_front(0);
//! assert!(matches!(stale.advance(&list), Err(ListError::ConcurrentModification { .. })));
//! # Ok::<(), ListError>(())
//! ```
//!
//! # Capacity
//!
//! The buffer starts with [`ListOptions::DEFAULT_CAPACITY`] slots and is
//! multiplied by the growth factor whenever it fills up. Both are tunable:
//!
//! ```
//! use iulist::{ArrayList, ListOptionsOverride};
//!
//! let mut list = ArrayList::with_options(ListOptionsOverride {
//!     initial_capacity: Some(2),
//!     growth_factor: Some(3),
//! })
//! .unwrap();
//! list.extend([1, 2, 3]);
//! assert_eq!(list.capacity(), 6);
//! ```

pub use iulist_core::{
    ArrayList, Cursor, IndexedList, IntoIter, Iter, ListError, ListOptions, ListOptionsOverride,
    Result, array_list, error, list, options,
};
