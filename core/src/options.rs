//! Construction options for [`ArrayList`](crate::ArrayList).
//!
//! Options come in two flavours: [`ListOptions`] holds fully resolved values,
//! while [`ListOptionsOverride`] only names the fields a caller wants to
//! change. Overrides are layered on top of the defaults:
//!
//! ```
//! use iulist_core::{ArrayList, ListOptionsOverride};
//!
//! let opts = ListOptionsOverride { growth_factor: Some(3), ..Default::default() };
//! let list: ArrayList<u8> = ArrayList::with_options(opts).unwrap();
//! assert_eq!(list.capacity(), 10);
//! ```

use crate::error::{ListError, Result};
use crate::format;

/// Resolved options for a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Number of slots allocated up front. Must be positive.
    pub initial_capacity: usize,
    /// Multiplier applied to the capacity when the buffer is full. Must be at
    /// least 2.
    pub growth_factor: usize,
}

impl ListOptions {
    pub const DEFAULT_CAPACITY: usize = 10;
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Return a copy of these options with every field set in `over` replaced.
    pub fn override_with(&self, over: &ListOptionsOverride) -> Self {
        Self {
            initial_capacity: over.initial_capacity.unwrap_or(self.initial_capacity),
            growth_factor: over.growth_factor.unwrap_or(self.growth_factor),
        }
    }

    /// Check that these options describe a usable buffer.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(ListError::InvalidOptions(format!(
                "initial capacity must be positive, got {}",
                self.initial_capacity
            )));
        }
        if self.growth_factor < 2 {
            return Err(ListError::InvalidOptions(format!(
                "growth factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}

/// Partial options; `None` fields keep their default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptionsOverride {
    pub initial_capacity: Option<usize>,
    pub growth_factor: Option<usize>,
}
