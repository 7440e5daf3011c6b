//! Argument validation for spiral and window sizes.
//!
//! ## Purpose
//!
//! This module checks the static size arguments of the pipeline before any
//! grid is allocated.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Validation only inspects its arguments.
//!
//! ## Invariants
//!
//! * A validated spiral size is odd, at least 1, and a `size × size` grid of
//!   `i64` cells stays within `isize::MAX` bytes.
//! * A validated window size is odd and at least 1.
//!
//! ## Non-goals
//!
//! * This module does not inspect grid contents; any integer grid is valid.
//! * This module does not correct invalid arguments.

// External dependencies
use core::mem::size_of;

// Internal dependencies
use crate::primitives::errors::UlamError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for pipeline arguments.
pub struct Validator;

impl Validator {
    /// Validate the side length of a spiral.
    ///
    /// # Notes
    ///
    /// * Zero is even and therefore rejected.
    /// * Sizes whose `size² × 8`-byte grid exceeds `isize::MAX` bytes are rejected.
    pub fn validate_size(size: usize) -> Result<(), UlamError> {
        if size % 2 == 0 {
            return Err(UlamError::InvalidSize(size));
        }

        let fits = size
            .checked_mul(size)
            .and_then(|cells| cells.checked_mul(size_of::<i64>()))
            .is_some_and(|bytes| isize::try_from(bytes).is_ok());
        if !fits {
            return Err(UlamError::InvalidSize(size));
        }

        Ok(())
    }

    /// Validate the side length of an extraction window.
    pub fn validate_window_size(window_size: usize) -> Result<(), UlamError> {
        if window_size % 2 == 0 {
            return Err(UlamError::InvalidWindowSize(window_size));
        }
        Ok(())
    }
}
