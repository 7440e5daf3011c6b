//! Error types for Ulam spiral operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when generating a
//! spiral or extracting windows. Both are raised on invalid static arguments,
//! never on grid contents.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the rejected value.
//! * **Fail-fast**: Errors abort the call before any output is allocated.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Ulam spiral operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UlamError {
    /// Spiral side length must be odd and at least 1, and its grid must fit in memory limits.
    InvalidSize(usize),

    /// Window side length must be odd and at least 1.
    InvalidWindowSize(usize),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for UlamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidSize(size) => {
                write!(f, "Invalid size: {size} (must be an odd number >= 1)")
            }
            Self::InvalidWindowSize(size) => {
                write!(f, "Invalid window_size: {size} (must be an odd number >= 1)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for UlamError {}
