//! Output types for pipeline runs.
//!
//! ## Purpose
//!
//! This module defines `UlamResult`, which bundles every artifact of one
//! pipeline run: the spiral, its prime mask and the window samples drawn
//! from the mask.
//!
//! ## Design notes
//!
//! * **Ownership**: All grids are owned; the result has no borrowed state.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `spiral` and `mask` have shape `(size, size)`.
//! * `primes` equals the number of ones in `mask`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::windows::WindowSamples;
use crate::primitives::grid::{write_grid, Grid, Mask};

// ============================================================================
// Result Structure
// ============================================================================

/// Artifacts of one spiral → mask → windows run.
#[derive(Debug, Clone, PartialEq)]
pub struct UlamResult {
    /// Side length of the spiral.
    pub size: usize,

    /// Side length of each window.
    pub window_size: usize,

    /// Number of prime cells in the spiral.
    pub primes: usize,

    /// Spiral numbering, values `1..=size²`.
    pub spiral: Grid,

    /// Prime mask of the spiral.
    pub mask: Mask,

    /// Windows extracted from the mask with their center labels.
    pub samples: WindowSamples<i64>,
}

impl UlamResult {
    /// Fraction of spiral cells that are prime.
    pub fn prime_density(&self) -> f64 {
        self.primes as f64 / (self.size * self.size) as f64
    }

    /// Fraction of samples whose center label is prime.
    pub fn positive_rate(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let positives = self.samples.labels.iter().filter(|&&v| v == 1).count();
        positives as f64 / self.samples.len() as f64
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for UlamResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Size:        {}", self.size)?;
        writeln!(f, "  Window size: {}", self.window_size)?;
        writeln!(f, "  Primes:      {}", self.primes)?;
        writeln!(f, "  Samples:     {}", self.samples.len())?;
        writeln!(f)?;

        writeln!(f, "Ulam Spiral:")?;
        write_grid(f, &self.spiral)?;
        writeln!(f)?;

        writeln!(f, "Prime Mask:")?;
        write_grid(f, &self.mask)?;

        Ok(())
    }
}
