//! High-level API for Ulam spiral sampling.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the three standalone
//! operations (`generate_spiral`, `generate_prime_mask`, `extract_windows`)
//! and a fluent builder that chains them into one pipeline.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Sizes are validated when `.build()` is called, and on every
//!   standalone call that takes a size.
//! * **Generic**: Window extraction accepts any 2-D `ndarray` of `Copy` values.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`UlamBuilder`] via `Ulam::new()`.
//! 2. Chain configuration methods (`.size()`, `.window_size()`, `.parallel()`).
//! 3. Call `.build()` to get a validated [`UlamPipeline`], then `.run()`.

// External dependencies
use ndarray::{ArrayBase, Data, Ix2};
use num_traits::Zero;

// Internal dependencies
use crate::algorithms::mask::prime_mask;
use crate::algorithms::spiral::ulam_spiral;
use crate::algorithms::windows::sliding_windows;
use crate::engine::executor::{UlamConfig, UlamExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::windows::WindowSamples;
pub use crate::engine::output::UlamResult;
pub use crate::math::primality::is_prime;
pub use crate::primitives::errors::UlamError;
pub use crate::primitives::grid::{render, Grid, GridDisplay, Mask};

/// Default spiral side length.
pub const DEFAULT_SIZE: usize = 7;

/// Default window side length.
pub const DEFAULT_WINDOW_SIZE: usize = 7;

// ============================================================================
// Standalone Operations
// ============================================================================

/// Generate a `size × size` Ulam spiral numbered `1..=size²` from the center.
///
/// # Errors
///
/// Returns [`UlamError::InvalidSize`] if `size` is even (including zero) or
/// if a `size × size` grid of `i64` cells would exceed `isize::MAX` bytes.
///
/// # Examples
///
/// ```
/// use ulam::generate_spiral;
/// use ndarray::array;
///
/// let spiral = generate_spiral(3)?;
/// assert_eq!(spiral, array![[7, 8, 9], [6, 1, 2], [5, 4, 3]]);
/// # Ok::<(), ulam::UlamError>(())
/// ```
pub fn generate_spiral(size: usize) -> Result<Grid, UlamError> {
    Validator::validate_size(size)?;
    Ok(ulam_spiral(size))
}

/// Label every cell of `grid` with 1 if it is prime and 0 otherwise.
///
/// Any integer grid is accepted; zero and negative values map to 0.
pub fn generate_prime_mask<S>(grid: &ArrayBase<S, Ix2>) -> Mask
where
    S: Data<Elem = i64>,
{
    prime_mask(grid)
}

/// Extract every `window_size × window_size` neighborhood that fits inside
/// `grid`, paired with its center value, in row-major center order.
///
/// A grid too small for a single window yields an empty collection.
///
/// # Errors
///
/// Returns [`UlamError::InvalidWindowSize`] if `window_size` is even
/// (including zero).
///
/// # Examples
///
/// ```
/// use ulam::{extract_windows, generate_prime_mask, generate_spiral};
///
/// let mask = generate_prime_mask(&generate_spiral(7)?);
/// let samples = extract_windows(&mask, 3)?;
///
/// assert_eq!(samples.len(), 25);
/// assert_eq!(samples.center(0), Some((1, 1)));
/// # Ok::<(), ulam::UlamError>(())
/// ```
pub fn extract_windows<S, T>(
    grid: &ArrayBase<S, Ix2>,
    window_size: usize,
) -> Result<WindowSamples<T>, UlamError>
where
    S: Data<Elem = T>,
    T: Copy + Zero,
{
    Validator::validate_window_size(window_size)?;
    Ok(sliding_windows(grid, window_size))
}

// ============================================================================
// Pipeline Builder
// ============================================================================

/// Fluent builder for the spiral → mask → windows pipeline.
#[derive(Debug, Clone, Default)]
pub struct UlamBuilder {
    /// Spiral side length (default: 7).
    pub size: Option<usize>,

    /// Window side length (default: 7).
    pub window_size: Option<usize>,

    /// Parallel masking and extraction (default: false).
    pub parallel: Option<bool>,
}

impl UlamBuilder {
    /// Create a new builder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spiral side length.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the window side length.
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = Some(window_size);
        self
    }

    /// Enable or disable parallel execution.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build a runnable pipeline.
    pub fn build(self) -> Result<UlamPipeline, UlamError> {
        let config = UlamConfig {
            size: self.size.unwrap_or(DEFAULT_SIZE),
            window_size: self.window_size.unwrap_or(DEFAULT_WINDOW_SIZE),
            parallel: self.parallel.unwrap_or(false),
        };

        Validator::validate_size(config.size)?;
        Validator::validate_window_size(config.window_size)?;

        Ok(UlamPipeline { config })
    }
}

/// Validated, reusable pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UlamPipeline {
    config: UlamConfig,
}

impl UlamPipeline {
    /// Spiral side length.
    pub fn size(&self) -> usize {
        self.config.size
    }

    /// Window side length.
    pub fn window_size(&self) -> usize {
        self.config.window_size
    }

    /// Whether parallel execution was requested.
    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    /// Run the pipeline, producing fresh grids and samples.
    pub fn run(&self) -> UlamResult {
        UlamExecutor::run(&self.config)
    }
}
