//! Pipeline execution engine.
//!
//! ## Purpose
//!
//! This module runs the full pipeline for a validated configuration:
//! generate the spiral, classify it into a prime mask, and extract window
//! samples from the mask.
//!
//! ## Design notes
//!
//! * **Stateless**: Each run allocates fresh grids; nothing is cached between runs.
//! * **Dispatch**: The `parallel` flag selects the rayon-backed algorithms when the
//!   `parallel` feature is compiled in, and the sequential ones otherwise.
//! * **Logging**: Stage boundaries are reported through `tracing`.
//!
//! ## Invariants
//!
//! * The configuration has already passed [`Validator`](crate::engine::validator::Validator).
//! * Sequential and parallel runs produce identical results.
//!
//! ## Non-goals
//!
//! * This module does not validate its configuration.
//! * This module does not persist or print results.

// External dependencies
use ndarray::{ArrayBase, Data, Ix2};
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::mask::{count_primes, prime_mask};
use crate::algorithms::spiral::ulam_spiral;
use crate::algorithms::windows::{sliding_windows, WindowSamples};
use crate::engine::output::UlamResult;
use crate::primitives::grid::{Grid, Mask};

#[cfg(feature = "parallel")]
use crate::algorithms::mask::prime_mask_parallel;
#[cfg(feature = "parallel")]
use crate::algorithms::windows::sliding_windows_parallel;

// ============================================================================
// Configuration
// ============================================================================

/// Validated pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UlamConfig {
    /// Side length of the spiral (odd).
    pub size: usize,

    /// Side length of each extracted window (odd).
    pub window_size: usize,

    /// Use parallel masking and extraction when available.
    pub parallel: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the spiral → mask → windows pipeline.
pub struct UlamExecutor;

impl UlamExecutor {
    /// Run every stage for `config`.
    pub fn run(config: &UlamConfig) -> UlamResult {
        debug!(
            size = config.size,
            window_size = config.window_size,
            parallel = config.parallel,
            "running ulam pipeline"
        );

        let spiral = Self::spiral(config.size);
        let mask = Self::mask(&spiral, config.parallel);
        let primes = count_primes(&mask);
        debug!(size = config.size, primes, "classified spiral");

        let samples = Self::windows(&mask, config.window_size, config.parallel);
        debug!(
            window_size = config.window_size,
            samples = samples.len(),
            "extracted windows"
        );

        UlamResult {
            size: config.size,
            window_size: config.window_size,
            primes,
            spiral,
            mask,
            samples,
        }
    }

    /// Generate the spiral grid.
    pub fn spiral(size: usize) -> Grid {
        let grid = ulam_spiral(size);
        trace!(size, "spiral generated");
        grid
    }

    /// Build the prime mask of `grid`.
    pub fn mask<S>(grid: &ArrayBase<S, Ix2>, parallel: bool) -> Mask
    where
        S: Data<Elem = i64> + Sync,
    {
        #[cfg(feature = "parallel")]
        let mask = if parallel {
            prime_mask_parallel(grid)
        } else {
            prime_mask(grid)
        };

        #[cfg(not(feature = "parallel"))]
        let mask = {
            if parallel {
                debug!("parallel feature disabled; masking sequentially");
            }
            prime_mask(grid)
        };

        trace!(parallel, "mask built");
        mask
    }

    /// Extract window samples from `grid`.
    pub fn windows<S>(
        grid: &ArrayBase<S, Ix2>,
        window_size: usize,
        parallel: bool,
    ) -> WindowSamples<i64>
    where
        S: Data<Elem = i64> + Sync,
    {
        #[cfg(feature = "parallel")]
        let samples = if parallel {
            sliding_windows_parallel(grid, window_size)
        } else {
            sliding_windows(grid, window_size)
        };

        #[cfg(not(feature = "parallel"))]
        let samples = {
            if parallel {
                debug!("parallel feature disabled; extracting sequentially");
            }
            sliding_windows(grid, window_size)
        };

        trace!(parallel, "windows extracted");
        samples
    }
}
