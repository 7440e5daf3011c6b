//! # Ulam — Spiral Primes as Labelled Grid Samples
//!
//! Generate Ulam spirals, mark their primes, and cut the resulting mask into
//! fixed-size neighborhoods paired with their center labels.
//!
//! ## What is an Ulam spiral?
//!
//! The integers `1, 2, 3, ...` are written on a square grid starting at the
//! center and winding outward ring by ring. Marking the primes reveals the
//! diagonal streaks first noticed by Stanisław Ulam in 1963.
//!
//! ## Quick Start
//!
//! ### Standalone operations
//!
//! ```rust
//! use ulam::{extract_windows, generate_prime_mask, generate_spiral};
//!
//! let spiral = generate_spiral(7)?;        // 7×7, values 1..=49
//! let mask = generate_prime_mask(&spiral); // 1 where prime, 0 elsewhere
//! let samples = extract_windows(&mask, 3)?; // 3×3 neighborhoods
//!
//! for (window, label) in samples.iter() {
//!     assert_eq!(window[[1, 1]], label);
//! }
//! # Ok::<(), ulam::UlamError>(())
//! ```
//!
//! ### Pipeline builder
//!
//! ```rust
//! use ulam::prelude::*;
//!
//! let result = Ulam::new()
//!     .size(7)          // Spiral side length (odd)
//!     .window_size(3)   // Window side length (odd)
//!     .parallel(true)   // Use rayon when the `parallel` feature is on
//!     .build()?
//!     .run();
//!
//! println!("{}", result);
//! # Result::<(), UlamError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Size:        7
//!   Window size: 3
//!   Primes:      15
//!   Samples:     25
//!
//! Ulam Spiral:
//! 43 44 45 46 47 48 49
//! 42 21 22 23 24 25 26
//! 41 20  7  8  9 10 27
//! 40 19  6  1  2 11 28
//! 39 18  5  4  3 12 29
//! 38 17 16 15 14 13 30
//! 37 36 35 34 33 32 31
//!
//! Prime Mask:
//! 1 0 0 0 1 0 0
//! 0 0 0 1 0 0 0
//! 1 0 1 0 0 0 0
//! 0 1 0 0 1 1 0
//! 0 0 1 0 1 0 1
//! 0 1 0 0 0 1 0
//! 1 0 0 0 0 0 1
//! ```
//!
//! ### Result and Error Handling
//!
//! Only two arguments can be wrong, and both are checked before any grid is
//! allocated:
//!
//! - **`UlamError::InvalidSize`**: the spiral size is even (or zero).
//! - **`UlamError::InvalidWindowSize`**: the window size is even (or zero).
//!
//! ```rust
//! use ulam::prelude::*;
//!
//! match Ulam::new().size(8).build() {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e, UlamError::InvalidSize(8)),
//! }
//! ```
//!
//! ## Logging
//!
//! Pipeline runs emit `tracing` events at `debug` and `trace` level. The
//! crate never installs a subscriber.

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure number-theoretic functions.
mod math;

// Layer 3: Algorithms - spiral, mask and window algorithms.
mod algorithms;

// Layer 4: Engine - validation and orchestration.
mod engine;

// High-level API.
mod api;

pub use crate::api::{
    extract_windows, generate_prime_mask, generate_spiral, is_prime, render, Grid, GridDisplay,
    Mask, UlamBuilder, UlamError, UlamPipeline, UlamResult, WindowSamples, DEFAULT_SIZE,
    DEFAULT_WINDOW_SIZE,
};

// Standard Ulam prelude.
pub mod prelude {
    pub use crate::api::{
        extract_windows, generate_prime_mask, generate_spiral, is_prime, Grid, Mask,
        UlamBuilder as Ulam, UlamError, UlamPipeline, UlamResult, WindowSamples,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
