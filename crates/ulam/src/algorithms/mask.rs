//! Element-wise primality masks.
//!
//! ## Purpose
//!
//! This module classifies every cell of an integer grid with the primality
//! oracle, producing a same-shaped grid of 0/1 labels.
//!
//! ## Design notes
//!
//! * **Shape-preserving**: The mask always has the shape of its source.
//! * **Parallelism**: With the `parallel` feature, cells are classified
//!   through a parallel `ndarray::Zip`.
//!
//! ## Invariants
//!
//! * `mask[[r, c]] == 1` iff `is_prime(grid[[r, c]])`, otherwise 0.
//! * Sequential and parallel variants return identical masks.
//!
//! ## Non-goals
//!
//! * This module does not retain a reference to the source grid.

// External dependencies
use ndarray::{ArrayBase, Data, Ix2};
#[cfg(feature = "parallel")]
use ndarray::Zip;

// Internal dependencies
use crate::math::primality::is_prime;
use crate::primitives::grid::Mask;

/// Label each cell 1 if it holds a prime, 0 otherwise.
pub fn prime_mask<S>(grid: &ArrayBase<S, Ix2>) -> Mask
where
    S: Data<Elem = i64>,
{
    grid.mapv(|v| i64::from(is_prime(v)))
}

/// Parallel variant of [`prime_mask`].
#[cfg(feature = "parallel")]
pub fn prime_mask_parallel<S>(grid: &ArrayBase<S, Ix2>) -> Mask
where
    S: Data<Elem = i64> + Sync,
{
    Zip::from(grid).par_map_collect(|&v| i64::from(is_prime(v)))
}

/// Number of cells labelled prime.
pub fn count_primes<S>(mask: &ArrayBase<S, Ix2>) -> usize
where
    S: Data<Elem = i64>,
{
    mask.iter().filter(|&&v| v == 1).count()
}
