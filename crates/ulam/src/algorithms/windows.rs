//! Sliding-window sample extraction.
//!
//! ## Purpose
//!
//! This module turns a labelled 2-D grid into a flat collection of
//! `(neighborhood, label)` samples: one square window per interior cell,
//! labelled with the value at its center.
//!
//! ## Design notes
//!
//! * **No padding**: Cells closer than `window_size / 2` to any edge produce
//!   no sample; there is no wraparound.
//! * **Owned output**: Neighborhoods are copied into one `(n, W, W)` array.
//! * **Parallelism**: With the `parallel` feature, sample slots are filled in
//!   parallel over the sample axis.
//!
//! ## Key concepts
//!
//! * **Valid centers**: Rows `w..rows - w` and columns `w..cols - w`, where
//!   `w = window_size / 2`.
//! * **Ordering**: Samples are emitted in row-major center order; sample `k`
//!   always refers to the same center for a given grid shape.
//!
//! ## Invariants
//!
//! * `len == max(0, rows - 2w) * max(0, cols - 2w)`.
//! * `windows[[k, w, w]] == labels[k]` for every sample.
//!
//! ## Non-goals
//!
//! * This module does not validate `window_size` (see the engine validator).
//! * This module does not shuffle, balance, or split samples.

// External dependencies
use ndarray::{s, Array1, Array3, ArrayBase, ArrayView2, Axis, Data, Ix2};
use num_traits::Zero;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::primitives::window::Window;

// ============================================================================
// Sample Collection
// ============================================================================

/// Window samples extracted from a grid, in row-major center order.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSamples<T> {
    /// Neighborhoods, shape `(n, window_size, window_size)`.
    pub windows: Array3<T>,

    /// Center labels, shape `(n,)`.
    pub labels: Array1<T>,

    window: Window,
}

impl<T: Copy> WindowSamples<T> {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if no window fit inside the grid.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Side length of every neighborhood.
    pub fn window_size(&self) -> usize {
        self.window.size
    }

    /// Neighborhood and label of sample `k`.
    pub fn get(&self, k: usize) -> Option<(ArrayView2<'_, T>, T)> {
        (k < self.len()).then(|| (self.windows.index_axis(Axis(0), k), self.labels[k]))
    }

    /// Source-grid `(row, col)` of the center of sample `k`.
    pub fn center(&self, k: usize) -> Option<(usize, usize)> {
        (k < self.len()).then(|| self.window.center(k))
    }

    /// Iterate over `(neighborhood, label)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (ArrayView2<'_, T>, T)> + '_ {
        self.windows
            .outer_iter()
            .zip(self.labels.iter().copied())
    }

    /// Split into the neighborhood array and the label array.
    pub fn into_parts(self) -> (Array3<T>, Array1<T>) {
        (self.windows, self.labels)
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract every `window_size × window_size` neighborhood that fits in `grid`.
///
/// `window_size` must be odd.
pub fn sliding_windows<S, T>(grid: &ArrayBase<S, Ix2>, window_size: usize) -> WindowSamples<T>
where
    S: Data<Elem = T>,
    T: Copy + Zero,
{
    let (rows, cols) = grid.dim();
    let window = Window::initialize(window_size, rows, cols);

    let mut windows = Array3::zeros((window.len(), window.size, window.size));
    for (k, mut slot) in windows.axis_iter_mut(Axis(0)).enumerate() {
        slot.assign(&neighborhood(grid, &window, k));
    }

    let labels = Array1::from_shape_fn(window.len(), |k| grid[window.center(k)]);

    WindowSamples {
        windows,
        labels,
        window,
    }
}

/// Parallel variant of [`sliding_windows`].
#[cfg(feature = "parallel")]
pub fn sliding_windows_parallel<S, T>(
    grid: &ArrayBase<S, Ix2>,
    window_size: usize,
) -> WindowSamples<T>
where
    S: Data<Elem = T> + Sync,
    T: Copy + Zero + Send + Sync,
{
    let (rows, cols) = grid.dim();
    let window = Window::initialize(window_size, rows, cols);

    let mut windows = Array3::zeros((window.len(), window.size, window.size));
    windows
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(k, mut slot)| slot.assign(&neighborhood(grid, &window, k)));

    let labels = Array1::from_shape_fn(window.len(), |k| grid[window.center(k)]);

    WindowSamples {
        windows,
        labels,
        window,
    }
}

// View of the `k`-th neighborhood inside `grid`.
#[inline]
fn neighborhood<'a, S, T>(
    grid: &'a ArrayBase<S, Ix2>,
    window: &Window,
    k: usize,
) -> ArrayView2<'a, T>
where
    S: Data<Elem = T>,
{
    let (r0, c0) = window.origin(k);
    grid.slice(s![r0..r0 + window.size, c0..c0 + window.size])
}
