//! Square window geometry.
//!
//! This module maps sample indices to the centers of square windows that fit
//! entirely inside a `rows × cols` grid, scanning centers in row-major order.

// Placement of an odd `size × size` window over a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Side length of the window (odd).
    pub size: usize,

    // Distance from the center to each edge, `size / 2`.
    pub half: usize,

    // Number of valid center rows.
    pub center_rows: usize,

    // Number of valid center columns.
    pub center_cols: usize,
}

impl Window {
    // Place a window of side `size` over a `rows × cols` grid.
    #[inline]
    pub fn initialize(size: usize, rows: usize, cols: usize) -> Self {
        debug_assert!(size % 2 == 1, "initialize: window size must be odd");

        let half = size / 2;
        Self {
            size,
            half,
            center_rows: rows.saturating_sub(2 * half),
            center_cols: cols.saturating_sub(2 * half),
        }
    }

    // Source coordinates of the `k`-th center in row-major order.
    #[inline]
    pub fn center(&self, k: usize) -> (usize, usize) {
        debug_assert!(k < self.len(), "center: sample index out of bounds");

        (
            self.half + k / self.center_cols,
            self.half + k % self.center_cols,
        )
    }

    // Top-left corner of the `k`-th window.
    #[inline]
    pub fn origin(&self, k: usize) -> (usize, usize) {
        let (r, c) = self.center(k);
        (r - self.half, c - self.half)
    }

    // Check if no window fits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Number of windows that fit.
    #[inline]
    pub fn len(&self) -> usize {
        self.center_rows * self.center_cols
    }
}
