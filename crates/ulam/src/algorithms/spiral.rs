//! Center-out spiral numbering.
//!
//! ## Purpose
//!
//! This module lays the integers `1..=size²` out on a `size × size` grid,
//! starting at the center cell and winding outward ring by ring.
//!
//! ## Design notes
//!
//! * **Turtle walk**: A turtle starts at the center heading `(0, -1)` and turns
//!   left whenever it stands on a ring corner.
//! * **Coordinates**: `x` is the column offset and `y` the row offset from the
//!   center, so cell `(x, y)` lives at `[[y + size/2, x + size/2]]`.
//! * **Bounds**: Positions outside the grid are skipped without consuming a
//!   sequence number.
//!
//! ## Key concepts
//!
//! A position is a corner when `x == y`, `x < 0 && x == -y`, or
//! `x > 0 && x == 1 - y`. Turning rotates the heading `(dx, dy) → (-dy, dx)`.
//! For `size = 3` the walk yields:
//!
//! ```text
//! 7 8 9
//! 6 1 2
//! 5 4 3
//! ```
//!
//! ## Invariants
//!
//! * The center cell always holds 1.
//! * Every value in `1..=size²` appears exactly once.
//! * Consecutive values occupy edge-adjacent cells.
//!
//! ## Non-goals
//!
//! * This module does not validate `size` (see the engine validator).
//! * This module does not support even or rectangular spirals.

// Internal dependencies
use crate::primitives::grid::Grid;

// ============================================================================
// Turtle Walk
// ============================================================================

/// Infinite center-out spiral walk over the integer lattice.
///
/// Yields `(x, y)` positions relative to the origin, starting with `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turtle {
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle {
    /// Start at the origin heading `(0, -1)`.
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            dx: 0,
            dy: -1,
        }
    }

    /// Check whether the current position is a ring corner.
    #[inline]
    pub fn at_corner(&self) -> bool {
        let (x, y) = (self.x, self.y);
        x == y || (x < 0 && x == -y) || (x > 0 && x == 1 - y)
    }

    /// Turn on corners, then move one cell.
    #[inline]
    pub fn step(&mut self) {
        if self.at_corner() {
            (self.dx, self.dy) = (-self.dy, self.dx);
        }
        self.x += self.dx;
        self.y += self.dy;
    }
}

impl Iterator for Turtle {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let position = (self.x, self.y);
        self.step();
        Some(position)
    }
}

// ============================================================================
// Spiral Grid
// ============================================================================

/// Number the cells of a `size × size` grid along the turtle walk.
///
/// `size` must be odd and `size²` must fit in an `i64`.
pub fn ulam_spiral(size: usize) -> Grid {
    debug_assert!(size % 2 == 1, "ulam_spiral: size must be odd");

    let half = (size / 2) as i64;
    let mut grid = Grid::zeros((size, size));

    let cells = Turtle::new()
        .filter(|&(x, y)| x.abs() <= half && y.abs() <= half)
        .take(size * size);

    for (seq, (x, y)) in (1_i64..).zip(cells) {
        grid[[(y + half) as usize, (x + half) as usize]] = seq;
    }

    grid
}
