//! Grid and mask types.
//!
//! ## Purpose
//!
//! This module names the 2-D containers passed between the spiral generator,
//! the mask builder and the window extractor, and renders them as text.
//!
//! ## Key concepts
//!
//! * **Grid**: Row-major `rows × cols` array of signed integers.
//! * **Mask**: A grid of the same shape as its source holding only 0 and 1.
//!
//! ## Invariants
//!
//! * Every grid produced by this crate is freshly allocated and owned.
//! * Rendering never changes the grid.

// External dependencies
use core::fmt::{Display, Formatter, Result, Write};
use ndarray::{Array2, ArrayBase, Data, Ix2, RawData};

/// Square or rectangular integer grid, indexed `[[row, col]]`.
pub type Grid = Array2<i64>;

/// Binary grid: `1` where the source cell is prime, `0` elsewhere.
pub type Mask = Array2<i64>;

/// Write `grid` as right-aligned columns, one row per line.
pub fn write_grid<W, S, T>(out: &mut W, grid: &ArrayBase<S, Ix2>) -> Result
where
    W: Write,
    S: Data<Elem = T>,
    T: Display,
{
    let width = grid.iter().map(|v| v.to_string().len()).max().unwrap_or(0);

    for row in grid.outer_iter() {
        let mut first = true;
        for v in row.iter() {
            if !first {
                out.write_char(' ')?;
            }
            first = false;
            write!(out, "{v:>width$}")?;
        }
        out.write_char('\n')?;
    }

    Ok(())
}

/// `Display` adapter for a 2-D grid, formatted with [`write_grid`].
pub struct GridDisplay<'a, S: RawData>(pub &'a ArrayBase<S, Ix2>);

impl<S, T> Display for GridDisplay<'_, S>
where
    S: Data<Elem = T>,
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_grid(f, self.0)
    }
}

/// Render `grid` to a `String`.
pub fn render<S, T>(grid: &ArrayBase<S, Ix2>) -> String
where
    S: Data<Elem = T>,
    T: Display,
{
    GridDisplay(grid).to_string()
}
