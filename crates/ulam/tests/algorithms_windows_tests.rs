//! Tests for window extraction.
//!
//! These tests verify `extract_windows` for:
//! - Sample counts and row-major ordering
//! - Neighborhood contents and center labels
//! - Grids too small for the window
//! - Rejection of even window sizes
//!
//! ## Test Organization
//!
//! 1. **Counts and Ordering** - Formula, center order, non-square grids
//! 2. **Contents** - Exact neighborhoods, labels, accessors
//! 3. **Edge Cases** - Empty results, window size 1, full-grid windows
//! 4. **Error Handling** - Even and zero window sizes

use ndarray::{array, s, Array2, Axis};
use ulam::{extract_windows, generate_prime_mask, generate_spiral, UlamError};

// ============================================================================
// Helper Functions
// ============================================================================

/// Grid whose cell `(r, c)` holds `r * cols + c`.
fn arange(rows: usize, cols: usize) -> Array2<i64> {
    Array2::from_shape_fn((rows, cols), |(r, c)| (r * cols + c) as i64)
}

// ============================================================================
// Counts and Ordering Tests
// ============================================================================

/// Test the sample count formula on square grids.
#[test]
fn test_count_square() {
    let grid = arange(9, 9);
    for (window_size, expected) in [(1, 81), (3, 49), (5, 25), (7, 9), (9, 1), (11, 0)] {
        let samples = extract_windows(&grid, window_size).unwrap();
        assert_eq!(samples.len(), expected, "window_size = {window_size}");
    }
}

/// Test the sample count formula on a non-square grid.
#[test]
fn test_count_non_square() {
    let grid = arange(4, 5);
    let samples = extract_windows(&grid, 3).unwrap();
    assert_eq!(samples.len(), 2 * 3);
}

/// Test that samples follow row-major center order.
#[test]
fn test_row_major_order() {
    let grid = arange(4, 5);
    let samples = extract_windows(&grid, 3).unwrap();

    let centers: Vec<(usize, usize)> = (0..samples.len())
        .map(|k| samples.center(k).unwrap())
        .collect();
    assert_eq!(
        centers,
        vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]
    );

    let labels: Vec<i64> = samples.labels.to_vec();
    assert_eq!(labels, vec![6, 7, 8, 11, 12, 13]);
}

// ============================================================================
// Content Tests
// ============================================================================

/// Test exact neighborhood contents.
#[test]
fn test_neighborhood_contents() {
    let grid = arange(4, 5);
    let samples = extract_windows(&grid, 3).unwrap();

    let (first, label) = samples.get(0).unwrap();
    assert_eq!(first, array![[0, 1, 2], [5, 6, 7], [10, 11, 12]]);
    assert_eq!(label, 6);

    let (last, label) = samples.get(5).unwrap();
    assert_eq!(last, array![[7, 8, 9], [12, 13, 14], [17, 18, 19]]);
    assert_eq!(label, 13);
}

/// Test that every neighborhood equals the source slice around its center.
#[test]
fn test_neighborhoods_match_source() {
    let mask = generate_prime_mask(&generate_spiral(11).unwrap());
    let samples = extract_windows(&mask, 5).unwrap();

    for k in 0..samples.len() {
        let (r, c) = samples.center(k).unwrap();
        let (window, label) = samples.get(k).unwrap();
        assert_eq!(window, mask.slice(s![r - 2..=r + 2, c - 2..=c + 2]));
        assert_eq!(label, mask[[r, c]]);
    }
}

/// Test that each window's center equals its label.
#[test]
fn test_center_equals_label() {
    let spiral = generate_spiral(13).unwrap();
    let samples = extract_windows(&spiral, 7).unwrap();

    for (window, label) in samples.iter() {
        assert_eq!(window[[3, 3]], label);
    }
}

/// Test the spiral mask with the default window size.
#[test]
fn test_spiral_mask_default_window() {
    let mask = generate_prime_mask(&generate_spiral(7).unwrap());
    let samples = extract_windows(&mask, ulam::DEFAULT_WINDOW_SIZE).unwrap();

    assert_eq!(samples.len(), 1);
    assert_eq!(samples.windows.index_axis(Axis(0), 0), mask);
    assert_eq!(samples.labels[0], 0, "Center 1 is not prime");
}

/// Test the parallel-array form.
#[test]
fn test_into_parts_shapes() {
    let grid = arange(6, 8);
    let samples = extract_windows(&grid, 3).unwrap();
    assert_eq!(samples.window_size(), 3);

    let (windows, labels) = samples.into_parts();
    assert_eq!(windows.dim(), (4 * 6, 3, 3));
    assert_eq!(labels.len(), 4 * 6);
}

/// Test that samples are owned copies of the source.
#[test]
fn test_samples_are_independent() {
    let mut grid = arange(5, 5);
    let samples = extract_windows(&grid, 3).unwrap();
    grid.fill(-1);

    assert_eq!(samples.labels[0], 6);
    assert_eq!(samples.get(0).unwrap().0[[0, 0]], 0);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that a window larger than the grid yields no samples.
#[test]
fn test_grid_too_small() {
    let grid = arange(3, 10);
    let samples = extract_windows(&grid, 5).unwrap();

    assert!(samples.is_empty());
    assert_eq!(samples.windows.dim(), (0, 5, 5));
    assert!(samples.get(0).is_none());
    assert!(samples.center(0).is_none());
    assert_eq!(samples.iter().count(), 0);
}

/// Test that an empty grid yields no samples.
#[test]
fn test_empty_grid() {
    let grid = Array2::<i64>::zeros((0, 0));
    assert!(extract_windows(&grid, 1).unwrap().is_empty());
}

/// Test that window size 1 yields every cell in order.
#[test]
fn test_window_size_one() {
    let grid = arange(3, 4);
    let samples = extract_windows(&grid, 1).unwrap();

    assert_eq!(samples.labels.to_vec(), (0..12).collect::<Vec<i64>>());
    for (window, label) in samples.iter() {
        assert_eq!(window, array![[label]]);
    }
}

/// Test non-integer element types.
#[test]
fn test_float_grid() {
    let grid = Array2::from_shape_fn((3, 3), |(r, c)| (r * 3 + c) as f32 * 0.5);
    let samples = extract_windows(&grid, 3).unwrap();
    assert_eq!(samples.labels[0], 2.0_f32);
}

/// Test that repeated calls return identical samples.
#[test]
fn test_idempotent() {
    let grid = arange(7, 6);
    assert_eq!(
        extract_windows(&grid, 3).unwrap(),
        extract_windows(&grid, 3).unwrap()
    );
}

// ============================================================================
// Error Handling Tests
// ============================================================================

/// Test that even window sizes are rejected.
#[test]
fn test_even_window_size_rejected() {
    let grid = arange(9, 9);
    for window_size in [2, 4, 8] {
        assert_eq!(
            extract_windows(&grid, window_size),
            Err(UlamError::InvalidWindowSize(window_size))
        );
    }
}

/// Test that window size 0 is rejected.
#[test]
fn test_zero_window_size_rejected() {
    let grid = arange(3, 3);
    assert_eq!(
        extract_windows(&grid, 0),
        Err(UlamError::InvalidWindowSize(0))
    );
}
