//! Placement allocator: row-major slotting of newly appended panels.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use crate::area::{Area, GridSpec};

/// Compute the area for the panel appended after `existing` panels.
///
/// Panel `n` (0-based) takes cell `n` in row-major order. When that cell lies
/// below the last row, `grid.rows` grows to reach it; the column count is
/// never changed here. Only panels placed by this same sequence are
/// guaranteed not to overlap.
///
/// `grid.cols` must be non-zero; a zero-column grid is treated as one column.
pub fn allocate(grid: &mut GridSpec, existing: usize) -> Area {
    let cols = u64::from(grid.cols.max(1));
    let n = existing as u64;
    let col = u32::try_from(n % cols).unwrap_or(0) + 1;
    let row = u32::try_from(n / cols).unwrap_or(u32::MAX - 2) + 1;

    if row > grid.rows {
        grid.rows = row;
    }
    Area::cell(row, col)
}

/// Place `count` panels one after another, starting from an empty grid with
/// `cols` columns and a single row.
///
/// Returns the grown grid and the areas in placement order.
#[must_use]
pub fn sequential(cols: u32, count: usize) -> (GridSpec, Vec<Area>) {
    let mut grid = GridSpec::new(cols.max(1), 1);
    let areas = (0..count).map(|n| allocate(&mut grid, n)).collect();
    (grid, areas)
}
