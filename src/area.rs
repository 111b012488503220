//! Grid dimensions and the area descriptors that place panels on them.
//!
//! Areas use 1-based grid *lines*, half-open: a panel spanning the first cell
//! of a grid is `(1, 1, 2, 2)`. A grid of `cols` columns therefore has column
//! lines `1..=cols + 1`.

#[cfg(test)]
#[path = "area_test.rs"]
mod area_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size};

/// Number of columns and rows available for placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub cols: u32,
    pub rows: u32,
}

impl GridSpec {
    #[must_use]
    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Whether the grid has at least one row and one column.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.cols == 0 || self.rows == 0
    }
}

/// Rectangular span on the grid, in 1-based half-open line coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub row_start: u32,
    pub col_start: u32,
    pub row_end: u32,
    pub col_end: u32,
}

impl Area {
    #[must_use]
    pub fn new(row_start: u32, col_start: u32, row_end: u32, col_end: u32) -> Self {
        Self { row_start, col_start, row_end, col_end }
    }

    /// A single cell at 1-based `(row, col)`.
    ///
    /// A cell on line `u32::MAX` has no room for its end line and comes out
    /// degenerate.
    #[must_use]
    pub fn cell(row: u32, col: u32) -> Self {
        Self::new(row, col, row.saturating_add(1), col.saturating_add(1))
    }

    /// True when the area spans no rows or no columns, or starts before line 1.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.row_start == 0 || self.col_start == 0 || self.row_start >= self.row_end || self.col_start >= self.col_end
    }

    /// Whether the area lies within the lines of `grid`.
    #[must_use]
    pub fn fits(&self, grid: GridSpec) -> bool {
        !self.is_degenerate()
            && u64::from(self.row_end) <= u64::from(grid.rows) + 1
            && u64::from(self.col_end) <= u64::from(grid.cols) + 1
    }

    /// Whether two areas share at least one cell.
    #[must_use]
    pub fn overlaps(&self, other: &Area) -> bool {
        self.row_start < other.row_end
            && other.row_start < self.row_end
            && self.col_start < other.col_end
            && other.col_start < self.col_end
    }

    /// Convert a pixel rectangle on a canvas of `canvas` size into the area whose
    /// lines are nearest to the rectangle's edges.
    ///
    /// Every edge is rounded to the closest grid line, then clamped so the result
    /// stays inside `grid` and spans at least one cell. Returns `None` when the
    /// canvas has no usable size or the grid is empty.
    #[must_use]
    pub fn from_rect(rect: Rect, canvas: Size, grid: GridSpec) -> Option<Self> {
        if !canvas.is_usable() || grid.is_empty() {
            return None;
        }
        let col_px = canvas.width / f64::from(grid.cols);
        let row_px = canvas.height / f64::from(grid.rows);

        // Start lines stop one short of u32::MAX so every end line is representable.
        let col_start = nearest_line(rect.left, col_px, 1, grid.cols.min(u32::MAX - 1));
        let col_end = nearest_line(rect.right(), col_px, col_start + 1, grid.cols.saturating_add(1));
        let row_start = nearest_line(rect.top, row_px, 1, grid.rows.min(u32::MAX - 1));
        let row_end = nearest_line(rect.bottom(), row_px, row_start + 1, grid.rows.saturating_add(1));

        Some(Self::new(row_start, col_start, row_end, col_end))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn nearest_line(px: f64, cell_px: f64, lo: u32, hi: u32) -> u32 {
    let line = (px / cell_px).round() + 1.0;
    if line.is_nan() {
        return lo;
    }
    line.clamp(f64::from(lo), f64::from(hi)) as u32
}
