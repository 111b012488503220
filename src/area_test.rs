use super::*;

// =============================================================
// GridSpec
// =============================================================

#[test]
fn grid_empty_when_any_dimension_is_zero() {
    assert!(GridSpec::new(0, 3).is_empty());
    assert!(GridSpec::new(3, 0).is_empty());
    assert!(!GridSpec::new(1, 1).is_empty());
}

// =============================================================
// Area
// =============================================================

#[test]
fn cell_spans_exactly_one_row_and_column() {
    let a = Area::cell(2, 3);
    assert_eq!(a, Area::new(2, 3, 3, 4));
    assert!(!a.is_degenerate());
}

#[test]
fn degenerate_when_inverted_or_zero_based() {
    assert!(Area::new(2, 1, 2, 2).is_degenerate());
    assert!(Area::new(1, 3, 2, 2).is_degenerate());
    assert!(Area::new(0, 1, 1, 2).is_degenerate());
    assert!(Area::new(1, 0, 2, 1).is_degenerate());
}

#[test]
fn fits_allows_the_closing_grid_line() {
    let grid = GridSpec::new(2, 2);
    assert!(Area::new(1, 1, 3, 3).fits(grid));
    assert!(Area::cell(2, 2).fits(grid));
    assert!(!Area::cell(3, 1).fits(grid));
    assert!(!Area::new(1, 2, 2, 4).fits(grid));
}

#[test]
fn fits_handles_the_largest_grid() {
    let max = GridSpec::new(u32::MAX, u32::MAX);
    assert!(Area::new(1, 1, u32::MAX, u32::MAX).fits(max));
    assert!(Area::cell(1, 1).fits(max));
    assert!(!Area::new(1, 1, u32::MAX, 2).fits(GridSpec::new(2, 2)));
    assert!(!Area::new(1, 1, 2, u32::MAX).fits(GridSpec::new(2, 2)));
}

#[test]
fn cell_on_last_line_is_degenerate() {
    assert!(Area::cell(u32::MAX, 1).is_degenerate());
    assert!(Area::cell(1, u32::MAX).is_degenerate());
}

#[test]
fn fits_rejects_degenerate_areas() {
    assert!(!Area::new(1, 1, 1, 2).fits(GridSpec::new(4, 4)));
}

#[test]
fn overlap_requires_a_shared_cell() {
    let a = Area::new(1, 1, 3, 3);
    assert!(a.overlaps(&Area::cell(2, 2)));
    assert!(!a.overlaps(&Area::cell(1, 3)));
    assert!(!a.overlaps(&Area::cell(3, 1)));
    assert!(!Area::cell(1, 1).overlaps(&Area::cell(1, 2)));
}

#[test]
fn area_serializes_with_camel_case_keys() {
    let json = serde_json::to_string(&Area::cell(1, 2)).expect("serialize");
    assert_eq!(json, r#"{"rowStart":1,"colStart":2,"rowEnd":2,"colEnd":3}"#);
}

// =============================================================
// Area::from_rect
// =============================================================

#[test]
fn from_rect_rounds_edges_to_nearest_lines() {
    let grid = GridSpec::new(4, 2);
    let canvas = Size::new(800.0, 400.0);
    // Columns are 200px wide, rows 200px tall.
    let rect = Rect::new(10.0, 190.0, 420.0, 370.0);
    let area = Area::from_rect(rect, canvas, grid).expect("area");
    assert_eq!(area, Area::new(1, 2, 3, 4));
}

#[test]
fn from_rect_clamps_to_grid_and_keeps_one_cell() {
    let grid = GridSpec::new(2, 2);
    let canvas = Size::new(400.0, 400.0);
    let rect = Rect::new(-500.0, 900.0, 50.0, 50.0);
    let area = Area::from_rect(rect, canvas, grid).expect("area");
    assert_eq!(area, Area::new(1, 2, 2, 3));
    assert!(area.fits(grid));
}

#[test]
fn from_rect_requires_usable_canvas() {
    let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
    assert!(Area::from_rect(rect, Size::new(0.0, 400.0), GridSpec::new(2, 2)).is_none());
    assert!(Area::from_rect(rect, Size::new(400.0, 400.0), GridSpec::new(0, 2)).is_none());
}

#[test]
fn from_rect_on_largest_grid_stays_in_range() {
    let grid = GridSpec::new(u32::MAX, u32::MAX);
    let rect = Rect::new(400.0, 400.0, 50.0, 50.0);
    let area = Area::from_rect(rect, Size::new(400.0, 400.0), grid).expect("area");
    assert_eq!(area, Area::new(u32::MAX - 1, u32::MAX - 1, u32::MAX, u32::MAX));
    assert!(area.fits(grid));
}
