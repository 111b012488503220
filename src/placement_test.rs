use super::*;

// =============================================================
// allocate
// =============================================================

#[test]
fn first_panel_takes_top_left_cell() {
    let mut grid = GridSpec::new(3, 1);
    assert_eq!(allocate(&mut grid, 0), Area::cell(1, 1));
    assert_eq!(grid, GridSpec::new(3, 1));
}

#[test]
fn fills_a_row_before_wrapping() {
    let mut grid = GridSpec::new(3, 1);
    assert_eq!(allocate(&mut grid, 2), Area::cell(1, 3));
    assert_eq!(allocate(&mut grid, 3), Area::cell(2, 1));
    assert_eq!(grid.rows, 2);
}

#[test]
fn grows_rows_but_never_columns() {
    let mut grid = GridSpec::new(2, 2);
    let area = allocate(&mut grid, 4);
    assert_eq!(area, Area::new(3, 1, 4, 2));
    assert_eq!(grid, GridSpec::new(2, 3));
}

#[test]
fn does_not_shrink_a_taller_grid() {
    let mut grid = GridSpec::new(2, 5);
    allocate(&mut grid, 0);
    assert_eq!(grid.rows, 5);
}

#[test]
fn zero_column_grid_behaves_as_single_column() {
    let mut grid = GridSpec::new(0, 1);
    assert_eq!(allocate(&mut grid, 2), Area::cell(3, 1));
}

// =============================================================
// sequential
// =============================================================

#[test]
fn kth_panel_occupies_row_major_cell() {
    for cols in 1..=5_u32 {
        let (_, areas) = sequential(cols, 23);
        for (k, area) in areas.iter().enumerate() {
            let k = u32::try_from(k).expect("small index");
            assert_eq!(area.row_start - 1, k / cols, "row for k={k} cols={cols}");
            assert_eq!(area.col_start - 1, k % cols, "col for k={k} cols={cols}");
            assert_eq!(area.row_end, area.row_start + 1);
            assert_eq!(area.col_end, area.col_start + 1);
        }
    }
}

#[test]
fn rows_after_k_additions_match_ceiling() {
    for cols in 1..=4_u32 {
        for k in 1..=17_usize {
            let (grid, _) = sequential(cols, k);
            let k = u32::try_from(k).expect("small count");
            assert_eq!(grid.rows, (k - 1) / cols + 1, "k={k} cols={cols}");
            assert_eq!(grid.cols, cols);
        }
    }
}

#[test]
fn sequential_areas_never_overlap_and_fit() {
    let (grid, areas) = sequential(3, 10);
    for (i, a) in areas.iter().enumerate() {
        assert!(a.fits(grid));
        for b in &areas[i + 1..] {
            assert!(!a.overlaps(b));
        }
    }
}
