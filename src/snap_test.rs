#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

const T: f64 = 10.0;

fn rect(top: f64, left: f64, width: f64, height: f64) -> Rect {
    Rect::new(top, left, width, height)
}

/// A sibling far below the candidate so only horizontal relations can fire.
fn column_at(left: f64, width: f64) -> Rect {
    rect(5000.0, left, width, 300.0)
}

// =============================================================
// snap_to_siblings
// =============================================================

#[test]
fn no_siblings_is_identity() {
    let r = rect(12.0, 34.0, 250.0, 260.0);
    assert_eq!(snap_to_siblings(r, &[], T), r);
}

#[test]
fn distant_sibling_is_ignored() {
    let r = rect(0.0, 0.0, 300.0, 300.0);
    let s = rect(0.0, 400.0, 300.0, 300.0);
    let snapped = snap_to_siblings(r, &[s], T);
    assert_eq!(snapped.width, 300.0);
    assert_eq!(snapped.left, 0.0);
}

#[test]
fn right_edge_abuts_neighbour_left_edge() {
    let a = rect(0.0, 0.0, 308.0, 300.0);
    let b = rect(0.0, 310.0, 300.0, 300.0);
    let snapped = snap_to_siblings(a, &[b], T);
    assert_eq!(snapped.width, 310.0);
    assert_eq!(snapped.left, 0.0);
    assert_eq!(snapped.top, 0.0);
    assert_eq!(snapped.height, 300.0);
}

#[test]
fn threshold_is_exclusive() {
    let a = rect(5000.0, 0.0, 300.0, 300.0);
    let b = column_at(310.0, 300.0);
    assert_eq!(snap_to_siblings(a, &[b], T).width, 300.0);
    let a = rect(5000.0, 0.0, 300.1, 300.0);
    assert_eq!(snap_to_siblings(a, &[b], T).width, 310.0);
}

#[test]
fn left_edge_abuts_neighbour_right_edge() {
    let a = rect(0.0, 605.0, 250.0, 250.0);
    let b = rect(1000.0, 300.0, 300.0, 300.0);
    let snapped = snap_to_siblings(a, &[b], T);
    assert_eq!(snapped.left, 600.0);
    assert_eq!(snapped.width, 250.0);
}

#[test]
fn bottom_edge_abuts_neighbour_top_edge() {
    let a = rect(0.0, 0.0, 250.0, 395.0);
    let b = rect(400.0, 1000.0, 300.0, 300.0);
    let snapped = snap_to_siblings(a, &[b], T);
    assert_eq!(snapped.height, 400.0);
    assert_eq!(snapped.top, 0.0);
}

#[test]
fn top_edge_abuts_neighbour_bottom_edge() {
    let a = rect(303.0, 0.0, 250.0, 250.0);
    let b = rect(0.0, 1000.0, 300.0, 300.0);
    assert_eq!(snap_to_siblings(a, &[b], T).top, 300.0);
}

#[test]
fn aligned_edges_snap_together() {
    let a = rect(4.0, 1003.0, 295.0, 304.0);
    let b = rect(0.0, 1000.0, 300.0, 300.0);
    let snapped = snap_to_siblings(a, &[b], T);
    assert_eq!(snapped, rect(0.0, 1000.0, 300.0, 300.0));
}

#[test]
fn later_relation_overrides_earlier_on_same_edge() {
    // Relation 1 pulls left to the sibling's right edge (3), then relation 5
    // pulls it on to the sibling's left edge (0).
    let a = rect(5000.0, 5.0, 250.0, 250.0);
    let s = rect(0.0, 0.0, 3.0, 3.0);
    assert_eq!(snap_to_siblings(a, &[s], T).left, 0.0);
}

#[test]
fn last_matching_sibling_wins_over_nearest() {
    // Right edge sits at 308: 3px from the first sibling, 4px from the second.
    let a = rect(0.0, 0.0, 308.0, 250.0);
    let nearer = column_at(305.0, 300.0);
    let later = column_at(312.0, 300.0);
    assert_eq!(snap_to_siblings(a, &[nearer, later], T).width, 312.0);
    assert_eq!(snap_to_siblings(a, &[later, nearer], T).width, 305.0);
}

// =============================================================
// clamp_min_size
// =============================================================

#[test]
fn clamp_raises_small_dimensions_only() {
    let r = clamp_min_size(rect(10.0, 20.0, 50.0, 500.0), 200.0);
    assert_eq!(r, rect(10.0, 20.0, 200.0, 500.0));
}

#[test]
fn clamp_handles_negative_and_nan() {
    let r = clamp_min_size(rect(0.0, 0.0, -40.0, f64::NAN), 200.0);
    assert_eq!(r.width, 200.0);
    assert_eq!(r.height, 200.0);
}
