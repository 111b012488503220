//! Edge snapping against sibling panels, and minimum-size clamping.
//!
//! For each sibling, in panel order, eight edge relations are tested against
//! the candidate as it stands at that moment:
//!
//! | # | candidate edge | sibling edge | adjusts |
//! |---|----------------|--------------|---------|
//! | 1 | left   | right  | `left`   |
//! | 2 | right  | left   | `width`  |
//! | 3 | top    | bottom | `top`    |
//! | 4 | bottom | top    | `height` |
//! | 5 | left   | left   | `left`   |
//! | 6 | right  | right  | `width`  |
//! | 7 | top    | top    | `top`    |
//! | 8 | bottom | bottom | `height` |
//!
//! Relations fire independently, so a later relation or a later sibling
//! overwrites an earlier adjustment to the same edge. The last match wins,
//! not the nearest one.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::geometry::Rect;

/// Whether two edge coordinates are within `threshold` of each other.
fn near(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() < threshold
}

/// Snap `candidate` against every rectangle in `siblings`.
#[must_use]
pub fn snap_to_siblings(candidate: Rect, siblings: &[Rect], threshold: f64) -> Rect {
    let mut r = candidate;
    for s in siblings {
        // Abutting edges.
        if near(r.left, s.right(), threshold) {
            r.left = s.right();
        }
        if near(r.right(), s.left, threshold) {
            r.width = s.left - r.left;
        }
        if near(r.top, s.bottom(), threshold) {
            r.top = s.bottom();
        }
        if near(r.bottom(), s.top, threshold) {
            r.height = s.top - r.top;
        }

        // Aligned edges.
        if near(r.left, s.left, threshold) {
            r.left = s.left;
        }
        if near(r.right(), s.right(), threshold) {
            r.width = s.right() - r.left;
        }
        if near(r.top, s.top, threshold) {
            r.top = s.top;
        }
        if near(r.bottom(), s.bottom(), threshold) {
            r.height = s.bottom() - r.top;
        }
    }
    r
}

/// Raise width and height to at least `min_size`. Position is untouched.
#[must_use]
pub fn clamp_min_size(rect: Rect, min_size: f64) -> Rect {
    Rect {
        width: rect.width.max(min_size),
        height: rect.height.max(min_size),
        ..rect
    }
}
