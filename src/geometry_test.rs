#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn rect_edges_derive_from_origin_and_size() {
    let r = Rect::new(10.0, 20.0, 300.0, 150.0);
    assert_eq!(r.right(), 320.0);
    assert_eq!(r.bottom(), 160.0);
}

#[test]
fn rect_default_is_empty_at_origin() {
    let r = Rect::default();
    assert_eq!(r.right(), 0.0);
    assert_eq!(r.bottom(), 0.0);
}

#[test]
fn size_usable_requires_positive_finite_dimensions() {
    assert!(Size::new(800.0, 600.0).is_usable());
    assert!(!Size::new(0.0, 600.0).is_usable());
    assert!(!Size::new(800.0, -1.0).is_usable());
    assert!(!Size::new(f64::INFINITY, 600.0).is_usable());
    assert!(!Size::new(f64::NAN, 600.0).is_usable());
}

#[test]
fn point_new_sets_fields() {
    let p = Point::new(1.5, -2.0);
    assert_eq!(p.x, 1.5);
    assert_eq!(p.y, -2.0);
}
