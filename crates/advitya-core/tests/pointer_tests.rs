// Host-side tests for pointer offset mapping and tracking.

use advitya_core::*;

fn hero_rect() -> SurfaceRect {
    SurfaceRect::new(100.0, 50.0, 800.0, 400.0)
}

#[test]
fn centre_maps_to_neutral() {
    let o = pointer_offset(&hero_rect(), 500.0, 250.0);
    assert_eq!(o, PointerOffset::NEUTRAL);
}

#[test]
fn corners_map_to_half_extents() {
    let r = hero_rect();
    let tl = pointer_offset(&r, 100.0, 50.0);
    assert_eq!((tl.x, tl.y), (-0.5, -0.5));
    let br = pointer_offset(&r, 900.0, 450.0);
    assert_eq!((br.x, br.y), (0.5, 0.5));
}

#[test]
fn quarter_point_is_proportional() {
    let o = pointer_offset(&hero_rect(), 300.0, 150.0);
    assert!((o.x + 0.25).abs() < 1e-6);
    assert!((o.y + 0.25).abs() < 1e-6);
}

#[test]
fn outside_coordinates_are_clamped() {
    let o = pointer_offset(&hero_rect(), -5000.0, 9000.0);
    assert_eq!(o.x, -0.5);
    assert_eq!(o.y, 0.5);
}

#[test]
fn degenerate_surface_is_neutral() {
    let flat = SurfaceRect::new(0.0, 0.0, 0.0, 300.0);
    assert_eq!(pointer_offset(&flat, 10.0, 10.0), PointerOffset::NEUTRAL);
    let negative = SurfaceRect::new(0.0, 0.0, 200.0, -1.0);
    assert_eq!(pointer_offset(&negative, 10.0, 10.0), PointerOffset::NEUTRAL);
}

#[test]
fn non_finite_pointer_is_neutral() {
    let r = hero_rect();
    assert_eq!(pointer_offset(&r, f32::NAN, 10.0), PointerOffset::NEUTRAL);
    assert_eq!(pointer_offset(&r, 10.0, f32::INFINITY), PointerOffset::NEUTRAL);
}

#[test]
fn tracker_resets_on_leave() {
    let mut t = PointerTracker::new();
    assert!(!t.is_hovered());
    let o = t.on_move(&hero_rect(), 900.0, 50.0);
    assert_eq!((o.x, o.y), (0.5, -0.5));
    assert!(t.is_hovered());
    assert_eq!(t.offset(), PointerOffset::from(glam::Vec2::new(0.5, -0.5)));

    t.on_leave();
    assert_eq!(t.offset(), PointerOffset::NEUTRAL);
    assert!(!t.is_hovered());
}

#[test]
fn tracker_uses_fresh_geometry_after_resize() {
    let mut t = PointerTracker::new();
    t.on_move(&hero_rect(), 500.0, 250.0);
    assert_eq!(t.offset(), PointerOffset::NEUTRAL);
    // Same pointer, narrower surface after a resize.
    let resized = SurfaceRect::new(100.0, 50.0, 400.0, 400.0);
    let o = t.on_move(&resized, 500.0, 250.0);
    assert_eq!(o.x, 0.5);
}
