// Host-side tests for DOM-facing constants and wheel normalization.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn pixel_deltas_pass_through() {
    assert_eq!(wheel_delta_px(120.0, WHEEL_DELTA_PIXEL, 800.0), 120.0);
    assert_eq!(wheel_delta_px(-3.5, WHEEL_DELTA_PIXEL, 800.0), -3.5);
}

#[test]
fn line_deltas_scale_by_line_height() {
    assert_eq!(
        wheel_delta_px(3.0, WHEEL_DELTA_LINE, 800.0),
        3.0 * WHEEL_LINE_HEIGHT_PX
    );
}

#[test]
fn page_deltas_scale_by_viewport() {
    assert_eq!(wheel_delta_px(1.0, WHEEL_DELTA_PAGE, 900.0), 900.0);
    assert_eq!(wheel_delta_px(1.0, WHEEL_DELTA_PAGE, -5.0), 0.0);
}

#[test]
fn unknown_mode_and_bad_input() {
    assert_eq!(wheel_delta_px(7.0, 42, 800.0), 7.0);
    assert_eq!(wheel_delta_px(f64::NAN, WHEEL_DELTA_PIXEL, 800.0), 0.0);
    assert_eq!(wheel_delta_px(f64::INFINITY, WHEEL_DELTA_LINE, 800.0), 0.0);
}

#[test]
fn anchor_selector_matches_fragment_links_only() {
    assert_eq!(ANCHOR_SELECTOR, "a[href^=\"#\"]");
    assert!(!EVENTS_ID.starts_with('#'));
    assert_ne!(HERO_ID, EVENTS_ID);
    assert_ne!(EVENTS_ID, FOOTER_ID);
}

#[test]
fn palette_is_hex() {
    for c in [DEEP_BLACK, NEON_PINK, ELECTRIC_BLUE, VIVID_PURPLE, BRIGHT_YELLOW] {
        assert!(c.starts_with('#'));
        assert_eq!(c.len(), 7);
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}

#[test]
fn viewport_write_skipped_when_already_there() {
    // A native scroll synced into the bridge publishes where the page already is.
    assert!(!needs_viewport_write(640.0, 640.0));
    assert!(!needs_viewport_write(640.0, 640.4));
    assert!(needs_viewport_write(640.0, 700.0));
    assert!(needs_viewport_write(12.0, f64::NAN));
    assert!(!needs_viewport_write(f64::NAN, 12.0));
}
