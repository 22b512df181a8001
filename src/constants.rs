// DOM hooks shared by the page builder and the event wiring.

// Mount point; the page is appended to <body> when it is missing.
pub const ROOT_ID: &str = "app";

// Section ids (the hero CTA links to EVENTS_ID)
pub const HERO_ID: &str = "hero";
pub const EVENTS_ID: &str = "events";
pub const FOOTER_ID: &str = "footer";

// In-page links intercepted by the smooth scroller
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Class toggled on a card while the pointer is over it
pub const HOVER_CLASS: &str = "is-hovered";

// Reduced-motion media query, read once at startup
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Wheel deltaMode constants (DOM_DELTA_*)
pub const WHEEL_DELTA_PIXEL: u32 = 0;
pub const WHEEL_DELTA_LINE: u32 = 1;
pub const WHEEL_DELTA_PAGE: u32 = 2;
pub const WHEEL_LINE_HEIGHT_PX: f64 = 40.0;

// Below this the viewport already shows the published offset
pub const VIEWPORT_SYNC_EPSILON_PX: f64 = 0.5;

// Palette
pub const DEEP_BLACK: &str = "#0a0a0f";
pub const NEON_PINK: &str = "#FF006E";
pub const ELECTRIC_BLUE: &str = "#00F5FF";
pub const VIVID_PURPLE: &str = "#9D00FF";
pub const BRIGHT_YELLOW: &str = "#FFE600";

/// Convert a wheel delta to pixels according to its `deltaMode`.
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32, viewport_height: f64) -> f64 {
    if !delta.is_finite() {
        return 0.0;
    }
    match delta_mode {
        WHEEL_DELTA_LINE => delta * WHEEL_LINE_HEIGHT_PX,
        WHEEL_DELTA_PAGE => delta * viewport_height.max(0.0),
        WHEEL_DELTA_PIXEL => delta,
        _ => delta,
    }
}


/// Whether the viewport must be moved to show `published`.
///
/// Writing an offset the browser already shows would abort any native smooth
/// scroll in flight (keyboard, middle-click, scrollbar), so those are skipped.
#[inline]
pub fn needs_viewport_write(published: f64, native: f64) -> bool {
    if !published.is_finite() {
        return false;
    }
    !native.is_finite() || (published - native).abs() >= VIEWPORT_SYNC_EPSILON_PX
}
