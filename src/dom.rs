use crate::constants::REDUCED_MOTION_QUERY;
use advitya_core::{Bounds, MotionPreference, StyleDescriptor, SurfaceRect};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create `<tag class="...">`.
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    let node = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("<{tag}> is not an HtmlElement"))?;
    if !class.is_empty() {
        node.set_class_name(class);
    }
    Ok(node)
}

/// Create an element with text content.
pub fn text_el(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let node = el(document, tag, class)?;
    node.set_text_content(Some(text));
    Ok(node)
}

#[inline]
pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

#[inline]
pub fn set_attr(node: &web::Element, name: &str, value: &str) {
    _ = node.set_attribute(name, value);
}

#[inline]
pub fn set_css(node: &web::HtmlElement, property: &str, value: &str) {
    _ = node.style().set_property(property, value);
}

/// Write every populated field of `style` onto `node`.
pub fn apply_style(node: &web::HtmlElement, style: &StyleDescriptor) {
    let css = node.style();
    if let Some(t) = style.css_transform() {
        _ = css.set_property("transform", &t);
    }
    if let Some(o) = style.css_opacity() {
        _ = css.set_property("opacity", &o);
    }
    if let Some(g) = style.css_glow() {
        _ = css.set_property("background", &g);
    }
    if let Some(p) = style.css_background_position() {
        _ = css.set_property("background-position", &p);
    }
}

#[inline]
pub fn surface_rect(node: &web::Element) -> SurfaceRect {
    let r = node.get_bounding_client_rect();
    SurfaceRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Document-space box of `node` (client rect shifted by the page scroll).
pub fn document_bounds(window: &web::Window, node: &web::Element) -> Bounds {
    let r = node.get_bounding_client_rect();
    let sx = window.scroll_x().unwrap_or(0.0);
    let sy = window.scroll_y().unwrap_or(0.0);
    Bounds::new(r.left() + sx, r.top() + sy, r.width(), r.height())
}

pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Viewport box in document coordinates at scroll offset `scroll_y`.
pub fn viewport_bounds(window: &web::Window, scroll_y: f64) -> Bounds {
    let (w, h) = viewport_size(window);
    let sx = window.scroll_x().unwrap_or(0.0);
    Bounds::new(sx, scroll_y, w, h)
}

/// Largest vertical scroll offset the document allows.
pub fn scroll_limit(window: &web::Window, document: &web::Document) -> f64 {
    let (_, h) = viewport_size(window);
    let content = document
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    (content - h).max(0.0)
}

pub fn motion_preference(window: &web::Window) -> MotionPreference {
    let reduced = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    MotionPreference { reduced }
}
