use crate::constants::{wheel_delta_px, ANCHOR_SELECTOR};
use crate::dom;
use crate::frame::PointerInputs;
use crate::listener::{listen, ListenerGuard};
use advitya_core::{AnchorOutcome, ScrollBridge};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hero parallax and per-card tilt tracking.
pub fn wire_pointer(
    hero: &web::HtmlElement,
    cards: &[web::HtmlElement],
    inputs: &Rc<RefCell<PointerInputs>>,
) -> anyhow::Result<Vec<ListenerGuard>> {
    let mut guards = Vec::with_capacity(2 + cards.len() * 2);

    let hero_el = hero.clone();
    let hero_inputs = inputs.clone();
    guards.push(listen(hero, "pointermove", true, move |ev: web::PointerEvent| {
        let rect = dom::surface_rect(&hero_el);
        hero_inputs
            .borrow_mut()
            .hero
            .on_move(&rect, ev.client_x() as f32, ev.client_y() as f32);
    })?);
    let hero_inputs = inputs.clone();
    guards.push(listen(hero, "pointerleave", true, move |_: web::PointerEvent| {
        hero_inputs.borrow_mut().hero.on_leave();
    })?);

    for (i, card) in cards.iter().enumerate() {
        let card_el = card.clone();
        let card_inputs = inputs.clone();
        guards.push(listen(card, "pointermove", true, move |ev: web::PointerEvent| {
            let rect = dom::surface_rect(&card_el);
            if let Some(t) = card_inputs.borrow_mut().cards.get_mut(i) {
                t.on_move(&rect, ev.client_x() as f32, ev.client_y() as f32);
            }
        })?);
        let card_inputs = inputs.clone();
        guards.push(listen(card, "pointerleave", true, move |_: web::PointerEvent| {
            if let Some(t) = card_inputs.borrow_mut().cards.get_mut(i) {
                t.on_leave();
            }
        })?);
    }
    Ok(guards)
}

/// Wheel and touch input into the smooth scroller, plus native scroll sync
/// for scrollbar drags and keyboard scrolling.
pub fn wire_scroll_input(
    window: &web::Window,
    bridge: &Rc<RefCell<ScrollBridge>>,
) -> anyhow::Result<Vec<ListenerGuard>> {
    let target: &web::EventTarget = window.as_ref();
    let mut guards = Vec::with_capacity(5);

    let wheel_bridge = bridge.clone();
    let wheel_window = window.clone();
    guards.push(listen(target, "wheel", false, move |ev: web::WheelEvent| {
        if ev.ctrl_key() {
            // pinch-zoom gesture
            return;
        }
        let (_, vh) = dom::viewport_size(&wheel_window);
        let delta = wheel_delta_px(ev.delta_y(), ev.delta_mode(), vh);
        if wheel_bridge.borrow_mut().on_wheel(delta) {
            ev.prevent_default();
        }
    })?);

    let last_touch: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
    let start_touch = last_touch.clone();
    guards.push(listen(target, "touchstart", true, move |ev: web::TouchEvent| {
        start_touch.set(first_touch_y(&ev));
    })?);
    let move_touch = last_touch.clone();
    let touch_bridge = bridge.clone();
    guards.push(listen(target, "touchmove", false, move |ev: web::TouchEvent| {
        let Some(y) = first_touch_y(&ev) else {
            return;
        };
        if let Some(prev) = move_touch.replace(Some(y)) {
            // Finger moving up scrolls the page down.
            if touch_bridge.borrow_mut().on_touch(prev - y) {
                ev.prevent_default();
            }
        }
    })?);
    let end_touch = last_touch;
    guards.push(listen(target, "touchend", true, move |_: web::TouchEvent| {
        end_touch.set(None);
    })?);

    let sync_bridge = bridge.clone();
    let sync_window = window.clone();
    guards.push(listen(target, "scroll", true, move |_: web::Event| {
        let Ok(mut b) = sync_bridge.try_borrow_mut() else {
            return;
        };
        if !b.is_scrolling() {
            b.sync_native(sync_window.scroll_y().unwrap_or(0.0));
        }
    })?);

    Ok(guards)
}

fn first_touch_y(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_y() as f64)
}

/// In-page `#fragment` links scroll smoothly instead of jumping.
pub fn wire_anchor_clicks(
    window: &web::Window,
    document: &web::Document,
    bridge: &Rc<RefCell<ScrollBridge>>,
) -> anyhow::Result<ListenerGuard> {
    let bridge = bridge.clone();
    let doc = document.clone();
    let win = window.clone();
    listen(document, "click", false, move |ev: web::MouseEvent| {
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(ANCHOR_SELECTOR).ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let resolver = |fragment: &str| {
            doc.get_element_by_id(fragment)
                .map(|target| dom::document_bounds(&win, &target).top)
        };
        let outcome = bridge.borrow_mut().handle_anchor(&href, &resolver);
        if let AnchorOutcome::Scrolled(to) = outcome {
            ev.prevent_default();
            log::info!("[anchor] {href} -> {to:.0}px");
        }
    })
}

/// Keep the scroll extent current as the layout changes.
pub fn wire_resize(
    window: &web::Window,
    document: &web::Document,
    bridge: &Rc<RefCell<ScrollBridge>>,
) -> anyhow::Result<ListenerGuard> {
    let bridge = bridge.clone();
    let doc = document.clone();
    let win = window.clone();
    listen(window, "resize", true, move |_: web::Event| {
        let limit = dom::scroll_limit(&win, &doc);
        bridge.borrow_mut().set_limit(limit);
    })
}
