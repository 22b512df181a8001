#![cfg(target_arch = "wasm32")]
use advitya_core::{MotionConfig, ScrollBridge, Subscription, Ticker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod listener;
mod page;

use listener::ListenerGuard;

thread_local! {
    static PAGE: RefCell<Option<PageHandle>> = const { RefCell::new(None) };
}

/// Everything the running page owns. Tearing it down releases the frame
/// loop, ticker subscriptions, scroll observers and DOM listeners.
struct PageHandle {
    ticker: Ticker,
    subscriptions: Vec<Subscription>,
    listeners: Vec<ListenerGuard>,
    frame_loop: Option<frame::FrameLoop>,
    bridge: Rc<RefCell<ScrollBridge>>,
    torn_down: bool,
}

impl PageHandle {
    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let Some(l) = self.frame_loop.take().filter(|l| l.is_running()) {
            l.cancel();
        }
        let listeners = self.listeners.len();
        self.listeners.clear();
        for sub in &mut self.subscriptions {
            sub.cancel();
        }
        self.subscriptions.clear();
        self.ticker.shutdown();
        if let Ok(mut b) = self.bridge.try_borrow_mut() {
            b.destroy();
        }
        log::info!("[page] torn down ({listeners} listeners released)");
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("advitya-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop every animation and release every listener. Safe to call repeatedly.
#[wasm_bindgen]
pub fn teardown() {
    let handle = PAGE.with(|p| p.borrow_mut().take());
    if let Some(mut h) = handle {
        h.teardown();
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // A second start replaces the previous page cleanly.
    teardown();

    let root: web::Element = match document.get_element_by_id(constants::ROOT_ID) {
        Some(el) => el,
        None => {
            log::warn!("#{} missing; mounting on <body>", constants::ROOT_ID);
            document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no <body>"))?
                .into()
        }
    };

    let config = MotionConfig::default();
    config.validate().map_err(|e| anyhow::anyhow!("{e}"))?;
    let pref = dom::motion_preference(&window);
    if pref.reduced {
        log::info!("[page] reduced motion: decorative loops frozen");
    }

    let nodes = page::build(&document, &root)?;
    let hero = nodes.hero.clone();
    let card_faces: Vec<web::HtmlElement> = nodes.cards.iter().map(|c| c.face.clone()).collect();

    let ticker = Ticker::new();
    let limit = dom::scroll_limit(&window, &document);
    let bridge = Rc::new(RefCell::new(
        ScrollBridge::new(config.scroll, limit).map_err(|e| anyhow::anyhow!("{e}"))?,
    ));
    bridge
        .borrow_mut()
        .sync_native(window.scroll_y().unwrap_or(0.0));
    log::info!("[scroll] limit={limit:.0}px");

    let pointer = Rc::new(RefCell::new(frame::PointerInputs::default()));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        window.clone(),
        nodes,
        pointer.clone(),
        &config,
        pref,
    )));

    // Scroll observers: move the real viewport, then feed the frame context.
    {
        let mut b = bridge.borrow_mut();
        let viewport = window.clone();
        b.subscribe(move |ev| {
            let native = viewport.scroll_y().unwrap_or(f64::NAN);
            if constants::needs_viewport_write(ev.position, native) {
                viewport.scroll_to_with_x_and_y(0.0, ev.position);
            }
        });
        let ctx = frame_ctx.clone();
        b.subscribe(move |ev| ctx.borrow_mut().on_scroll(ev));
    }

    // Scroll integrates before the frame samples positions.
    let mut subscriptions = Vec::with_capacity(2);
    let scroll_bridge = bridge.clone();
    subscriptions.push(ticker.subscribe(move |t| {
        scroll_bridge.borrow_mut().tick(t);
    }));
    let frame_tick = frame_ctx.clone();
    subscriptions.push(ticker.subscribe(move |t| frame_tick.borrow_mut().frame(t)));

    let mut listeners = events::wire_pointer(&hero, &card_faces, &pointer)?;
    listeners.extend(events::wire_scroll_input(&window, &bridge)?);
    listeners.push(events::wire_anchor_clicks(&window, &document, &bridge)?);
    listeners.push(events::wire_resize(&window, &document, &bridge)?);
    listeners.push(listener::listen(&window, "pagehide", true, |_: web::Event| {
        teardown();
    })?);
    log::info!(
        "[page] {} listeners: {}",
        listeners.len(),
        listeners
            .iter()
            .map(|l| l.event())
            .collect::<Vec<_>>()
            .join(",")
    );

    let frame_loop = frame::start_loop(ticker.clone());

    PAGE.with(|p| {
        *p.borrow_mut() = Some(PageHandle {
            ticker,
            subscriptions,
            listeners,
            frame_loop: Some(frame_loop),
            bridge,
            torn_down: false,
        });
    });
    Ok(())
}
