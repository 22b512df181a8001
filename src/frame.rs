use crate::constants::HOVER_CLASS;
use crate::dom;
use crate::page::PageNodes;
use advitya_core::*;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Latest pointer offsets, written by the pointer listeners and read once at
/// the start of every frame.
#[derive(Default)]
pub struct PointerInputs {
    pub hero: PointerTracker,
    pub cards: Vec<PointerTracker>,
}

struct RevealEntry {
    id: RevealId,
    node: web::HtmlElement,
    entrance: Entrance,
    revealed_at: Option<f64>,
    done: bool,
}

pub struct FrameContext {
    pub window: web::Window,
    pub nodes: PageNodes,
    pub pointer: Rc<RefCell<PointerInputs>>,

    parallax: ParallaxLayer,
    cards: Vec<TiltCard>,
    card_hover: Vec<bool>,
    ambient: AmbientClock,
    reveal: RevealTrigger,
    reveal_entries: Vec<RevealEntry>,
    // Newest published scroll offset; sampled for reveals each frame.
    scroll_y: f64,
    started_at: Option<f64>,
}

impl FrameContext {
    pub fn new(
        window: web::Window,
        mut nodes: PageNodes,
        pointer: Rc<RefCell<PointerInputs>>,
        config: &MotionConfig,
        pref: MotionPreference,
    ) -> Self {
        let mut reveal = RevealTrigger::new();
        let reveal_entries = nodes
            .reveals
            .drain(..)
            .enumerate()
            .map(|(i, r)| {
                let id = RevealId(i as u32);
                reveal.observe(id, r.options);
                RevealEntry {
                    id,
                    node: r.node,
                    entrance: r.entrance,
                    revealed_at: None,
                    done: false,
                }
            })
            .collect();
        let card_count = nodes.cards.len();
        pointer.borrow_mut().cards = vec![PointerTracker::new(); card_count];
        Self {
            window,
            nodes,
            pointer,
            parallax: ParallaxLayer::new(config.hero_spring),
            cards: vec![TiltCard::new(config.card_spring); card_count],
            card_hover: vec![false; card_count],
            ambient: AmbientClock::new(pref),
            reveal,
            reveal_entries,
            scroll_y: 0.0,
            started_at: None,
        }
    }

    /// Scroll observer hook; the bridge publishes before this context ticks.
    pub fn on_scroll(&mut self, event: &ScrollEvent) {
        self.scroll_y = event.position;
    }

    pub fn frame(&mut self, time: &FrameTime) {
        let dt = time.delta_f32();
        let started = *self.started_at.get_or_insert(time.now);
        let since_start = (time.now - started) as f32;

        // 1. sample input
        {
            let inputs = self.pointer.borrow();
            self.parallax.set_pointer(inputs.hero.offset());
            for (i, card) in self.cards.iter_mut().enumerate() {
                if let Some(t) = inputs.cards.get(i) {
                    card.set_pointer(t.offset());
                    self.card_hover[i] = t.is_hovered();
                }
            }
        }

        // 2. integrate
        self.parallax.step(dt);
        for card in &mut self.cards {
            card.step(dt);
        }
        self.ambient.advance(dt);
        self.sample_reveals(time.now);

        // 3. apply
        dom::apply_style(
            &self.nodes.parallax_layer,
            &parallax_style(self.parallax.translation()),
        );
        for (i, card) in self.cards.iter().enumerate() {
            let Some(nodes) = self.nodes.cards.get(i) else {
                continue;
            };
            dom::apply_style(&nodes.face, &tilt_style(card.rotation()));
            dom::apply_style(&nodes.glow, &glow_style(card.glow_position()));
            let hovered = self.card_hover[i];
            _ = nodes.face.class_list().toggle_with_force(HOVER_CLASS, hovered);
        }
        for (node, spec) in &self.nodes.shapes {
            let f = floating_shape_frame(&self.ambient, since_start, spec.delay);
            dom::apply_style(node, &floating_style(f));
        }
        for (node, particle) in &self.nodes.particles {
            dom::apply_style(node, &floating_style(particle.frame(&self.ambient)));
        }
        for (node, spec) in &self.nodes.decorations {
            dom::apply_style(node, &floating_style(decoration_frame(&self.ambient, spec.delay)));
        }
        dom::apply_style(
            &self.nodes.gradient_line,
            &gradient_line_style(gradient_line_position(&self.ambient)),
        );
        dom::set_css(
            &self.nodes.title_glow,
            "opacity",
            &glow_pulse(&self.ambient).to_string(),
        );
        for entry in &mut self.reveal_entries {
            let (Some(at), false) = (entry.revealed_at, entry.done) else {
                continue;
            };
            let elapsed = (time.now - at) as f32;
            dom::apply_style(&entry.node, &entrance_style(entry.entrance.sample(elapsed)));
            entry.done = entry.entrance.is_complete(elapsed);
        }
    }

    fn sample_reveals(&mut self, now: f64) {
        if self.reveal.pending() == 0 {
            return;
        }
        let viewport = dom::viewport_bounds(&self.window, self.scroll_y);
        let window = &self.window;
        let entries = &self.reveal_entries;
        let geometry = |id: RevealId| {
            entries
                .get(id.0 as usize)
                .map(|e| dom::document_bounds(window, &e.node))
        };
        let entered = self.reveal.update(&viewport, &geometry);
        for id in entered {
            if let Some(entry) = self.reveal_entries.get_mut(id.0 as usize) {
                entry.revealed_at = Some(now);
            }
        }
    }
}

/// Handle to the running animation-frame loop.
pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and release the callback. Idempotent.
    pub fn cancel(&self) {
        if !self.alive.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference cycle.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop cancelled");
    }

    pub fn is_running(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Drive `ticker` from `requestAnimationFrame` until the returned handle is
/// cancelled or dropped.
pub fn start_loop(ticker: Ticker) -> FrameLoop {
    let alive = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let origin = Instant::now();

    let tick_clone = tick.clone();
    let alive_tick = alive.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        if !alive_tick.get() {
            return;
        }
        ticker.tick(origin.elapsed().as_secs_f64());
        // A subscriber may have torn the page down during this tick.
        if !alive_tick.get() {
            return;
        }
        request_frame(&tick_clone, &raf_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);

    FrameLoop {
        alive,
        raf_id,
        tick,
    }
}

fn request_frame(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: &Rc<Cell<Option<i32>>>,
) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            raf_id.set(Some(id));
        }
    }
}
