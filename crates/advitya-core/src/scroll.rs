//! Smooth-scroll bridge.
//!
//! Raw wheel and touch deltas move a *target* offset; every frame the
//! *virtual* offset eases toward it and the result is fanned out to
//! observers (the viewport writer, reveal sampling, ...). In-page anchor
//! clicks become animated scroll-to requests.

use crate::constants::*;
use crate::easing::Easing;
use crate::error::MotionError;
use crate::ticker::FrameTime;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Seconds taken to settle after an input delta.
    pub duration: f64,
    /// Default seconds for programmatic scroll-to.
    pub scroll_to_duration: f64,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    pub easing: Easing,
    /// Distance in px at which an animation counts as finished.
    pub epsilon: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration: SCROLL_DURATION_SEC,
            scroll_to_duration: SCROLL_TO_DURATION_SEC,
            wheel_multiplier: SCROLL_WHEEL_MULTIPLIER,
            touch_multiplier: SCROLL_TOUCH_MULTIPLIER,
            easing: Easing::ExpoOut,
            epsilon: SCROLL_EPSILON_PX,
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<(), MotionError> {
        for d in [self.duration, self.scroll_to_duration] {
            if !d.is_finite() || d < 0.0 {
                return Err(MotionError::InvalidDuration(d));
            }
        }
        for (field, value) in [
            ("wheel", self.wheel_multiplier),
            ("touch", self.touch_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MotionError::InvalidMultiplier { field, value });
            }
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(MotionError::InvalidMultiplier {
                field: "epsilon",
                value: self.epsilon,
            });
        }
        Ok(())
    }
}

/// Live scroll values, in document pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub virtual_position: f64,
    pub target_position: f64,
    /// Pixels per second over the last frame.
    pub velocity: f64,
}

/// Snapshot published to observers once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub position: f64,
    pub target: f64,
    pub velocity: f64,
    /// 1 scrolling down, -1 up, 0 before any movement.
    pub direction: i8,
    /// position / limit, 0 when nothing can scroll.
    pub progress: f64,
    pub limit: f64,
    pub is_scrolling: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollToOptions {
    /// Added to the resolved offset (negative stops short of the element).
    pub offset: f64,
    /// `None` uses `ScrollConfig::scroll_to_duration`.
    pub duration: Option<f64>,
    /// Jump without animating.
    pub immediate: bool,
}

/// Where a scroll-to should land.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget<'a> {
    /// Absolute document offset in pixels.
    Offset(f64),
    /// Element id, looked up through an [`AnchorResolver`].
    Element(&'a str),
}

/// Resolves an in-page fragment (without `#`) to the absolute document
/// offset of the element it names.
pub trait AnchorResolver {
    fn resolve(&self, fragment: &str) -> Option<f64>;
}

impl<F> AnchorResolver for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn resolve(&self, fragment: &str) -> Option<f64> {
        self(fragment)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorOutcome {
    /// Not an in-page link; leave the click alone.
    Ignored,
    /// Fragment link with no matching element; native behaviour applies.
    Unresolved,
    /// Scroll animation started toward this clamped offset; the caller
    /// should prevent the default navigation.
    Scrolled(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    easing: Easing,
}

impl Tween {
    fn sample(&self) -> f64 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

type Observer = Box<dyn FnMut(&ScrollEvent)>;

pub struct ScrollBridge {
    config: ScrollConfig,
    state: ScrollState,
    limit: f64,
    tween: Option<Tween>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
    direction: i8,
    scroll_to_requests: u64,
    stopped: bool,
    destroyed: bool,
}

impl ScrollBridge {
    /// `limit` is the largest reachable offset (document height minus
    /// viewport height).
    pub fn new(config: ScrollConfig, limit: f64) -> Result<Self, MotionError> {
        config.validate()?;
        Ok(Self {
            config,
            state: ScrollState::default(),
            limit: sanitize_limit(limit),
            tween: None,
            observers: Vec::new(),
            next_observer: 0,
            direction: 0,
            scroll_to_requests: 0,
            stopped: false,
            destroyed: false,
        })
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.state.virtual_position
    }

    #[inline]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    #[inline]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_scrolling(&self) -> bool {
        self.tween.is_some()
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Number of scroll-to animations started so far.
    #[inline]
    pub fn scroll_to_requests(&self) -> u64 {
        self.scroll_to_requests
    }

    /// Adopt the page's real offset (initial load, native jumps) without
    /// animating.
    pub fn sync_native(&mut self, position: f64) {
        if self.destroyed || !position.is_finite() {
            return;
        }
        let p = self.clamp(position);
        self.state.virtual_position = p;
        self.state.target_position = p;
        self.state.velocity = 0.0;
        self.tween = None;
    }

    /// New scrollable extent after a resize or content change.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = sanitize_limit(limit);
        self.state.virtual_position = self.clamp(self.state.virtual_position);
        self.state.target_position = self.clamp(self.state.target_position);
        let limit = self.limit;
        if let Some(tw) = &mut self.tween {
            tw.from = tw.from.clamp(0.0, limit);
            tw.to = tw.to.clamp(0.0, limit);
        }
    }

    /// Wheel delta in pixels. Returns true when the bridge took over the
    /// input and native scrolling should be suppressed.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        self.push_delta(delta_y * self.config.wheel_multiplier)
    }

    /// Finger drag delta in pixels (positive scrolls down).
    pub fn on_touch(&mut self, delta_y: f64) -> bool {
        self.push_delta(delta_y * self.config.touch_multiplier)
    }

    fn push_delta(&mut self, delta: f64) -> bool {
        if self.destroyed || self.stopped || !delta.is_finite() {
            return false;
        }
        if self.limit <= 0.0 {
            return false;
        }
        let target = self.clamp(self.state.target_position + delta);
        self.retarget(target, self.config.duration);
        true
    }

    /// Animate to an absolute document offset. Returns the clamped target
    /// or `None` when the bridge is stopped or destroyed.
    pub fn scroll_to(&mut self, position: f64, opts: ScrollToOptions) -> Option<f64> {
        if self.destroyed || self.stopped || !position.is_finite() {
            return None;
        }
        let offset = if opts.offset.is_finite() {
            opts.offset
        } else {
            0.0
        };
        let target = self.clamp(position + offset);
        self.scroll_to_requests += 1;
        log::debug!(
            "[scroll] scroll-to {:.1} (from {:.1})",
            target,
            self.state.virtual_position
        );
        if opts.immediate {
            self.state.virtual_position = target;
            self.state.target_position = target;
            self.tween = None;
            return Some(target);
        }
        let duration = opts
            .duration
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(self.config.scroll_to_duration);
        self.retarget(target, duration);
        Some(target)
    }

    /// Scroll to an offset or to an element's resolved offset. Returns
    /// `None` when the element cannot be found or input is locked.
    pub fn scroll_to_target(
        &mut self,
        target: ScrollTarget<'_>,
        opts: ScrollToOptions,
        resolver: &impl AnchorResolver,
    ) -> Option<f64> {
        let position = match target {
            ScrollTarget::Offset(p) => p,
            ScrollTarget::Element(id) => resolver.resolve(id)?,
        };
        self.scroll_to(position, opts)
    }

    /// Route an activated link. Only `#fragment` hrefs are handled.
    pub fn handle_anchor(&mut self, href: &str, resolver: &impl AnchorResolver) -> AnchorOutcome {
        if self.destroyed {
            return AnchorOutcome::Ignored;
        }
        let fragment = match href.strip_prefix('#') {
            Some(f) if !f.is_empty() => f,
            _ => return AnchorOutcome::Ignored,
        };
        match resolver.resolve(fragment) {
            Some(top) => {
                let opts = ScrollToOptions {
                    offset: 0.0,
                    duration: Some(self.config.scroll_to_duration),
                    immediate: false,
                };
                match self.scroll_to(top, opts) {
                    Some(target) => AnchorOutcome::Scrolled(target),
                    None => AnchorOutcome::Ignored,
                }
            }
            None => {
                log::debug!("[scroll] no element for #{fragment}; leaving native");
                AnchorOutcome::Unresolved
            }
        }
    }

    // Start a fresh tween from wherever the virtual position is now, so an
    // interruption bends the motion instead of jumping.
    fn retarget(&mut self, target: f64, duration: f64) {
        self.state.target_position = target;
        if duration <= 0.0 || (target - self.state.virtual_position).abs() <= self.config.epsilon {
            self.state.virtual_position = target;
            self.tween = None;
            return;
        }
        self.tween = Some(Tween {
            from: self.state.virtual_position,
            to: target,
            elapsed: 0.0,
            duration,
            easing: self.config.easing,
        });
    }

    /// Advance one frame and publish the result to every observer.
    pub fn tick(&mut self, frame: &FrameTime) -> ScrollState {
        if self.destroyed {
            return self.state;
        }
        let dt = if frame.delta.is_finite() && frame.delta > 0.0 {
            frame.delta
        } else {
            0.0
        };
        let prev = self.state.virtual_position;
        if let Some(mut tw) = self.tween.take() {
            tw.elapsed += dt;
            let pos = self.clamp(tw.sample());
            let settled = tw.elapsed > 0.0 && (tw.to - pos).abs() <= self.config.epsilon;
            if tw.is_done() || settled {
                self.state.virtual_position = tw.to;
            } else {
                self.state.virtual_position = pos;
                self.tween = Some(tw);
            }
        }
        let moved = self.state.virtual_position - prev;
        self.state.velocity = if dt > 0.0 { moved / dt } else { 0.0 };
        if moved > 0.0 {
            self.direction = 1;
        } else if moved < 0.0 {
            self.direction = -1;
        }
        self.publish();
        self.state
    }

    fn publish(&mut self) {
        let event = self.event();
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }

    pub fn event(&self) -> ScrollEvent {
        ScrollEvent {
            position: self.state.virtual_position,
            target: self.state.target_position,
            velocity: self.state.velocity,
            direction: self.direction,
            progress: if self.limit > 0.0 {
                self.state.virtual_position / self.limit
            } else {
                0.0
            },
            limit: self.limit,
            is_scrolling: self.tween.is_some(),
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&ScrollEvent) + 'static) -> ObserverId {
        self.next_observer += 1;
        let id = ObserverId(self.next_observer);
        if !self.destroyed {
            self.observers.push((id, Box::new(observer)));
        }
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        before != self.observers.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Ignore input and settle where the page currently is.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.tween = None;
        self.state.target_position = self.state.virtual_position;
        self.state.velocity = 0.0;
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }

    /// Drop observers and pending motion. Safe to call more than once;
    /// returns true only the first time.
    pub fn destroy(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        log::debug!(
            "[scroll] destroy, dropping {} observers",
            self.observers.len()
        );
        self.destroyed = true;
        self.observers.clear();
        self.tween = None;
        self.state.velocity = 0.0;
        true
    }

    #[inline]
    fn clamp(&self, p: f64) -> f64 {
        p.clamp(0.0, self.limit)
    }
}

#[inline]
fn sanitize_limit(limit: f64) -> f64 {
    if limit.is_finite() && limit > 0.0 {
        limit
    } else {
        0.0
    }
}
