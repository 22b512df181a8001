//! One-shot "animate when scrolled into view" triggers.

use crate::constants::*;
use crate::easing::Easing;
use crate::error::MotionError;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Axis-aligned box in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Shrink by `margin` on every side (negative grows). Never inverts.
    pub fn inset(&self, margin: f64) -> Bounds {
        let w = (self.width - 2.0 * margin).max(0.0);
        let h = (self.height - 2.0 * margin).max(0.0);
        Bounds {
            left: self.left + (self.width - w) / 2.0,
            top: self.top + (self.height - h) / 2.0,
            width: w,
            height: h,
        }
    }

    fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// Fraction of `element` inside `viewport`, in [0, 1].
///
/// Degenerate elements (zero width or height) count as fully visible when
/// their box touches the viewport and invisible otherwise.
pub fn visibility_ratio(element: &Bounds, viewport: &Bounds) -> f64 {
    if !element.is_finite() || !viewport.is_finite() {
        return 0.0;
    }
    let ix = element.right().min(viewport.right()) - element.left.max(viewport.left);
    let iy = element.bottom().min(viewport.bottom()) - element.top.max(viewport.top);
    if ix < 0.0 || iy < 0.0 {
        return 0.0;
    }
    let area = element.width.max(0.0) * element.height.max(0.0);
    if area <= 0.0 {
        return 1.0;
    }
    ((ix * iy) / area).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Pixels the viewport is shrunk by before testing, so elements must be
    /// this far inside to count.
    pub margin: f64,
    /// Required visible fraction; 0 means any overlap.
    pub amount: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            margin: REVEAL_MARGIN_PX,
            amount: 0.0,
        }
    }
}

impl RevealOptions {
    /// No inset, for section headers and footer columns.
    pub const EDGE: RevealOptions = RevealOptions {
        margin: 0.0,
        amount: 0.0,
    };

    pub fn validate(&self) -> Result<(), MotionError> {
        if !self.margin.is_finite() {
            return Err(MotionError::InvalidReveal {
                field: "margin",
                value: self.margin,
            });
        }
        if !self.amount.is_finite() || !(0.0..=1.0).contains(&self.amount) {
            return Err(MotionError::InvalidReveal {
                field: "amount",
                value: self.amount,
            });
        }
        Ok(())
    }

    fn is_entered(&self, element: &Bounds, viewport: &Bounds) -> bool {
        let ratio = visibility_ratio(element, &viewport.inset(self.margin));
        if self.amount <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.amount
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unobserved,
    Observed,
    /// Terminal.
    Entered,
}

/// Supplies current document-space bounds of observed elements.
pub trait ElementGeometry {
    fn bounds(&self, id: RevealId) -> Option<Bounds>;
}

impl<F> ElementGeometry for F
where
    F: Fn(RevealId) -> Option<Bounds>,
{
    fn bounds(&self, id: RevealId) -> Option<Bounds> {
        self(id)
    }
}

#[derive(Clone, Debug)]
struct RevealRecord {
    options: RevealOptions,
    state: RevealState,
}

#[derive(Clone, Debug, Default)]
pub struct RevealTrigger {
    records: FnvHashMap<RevealId, RevealRecord>,
    // Sorted so sampling order (and the returned list) is deterministic.
    active: Vec<RevealId>,
}

impl RevealTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `id`. Re-observing an entered element is a no-op;
    /// re-observing a pending one replaces its options.
    pub fn observe(&mut self, id: RevealId, options: RevealOptions) -> RevealState {
        let record = self.records.entry(id).or_insert(RevealRecord {
            options,
            state: RevealState::Unobserved,
        });
        match record.state {
            RevealState::Entered => RevealState::Entered,
            _ => {
                record.options = options;
                record.state = RevealState::Observed;
                if let Err(pos) = self.active.binary_search(&id) {
                    self.active.insert(pos, id);
                }
                RevealState::Observed
            }
        }
    }

    pub fn state(&self, id: RevealId) -> RevealState {
        self.records
            .get(&id)
            .map(|r| r.state)
            .unwrap_or(RevealState::Unobserved)
    }

    #[inline]
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.state(id) == RevealState::Entered
    }

    /// Elements still waiting to enter.
    pub fn pending(&self) -> usize {
        self.active.len()
    }

    /// Sample every pending element against `viewport` and return those that
    /// entered on this call. Elements the geometry cannot locate stay pending.
    pub fn update(
        &mut self,
        viewport: &Bounds,
        geometry: &impl ElementGeometry,
    ) -> SmallVec<[RevealId; 4]> {
        let mut entered = SmallVec::new();
        let records = &mut self.records;
        self.active.retain(|id| {
            let Some(record) = records.get_mut(id) else {
                return false;
            };
            let Some(bounds) = geometry.bounds(*id) else {
                return true;
            };
            if record.options.is_entered(&bounds, viewport) {
                record.state = RevealState::Entered;
                entered.push(*id);
                false
            } else {
                true
            }
        });
        if !entered.is_empty() {
            log::debug!("[reveal] entered {:?}", entered.as_slice());
        }
        entered
    }

    /// Mark `id` entered without sampling (e.g. content above the fold at
    /// load, or when observation is unavailable).
    pub fn force_reveal(&mut self, id: RevealId) -> bool {
        let record = self.records.entry(id).or_insert(RevealRecord {
            options: RevealOptions::default(),
            state: RevealState::Unobserved,
        });
        if record.state == RevealState::Entered {
            return false;
        }
        record.state = RevealState::Entered;
        self.active.retain(|a| *a != id);
        true
    }
}

/// One rendered frame of an entrance transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
    /// Eased progress in [0, 1]; 1 once finished.
    pub progress: f32,
}

/// Fade-and-rise played once when an element is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
    pub from_opacity: f32,
    pub to_opacity: f32,
    pub from_offset_y: f32,
    pub from_scale: f32,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: CARD_ENTRANCE_DURATION_SEC,
            easing: Easing::EaseOut,
            from_opacity: 0.0,
            to_opacity: 1.0,
            from_offset_y: SECTION_ENTRANCE_OFFSET_PX,
            from_scale: 1.0,
        }
    }
}

impl Entrance {
    pub fn rise(offset_y: f32, duration: f32, delay: f32) -> Self {
        Self {
            delay,
            duration,
            from_offset_y: offset_y,
            ..Self::default()
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_scale(mut self, from_scale: f32) -> Self {
        self.from_scale = from_scale;
        self
    }

    pub fn with_opacity(mut self, to_opacity: f32) -> Self {
        self.to_opacity = to_opacity;
        self
    }

    /// Seconds from trigger until the final frame.
    #[inline]
    pub fn total(&self) -> f32 {
        self.delay.max(0.0) + self.duration.max(0.0)
    }

    /// `elapsed` is seconds since the element was revealed.
    pub fn sample(&self, elapsed: f32) -> EntranceFrame {
        let local = if elapsed.is_finite() {
            elapsed - self.delay.max(0.0)
        } else {
            0.0
        };
        let linear = if self.duration <= 0.0 {
            if local >= 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            (local / self.duration).clamp(0.0, 1.0)
        };
        let p = self.easing.apply_f32(linear);
        EntranceFrame {
            opacity: self.from_opacity + (self.to_opacity - self.from_opacity) * p,
            translate_y: self.from_offset_y * (1.0 - p),
            scale: self.from_scale + (1.0 - self.from_scale) * p,
            progress: if linear >= 1.0 { 1.0 } else { p },
        }
    }

    #[inline]
    pub fn is_complete(&self, elapsed: f32) -> bool {
        elapsed.is_finite() && elapsed >= self.total()
    }
}
