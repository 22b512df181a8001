//! Looping decorative motion and the reduced-motion switch.
//!
//! Everything here is a pure function of elapsed time. Under reduced motion
//! the [`AmbientClock`] stays at zero, so loops render their first frame and
//! never advance; entrance transitions run on their own clocks and are not
//! affected.

use crate::constants::*;
use crate::easing::Easing;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Platform accessibility preference, read once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    pub reduced: bool,
}

impl MotionPreference {
    pub const FULL: MotionPreference = MotionPreference { reduced: false };
    pub const REDUCED: MotionPreference = MotionPreference { reduced: true };
}

/// Time source for decorative loops.
///
/// Accumulates in `f64`; [`AmbientClock::elapsed`] folds long uptimes back
/// into one [`AMBIENT_CYCLE_SEC`] window so loop phases stay precise in `f32`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AmbientClock {
    elapsed: f64,
    frozen: bool,
}

impl AmbientClock {
    pub fn new(pref: MotionPreference) -> Self {
        Self {
            elapsed: 0.0,
            frozen: pref.reduced,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if self.frozen || !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.elapsed += f64::from(dt);
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        if self.elapsed < AMBIENT_CYCLE_SEC {
            self.elapsed as f32
        } else {
            (AMBIENT_CYCLE_SEC + self.elapsed % AMBIENT_CYCLE_SEC) as f32
        }
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

/// Evaluate evenly spaced keyframes at `progress` in [0, 1], easing each
/// segment independently.
pub fn keyframes(values: &[f32], progress: f32, easing: Easing) -> f32 {
    match values.len() {
        0 => 0.0,
        1 => values[0],
        n => {
            let p = if progress.is_finite() {
                progress.clamp(0.0, 1.0)
            } else {
                0.0
            };
            let segments = (n - 1) as f32;
            let scaled = p * segments;
            let i = (scaled.floor() as usize).min(n - 2);
            let local = easing.apply_f32(scaled - i as f32);
            values[i] + (values[i + 1] - values[i]) * local
        }
    }
}

/// Progress through a repeating loop of `period` seconds that starts after
/// `delay`. Before the delay the loop sits at 0.
#[inline]
pub fn loop_progress(elapsed: f32, period: f32, delay: f32) -> f32 {
    let t = elapsed - delay;
    if period <= 0.0 || !t.is_finite() || t <= 0.0 {
        return 0.0;
    }
    (t % period) / period
}

/// One-shot progress; used for the intro of looping elements.
#[inline]
fn once_progress(elapsed: f32, duration: f32, delay: f32) -> f32 {
    let t = elapsed - delay;
    if duration <= 0.0 {
        return if t >= 0.0 { 1.0 } else { 0.0 };
    }
    (t / duration).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatFrame {
    pub translate_y: f32,
    pub rotate_deg: f32,
    pub opacity: f32,
    pub scale: f32,
}

/// Hero shape: bobs up and down and spins; fades/scales in once.
///
/// The intro is an entrance, so it uses `intro_elapsed` (real time) while the
/// loops use the ambient clock.
pub fn floating_shape_frame(ambient: &AmbientClock, intro_elapsed: f32, delay: f32) -> FloatFrame {
    let t = ambient.elapsed();
    let bob = loop_progress(t, SHAPE_BOB_PERIOD_SEC, delay);
    let spin = loop_progress(t, SHAPE_SPIN_PERIOD_SEC, delay);
    let intro = once_progress(intro_elapsed, SHAPE_INTRO_SEC, delay);
    FloatFrame {
        translate_y: keyframes(&[0.0, -SHAPE_BOB_RISE_PX, 0.0], bob, Easing::EaseInOut),
        rotate_deg: keyframes(&[0.0, 180.0, 360.0], spin, Easing::Linear),
        opacity: SHAPE_RESTING_OPACITY * intro,
        scale: intro,
    }
}

/// Section decoration: gentle bob plus a left/right sway.
pub fn decoration_frame(ambient: &AmbientClock, delay: f32) -> FloatFrame {
    let p = loop_progress(ambient.elapsed(), DECORATION_PERIOD_SEC, delay);
    FloatFrame {
        translate_y: keyframes(&[0.0, -DECORATION_RISE_PX, 0.0], p, Easing::EaseInOut),
        rotate_deg: keyframes(
            &[
                0.0,
                DECORATION_SWAY_DEG,
                0.0,
                -DECORATION_SWAY_DEG,
                0.0,
            ],
            p,
            Easing::EaseInOut,
        ),
        opacity: 1.0,
        scale: 1.0,
    }
}

/// A drifting hero particle; placement is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Percent of the hero box.
    pub left_pct: f32,
    pub top_pct: f32,
    pub size_px: f32,
    pub delay: f32,
}

impl Particle {
    pub fn frame(&self, ambient: &AmbientClock) -> FloatFrame {
        let p = loop_progress(ambient.elapsed(), PARTICLE_PERIOD_SEC, self.delay);
        FloatFrame {
            translate_y: keyframes(&[0.0, -PARTICLE_RISE_PX], p, Easing::EaseOut),
            rotate_deg: 0.0,
            opacity: keyframes(&[0.0, 0.8, 0.0], p, Easing::EaseOut),
            scale: keyframes(&[1.0, 0.0], p, Easing::EaseOut),
        }
    }
}

/// Deterministic particle field so reloads look the same.
pub fn scatter_particles(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| Particle {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            size_px: rng.gen_range(2.0..6.0),
            delay: i as f32 * PARTICLE_STAGGER_SEC,
        })
        .collect()
}

/// Footer line: background position sweeps from 200% to -200%.
pub fn gradient_line_position(ambient: &AmbientClock) -> f32 {
    let p = loop_progress(ambient.elapsed(), GRADIENT_LINE_PERIOD_SEC, 0.0);
    keyframes(&[200.0, -200.0], p, Easing::Linear)
}

/// Title glow opacity, breathing between 0.7 and 1.
pub fn glow_pulse(ambient: &AmbientClock) -> f32 {
    let p = loop_progress(ambient.elapsed(), GLOW_PULSE_PERIOD_SEC, 0.0);
    keyframes(&[1.0, 0.7, 1.0], p, Easing::EaseInOut)
}
