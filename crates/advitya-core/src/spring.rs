use crate::constants::*;
use crate::error::MotionError;
use crate::pointer::PointerOffset;

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl SpringConfig {
    pub const HERO_PARALLAX: SpringConfig = SpringConfig {
        stiffness: HERO_SPRING_STIFFNESS,
        damping: HERO_SPRING_DAMPING,
        mass: SPRING_MASS,
        rest_delta: SPRING_REST_DELTA,
        rest_speed: SPRING_REST_SPEED,
    };

    pub const CARD_TILT: SpringConfig = SpringConfig {
        stiffness: CARD_SPRING_STIFFNESS,
        damping: CARD_SPRING_DAMPING,
        mass: SPRING_MASS,
        rest_delta: SPRING_REST_DELTA,
        rest_speed: SPRING_REST_SPEED,
    };

    pub fn new(stiffness: f32, damping: f32) -> Result<Self, MotionError> {
        let cfg = Self {
            stiffness,
            damping,
            ..Self::default()
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_mass(mut self, mass: f32) -> Result<Self, MotionError> {
        self.mass = mass;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        let positive = |field, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(MotionError::InvalidSpring {
                    field,
                    requirement: "positive",
                    value,
                })
            }
        };
        positive("stiffness", self.stiffness)?;
        positive("mass", self.mass)?;
        positive("rest_delta", self.rest_delta)?;
        positive("rest_speed", self.rest_speed)?;
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(MotionError::InvalidSpring {
                field: "damping",
                requirement: "non-negative",
                value: self.damping,
            });
        }
        Ok(())
    }

    /// Damping ratio; 1.0 is critical, below that the spring overshoots.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::HERO_PARALLAX
    }
}

/// One smoothed scalar signal.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    target: f32,
    config: SpringConfig,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self::at(config, 0.0)
    }

    /// A spring already at rest on `value`.
    pub fn at(config: SpringConfig, value: f32) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Returns false (and keeps the old target) for non-finite input.
    pub fn set_target(&mut self, target: f32) -> bool {
        if !target.is_finite() {
            log::warn!("[spring] rejected non-finite target {target}");
            return false;
        }
        self.target = target;
        true
    }

    /// Teleport to `value` with no residual motion.
    pub fn jump(&mut self, value: f32) {
        if value.is_finite() {
            self.position = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Returns true while still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        if !(dt.is_finite() && dt > 0.0) || self.is_at_rest() {
            return !self.is_at_rest();
        }
        let (x, v) = damped_step(
            &self.config,
            (self.position - self.target) as f64,
            self.velocity as f64,
            dt as f64,
        );
        let x = x as f32;
        let v = v as f32;
        if !x.is_finite() || !v.is_finite() {
            // Cannot happen with a validated config; recover by settling.
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        if x.abs() < self.config.rest_delta && v.abs() < self.config.rest_speed {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        self.position = self.target + x;
        self.velocity = v;
        true
    }
}

/// Exact solution of `m x'' + c x' + k x = 0` after `t` seconds, starting
/// from displacement `x0` and velocity `v0`.
fn damped_step(cfg: &SpringConfig, x0: f64, v0: f64, t: f64) -> (f64, f64) {
    let k = cfg.stiffness as f64;
    let c = cfg.damping as f64;
    let m = cfg.mass as f64;
    let omega = (k / m).sqrt();
    let zeta = c / (2.0 * (k * m).sqrt());

    if (zeta - 1.0).abs() < 1e-6 {
        let b = v0 + omega * x0;
        let decay = (-omega * t).exp();
        let x = decay * (x0 + b * t);
        let v = decay * (v0 - omega * b * t);
        (x, v)
    } else if zeta < 1.0 {
        let wd = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let (sin, cos) = (wd * t).sin_cos();
        let x = decay * (x0 * cos + (v0 + zeta * omega * x0) / wd * sin);
        let v = decay * (v0 * cos - (omega * omega * x0 + zeta * omega * v0) / wd * sin);
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c1 = (v0 - r2 * x0) / (r1 - r2);
        let c2 = x0 - c1;
        let e1 = (r1 * t).exp();
        let e2 = (r2 * t).exp();
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}

/// Two springs sharing a config, for X/Y signals.
#[derive(Clone, Copy, Debug)]
pub struct SpringPair {
    pub x: Spring,
    pub y: Spring,
}

impl SpringPair {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(config),
            y: Spring::new(config),
        }
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn step(&mut self, dt: f32) -> bool {
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }

    #[inline]
    pub fn position(&self) -> [f32; 2] {
        [self.x.position, self.y.position]
    }
}

/// Clamped linear map of `value` from `input` onto `output`.
///
/// A reversed output range (e.g. `[30, -30]`) inverts the direction; an
/// empty input range maps everything to `output[0]`.
#[inline]
pub fn interpolate(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let span = input[1] - input[0];
    if span == 0.0 || !value.is_finite() {
        return output[0];
    }
    let t = ((value - input[0]) / span).clamp(0.0, 1.0);
    output[0] + (output[1] - output[0]) * t
}

/// Hero background layer: the spring smooths the raw offset, then the
/// result maps to an inverted pixel shift.
#[derive(Clone, Copy, Debug)]
pub struct ParallaxLayer {
    springs: SpringPair,
}

impl ParallaxLayer {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            springs: SpringPair::new(config),
        }
    }

    pub fn set_pointer(&mut self, offset: PointerOffset) {
        self.springs.set_target(offset.x, offset.y);
    }

    pub fn step(&mut self, dt: f32) -> bool {
        self.springs.step(dt)
    }

    /// Translation in pixels.
    pub fn translation(&self) -> [f32; 2] {
        let [x, y] = self.springs.position();
        let range = [-POINTER_OFFSET_MAX, POINTER_OFFSET_MAX];
        let px = [HERO_PARALLAX_PX, -HERO_PARALLAX_PX];
        [interpolate(x, range, px), interpolate(y, range, px)]
    }
}

/// Event card: tilt angles are mapped from the pointer first and then
/// sprung, the glow centre is sprung in normalized space.
#[derive(Clone, Copy, Debug)]
pub struct TiltCard {
    tilt: SpringPair,
    glow: SpringPair,
}

impl TiltCard {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            tilt: SpringPair::new(config),
            glow: SpringPair::new(config),
        }
    }

    pub fn set_pointer(&mut self, offset: PointerOffset) {
        let range = [-POINTER_OFFSET_MAX, POINTER_OFFSET_MAX];
        let rotate_x = interpolate(offset.y, range, [CARD_TILT_DEG, -CARD_TILT_DEG]);
        let rotate_y = interpolate(offset.x, range, [-CARD_TILT_DEG, CARD_TILT_DEG]);
        self.tilt.set_target(rotate_x, rotate_y);
        self.glow.set_target(offset.x, offset.y);
    }

    pub fn step(&mut self, dt: f32) -> bool {
        let tilting = self.tilt.step(dt);
        let glowing = self.glow.step(dt);
        tilting || glowing
    }

    /// `[rotate_x, rotate_y]` in degrees.
    pub fn rotation(&self) -> [f32; 2] {
        self.tilt.position()
    }

    /// Glow centre as percentages of the card box.
    pub fn glow_position(&self) -> [f32; 2] {
        let [x, y] = self.glow.position();
        let range = [-POINTER_OFFSET_MAX, POINTER_OFFSET_MAX];
        [
            interpolate(x, range, [0.0, 100.0]),
            interpolate(y, range, [0.0, 100.0]),
        ]
    }
}
