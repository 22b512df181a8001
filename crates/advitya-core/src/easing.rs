/// Timing curves. All map progress `t` in [0, 1] to eased progress; input
/// outside that range is clamped first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// `min(1, 1.001 - 2^(-10t))`, the smooth-scroll curve.
    ExpoOut,
    CubicBezier(f64, f64, f64, f64),
}

/// Entrance curve used by the hero title.
pub const EASE_OUT_EXPO_BEZIER: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::ExpoOut => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    #[inline]
    pub fn apply_f32(self, t: f32) -> f32 {
        self.apply(t as f64) as f32
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseOut
    }
}

// CSS-style bezier with endpoints (0,0) and (1,1): solve x(s) = t, return y(s).
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let bez = |a: f64, b: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let slope = |a: f64, b: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    // Newton first, bisection when the slope flattens out.
    let mut s = t;
    for _ in 0..8 {
        let err = bez(x1, x2, s) - t;
        if err.abs() < 1e-7 {
            return bez(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }
    let (mut lo, mut hi) = (0.0, 1.0);
    s = t;
    for _ in 0..40 {
        let x = bez(x1, x2, s);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bez(y1, y2, s)
}
