/// Motion tuning constants shared by the web frontend.
///
/// Values mirror the feel of the live site; keeping them here keeps magic
/// numbers out of the integration code.
// Hero parallax spring
pub const HERO_SPRING_STIFFNESS: f32 = 150.0;
pub const HERO_SPRING_DAMPING: f32 = 25.0;

// Event card tilt spring
pub const CARD_SPRING_STIFFNESS: f32 = 300.0;
pub const CARD_SPRING_DAMPING: f32 = 20.0;

pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.001; // distance considered "at target"
pub const SPRING_REST_SPEED: f32 = 0.01; // speed considered "at rest"

// Range over which convergence is guaranteed and tested
pub const SPRING_STIFFNESS_RANGE: [f32; 2] = [50.0, 500.0];
pub const SPRING_DAMPING_RANGE: [f32; 2] = [10.0, 60.0];

// Pointer mapping
pub const POINTER_OFFSET_MAX: f32 = 0.5; // offsets live in [-0.5, 0.5]
pub const HERO_PARALLAX_PX: f32 = 30.0; // layer shift at the hero edge (inverted)
pub const CARD_TILT_DEG: f32 = 15.0; // max card rotation on each axis
pub const CARD_CONTENT_DEPTH_PX: f32 = 30.0; // translateZ of card content

// Smooth scrolling (seconds)
pub const SCROLL_DURATION_SEC: f64 = 1.2;
pub const SCROLL_TO_DURATION_SEC: f64 = 1.5;
pub const SCROLL_WHEEL_MULTIPLIER: f64 = 1.0;
pub const SCROLL_TOUCH_MULTIPLIER: f64 = 2.0;
pub const SCROLL_EPSILON_PX: f64 = 0.5;

// Reveal
pub const REVEAL_MARGIN_PX: f64 = 100.0; // viewport shrunk by this much on each side

// Entrance transitions
pub const CARD_ENTRANCE_OFFSET_PX: f32 = 100.0;
pub const CARD_ENTRANCE_DURATION_SEC: f32 = 0.4;
pub const CARD_ENTRANCE_STAGGER_SEC: f32 = 0.1;
pub const SECTION_ENTRANCE_OFFSET_PX: f32 = 30.0;
pub const SOCIAL_ENTRANCE_BASE_DELAY_SEC: f32 = 0.2;
pub const SOCIAL_ENTRANCE_STAGGER_SEC: f32 = 0.03;

// Decorative loops (seconds)
pub const SHAPE_BOB_PERIOD_SEC: f32 = 6.0;
pub const SHAPE_BOB_RISE_PX: f32 = 30.0;
pub const SHAPE_SPIN_PERIOD_SEC: f32 = 20.0;
pub const SHAPE_INTRO_SEC: f32 = 0.5;
pub const SHAPE_RESTING_OPACITY: f32 = 0.6;
pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_PERIOD_SEC: f32 = 4.0;
pub const PARTICLE_STAGGER_SEC: f32 = 0.3;
pub const PARTICLE_RISE_PX: f32 = 100.0;
pub const PARTICLE_SEED: u64 = 2026;
pub const DECORATION_PERIOD_SEC: f32 = 5.0;
pub const DECORATION_RISE_PX: f32 = 15.0;
pub const DECORATION_SWAY_DEG: f32 = 5.0;
pub const GRADIENT_LINE_PERIOD_SEC: f32 = 3.0;
pub const GLOW_PULSE_PERIOD_SEC: f32 = 2.0;
// Common multiple of every loop period above; longer than any loop delay.
pub const AMBIENT_CYCLE_SEC: f64 = 60.0;
