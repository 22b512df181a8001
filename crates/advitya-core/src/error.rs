use thiserror::Error;

/// Configuration errors. Runtime edge cases (zero-area surfaces, unknown
/// anchors, NaN input) are not errors; they map to defined neutral values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("spring {field} must be finite and {requirement}, got {value}")]
    InvalidSpring {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },
    #[error("duration must be finite and non-negative, got {0}")]
    InvalidDuration(f64),
    #[error("{field} multiplier must be finite and positive, got {value}")]
    InvalidMultiplier { field: &'static str, value: f64 },
    #[error("reveal {field} out of range: {value}")]
    InvalidReveal { field: &'static str, value: f64 },
}
