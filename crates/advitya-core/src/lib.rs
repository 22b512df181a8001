//! Motion core for the ADVITYA 2026 landing page.
//!
//! Nothing in here touches a browser API. The web crate feeds raw pointer,
//! wheel and geometry data in and reads back transforms, scroll positions
//! and reveal flags, which keeps every piece testable on the host.

pub mod ambient;
pub mod constants;
pub mod content;
pub mod easing;
pub mod error;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod spring;
pub mod style;
pub mod ticker;

pub use ambient::*;
pub use constants::*;
pub use content::*;
pub use easing::*;
pub use error::*;
pub use pointer::*;
pub use reveal::*;
pub use scroll::*;
pub use spring::*;
pub use style::*;
pub use ticker::*;

/// Aggregated tuning for one page instance.
#[derive(Clone, Debug)]
pub struct MotionConfig {
    pub hero_spring: SpringConfig,
    pub card_spring: SpringConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealOptions,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            hero_spring: SpringConfig::HERO_PARALLAX,
            card_spring: SpringConfig::CARD_TILT,
            scroll: ScrollConfig::default(),
            reveal: RevealOptions::default(),
        }
    }
}

impl MotionConfig {
    /// Re-check every part; useful after hand-editing a preset.
    pub fn validate(&self) -> Result<(), MotionError> {
        self.hero_spring.validate()?;
        self.card_spring.validate()?;
        self.scroll.validate()?;
        self.reveal.validate()
    }
}
