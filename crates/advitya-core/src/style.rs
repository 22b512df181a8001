//! Signal-to-style mapping. Each function is pure and cheap; the frame loop
//! calls them once per frame with the current signal values.

use crate::ambient::FloatFrame;
use crate::constants::CARD_CONTENT_DEPTH_PX;
use crate::reveal::EntranceFrame;
use std::fmt::Write;

/// Presentation values for one element. `None` fields are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleDescriptor {
    pub translate: Option<[f32; 2]>,
    pub translate_z: Option<f32>,
    /// Degrees about X, Y and Z.
    pub rotate: Option<[f32; 3]>,
    pub scale: Option<f32>,
    pub opacity: Option<f32>,
    /// Radial glow centre, percent of the box.
    pub glow: Option<[f32; 2]>,
    pub background_x_pct: Option<f32>,
}

impl StyleDescriptor {
    /// CSS `transform` value, or `None` when no transform field is set.
    pub fn css_transform(&self) -> Option<String> {
        if self.translate.is_none()
            && self.translate_z.is_none()
            && self.rotate.is_none()
            && self.scale.is_none()
        {
            return None;
        }
        let mut out = String::new();
        if let Some([x, y]) = self.translate {
            _ = write!(out, "translate3d({}px, {}px, 0px) ", fmt(x), fmt(y));
        }
        if let Some(z) = self.translate_z {
            _ = write!(out, "translateZ({}px) ", fmt(z));
        }
        if let Some([rx, ry, rz]) = self.rotate {
            if rx != 0.0 || ry != 0.0 {
                _ = write!(out, "rotateX({}deg) rotateY({}deg) ", fmt(rx), fmt(ry));
            }
            if rz != 0.0 {
                _ = write!(out, "rotate({}deg) ", fmt(rz));
            }
        }
        if let Some(s) = self.scale {
            _ = write!(out, "scale({}) ", fmt(s));
        }
        let trimmed = out.trim_end();
        if trimmed.is_empty() {
            Some("none".to_string())
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn css_opacity(&self) -> Option<String> {
        self.opacity.map(|o| fmt(o.clamp(0.0, 1.0)))
    }

    /// CSS `background` for the glow overlay.
    pub fn css_glow(&self) -> Option<String> {
        self.glow.map(|[x, y]| {
            format!(
                "radial-gradient(circle at {}% {}%, rgba(255,255,255,0.3) 0%, transparent 60%)",
                fmt(x),
                fmt(y)
            )
        })
    }

    pub fn css_background_position(&self) -> Option<String> {
        self.background_x_pct.map(|x| format!("{}% 0%", fmt(x)))
    }
}

// Two decimals is plenty for sub-pixel transforms and keeps strings short.
fn fmt(v: f32) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

pub fn parallax_style(translation: [f32; 2]) -> StyleDescriptor {
    StyleDescriptor {
        translate: Some(translation),
        ..Default::default()
    }
}

/// `rotation` is `[rotate_x, rotate_y]` in degrees.
pub fn tilt_style(rotation: [f32; 2]) -> StyleDescriptor {
    StyleDescriptor {
        rotate: Some([rotation[0], rotation[1], 0.0]),
        ..Default::default()
    }
}

pub fn glow_style(position_pct: [f32; 2]) -> StyleDescriptor {
    StyleDescriptor {
        glow: Some(position_pct),
        ..Default::default()
    }
}

/// Card content floats above the tilted face.
pub fn card_content_style() -> StyleDescriptor {
    StyleDescriptor {
        translate_z: Some(CARD_CONTENT_DEPTH_PX),
        ..Default::default()
    }
}

pub fn entrance_style(frame: EntranceFrame) -> StyleDescriptor {
    StyleDescriptor {
        translate: Some([0.0, frame.translate_y]),
        scale: (frame.scale != 1.0).then_some(frame.scale),
        opacity: Some(frame.opacity),
        ..Default::default()
    }
}

pub fn floating_style(frame: FloatFrame) -> StyleDescriptor {
    StyleDescriptor {
        translate: Some([0.0, frame.translate_y]),
        rotate: Some([0.0, 0.0, frame.rotate_deg]),
        scale: Some(frame.scale),
        opacity: Some(frame.opacity),
        ..Default::default()
    }
}

pub fn gradient_line_style(position_pct: f32) -> StyleDescriptor {
    StyleDescriptor {
        background_x_pct: Some(position_pct),
        ..Default::default()
    }
}
