use crate::constants::POINTER_OFFSET_MAX;
use glam::Vec2;

/// Bounding box of a tracked surface in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.left.is_finite()
            && self.top.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[inline]
    fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Origin-centred pointer position over a surface, each axis in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub const NEUTRAL: PointerOffset = PointerOffset { x: 0.0, y: 0.0 };
}

impl From<Vec2> for PointerOffset {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Map absolute pointer coordinates to a centred offset over `rect`.
///
/// Degenerate geometry or non-finite coordinates yield the neutral offset.
/// Coordinates outside the surface (pointer capture, stale rects) are
/// clamped so consumers never see values outside the declared domain.
#[inline]
pub fn pointer_offset(rect: &SurfaceRect, px: f32, py: f32) -> PointerOffset {
    if !rect.has_area() || !px.is_finite() || !py.is_finite() {
        return PointerOffset::NEUTRAL;
    }
    let uv = (Vec2::new(px, py) - rect.origin()) / rect.size() - Vec2::splat(0.5);
    uv.clamp(
        Vec2::splat(-POINTER_OFFSET_MAX),
        Vec2::splat(POINTER_OFFSET_MAX),
    )
    .into()
}

/// Current pointer offset of one surface.
///
/// Geometry is supplied on every event rather than cached, so a resize only
/// requires the caller to read a fresh bounding rect.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    offset: PointerOffset,
    hovered: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_move(&mut self, rect: &SurfaceRect, px: f32, py: f32) -> PointerOffset {
        self.offset = pointer_offset(rect, px, py);
        self.hovered = rect.has_area();
        self.offset
    }

    pub fn on_leave(&mut self) {
        self.offset = PointerOffset::NEUTRAL;
        self.hovered = false;
    }

    #[inline]
    pub fn offset(&self) -> PointerOffset {
        self.offset
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}
