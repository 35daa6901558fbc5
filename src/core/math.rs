// Math utilities and helper types

use glam::Vec2;

/// Axis-aligned integer rectangle in texture pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl IntRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge, `None` if it does not fit in a u32
    pub fn right(&self) -> Option<u32> {
        self.x.checked_add(self.width)
    }

    /// Exclusive bottom edge, `None` if it does not fit in a u32
    pub fn bottom(&self) -> Option<u32> {
        self.y.checked_add(self.height)
    }

    /// Check whether the rectangle lies entirely inside a `width` x `height` area
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        matches!(
            (self.right(), self.bottom()),
            (Some(r), Some(b)) if r <= width && b <= height
        )
    }

    /// Normalized texture coordinates `(uv_min, uv_max)` for a texture of the given size
    pub fn uv_bounds(&self, texture_width: u32, texture_height: u32) -> (Vec2, Vec2) {
        let tw = texture_width.max(1) as f32;
        let th = texture_height.max(1) as f32;

        let uv_min = Vec2::new(self.x as f32 / tw, self.y as f32 / th);
        let uv_max = Vec2::new(
            (self.x + self.width) as f32 / tw,
            (self.y + self.height) as f32 / th,
        );

        (uv_min, uv_max)
    }
}

impl std::fmt::Display for IntRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}
