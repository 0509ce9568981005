use glam::Vec2;

/// Drawable region the sprites bounce inside, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when a box of `size` at `pos` pokes out on the left or right edge
    pub fn exceeds_x(&self, pos: Vec2, size: Vec2) -> bool {
        pos.x < 0.0 || pos.x + size.x > self.width
    }

    /// True when a box of `size` at `pos` pokes out on the top or bottom edge
    pub fn exceeds_y(&self, pos: Vec2, size: Vec2) -> bool {
        pos.y < 0.0 || pos.y + size.y > self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl From<(u32, u32)> for Bounds {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f32, height as f32)
    }
}
