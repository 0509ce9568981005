use glam::Vec2;
use std::sync::Arc;

use crate::bitmap::{bitmap_collision, Bitmap};
use crate::bounds::Bounds;
use crate::canvas::Canvas;

/// A sprite that moves, bounces off the walls and bounces off other sprites
#[derive(Debug, Clone)]
pub struct PhysicsObject {
    bitmap: Arc<Bitmap>,
    pos: Vec2, // top-left corner of the bitmap
    vel: Vec2, // pixels per frame
}

impl PhysicsObject {
    pub fn new(bitmap: Arc<Bitmap>, pos: Vec2, vel: Vec2) -> Self {
        Self { bitmap, pos, vel }
    }

    pub fn bitmap(&self) -> &Arc<Bitmap> {
        &self.bitmap
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Advance one frame, then reverse any axis whose edge is past the bounds.
    ///
    /// The position is never pulled back inside: an object can overshoot a
    /// wall by one frame of travel before the reversed velocity brings it back.
    pub fn update(&mut self, bounds: &Bounds) {
        self.pos += self.vel;

        let size = self.bitmap.size();
        if bounds.exceeds_x(self.pos, size) {
            self.vel.x = -self.vel.x;
        }
        if bounds.exceeds_y(self.pos, size) {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_bitmap(&self.bitmap, self.pos);
    }

    /// Pixel-accurate overlap with `other` at both objects' current positions
    pub fn check_collision(&self, other: &PhysicsObject) -> bool {
        bitmap_collision(&self.bitmap, self.pos, &other.bitmap, other.pos)
    }

    /// Invert this object's velocity if it currently overlaps `other`.
    ///
    /// Only the receiver changes. Returns whether the velocity was inverted.
    pub fn apply_collision_response(&mut self, other: &PhysicsObject) -> bool {
        if !self.check_collision(other) {
            return false;
        }
        self.vel = -self.vel;
        true
    }
}
