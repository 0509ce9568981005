use glam::Vec2;
use std::sync::Arc;

use crate::bitmap::Bitmap;

/// Rendering collaborator the simulation draws through
pub trait Canvas {
    /// Draw `bitmap` with its top-left corner at `pos` (pixels, y down)
    fn draw_bitmap(&mut self, bitmap: &Arc<Bitmap>, pos: Vec2);
}
