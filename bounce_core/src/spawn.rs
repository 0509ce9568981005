use glam::Vec2;
use rand::Rng;
use std::sync::Arc;

use crate::{Bitmap, Bounds, GameRng, Params, PhysicsObject};

/// Build `count` extra objects cycling through `bitmaps`, placed fully inside
/// `bounds` with random per-axis speeds and directions
pub fn scatter(
    rng: &mut GameRng,
    bounds: &Bounds,
    bitmaps: &[Arc<Bitmap>],
    count: usize,
) -> Vec<PhysicsObject> {
    if bitmaps.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|i| {
            let bitmap = bitmaps[i % bitmaps.len()].clone();
            let room = (bounds.size() - bitmap.size()).max(Vec2::ZERO);
            let pos = Vec2::new(
                rng.0.gen_range(0.0..=room.x),
                rng.0.gen_range(0.0..=room.y),
            );
            let vel = Vec2::new(random_speed(rng), random_speed(rng));
            PhysicsObject::new(bitmap, pos, vel)
        })
        .collect()
}

fn random_speed(rng: &mut GameRng) -> f32 {
    let speed = rng
        .0
        .gen_range(Params::SCATTER_MIN_SPEED..=Params::SCATTER_MAX_SPEED);
    if rng.0.gen_bool(0.5) {
        speed
    } else {
        -speed
    }
}
