pub mod bitmap;
pub mod bounds;
pub mod canvas;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;

pub use bitmap::*;
pub use bounds::*;
pub use canvas::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use schedule::*;
pub use spawn::*;

use hecs::World;
use std::sync::Arc;
use systems::*;

/// Run one frame of the simulation.
///
/// Every object moves before any collision is checked, so the responses see
/// post-movement positions. Drawing is separate, see [`draw_objects`].
pub fn step(
    world: &mut World,
    bounds: &Bounds,
    schedule: &Schedule,
    events: &mut Events,
    clock: &mut FrameClock,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Integrate positions and reflect off the walls
    update_objects(world, bounds, schedule, events);

    // 2. Pairwise collision responses in scheduled order
    apply_collision_responses(world, schedule, events);

    clock.tick();
}

/// Helper to create a physics object entity
pub fn create_object(
    world: &mut World,
    bitmap: Arc<Bitmap>,
    pos: glam::Vec2,
    vel: glam::Vec2,
) -> hecs::Entity {
    world.spawn((PhysicsObject::new(bitmap, pos, vel),))
}
