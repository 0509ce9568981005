use crate::{Bounds, Events, PhysicsObject, Schedule};
use hecs::World;

/// Move every object in roster order and reflect off the bounds
pub fn update_objects(world: &mut World, bounds: &Bounds, schedule: &Schedule, events: &mut Events) {
    for &entity in &schedule.order {
        let Ok(obj) = world.query_one_mut::<&mut PhysicsObject>(entity) else {
            log::warn!("Roster entity {entity:?} has no physics object");
            continue;
        };

        let before = obj.velocity();
        obj.update(bounds);
        let after = obj.velocity();

        if after.x != before.x {
            events.wall_bounces_x += 1;
            log::trace!("{} bounced off a side wall at {}", obj.bitmap().name(), obj.position());
        }
        if after.y != before.y {
            events.wall_bounces_y += 1;
            log::trace!("{} bounced off a top/bottom wall at {}", obj.bitmap().name(), obj.position());
        }
    }
}
