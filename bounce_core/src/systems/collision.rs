use crate::{Events, PhysicsObject, Schedule};
use hecs::World;

/// Run the scheduled collision responses in order.
///
/// Each pair only inverts the receiver. Positions do not change during the
/// sweep, so every overlap test sees the post-movement positions of the frame.
pub fn apply_collision_responses(world: &mut World, schedule: &Schedule, events: &mut Events) {
    for &(receiver, other) in &schedule.pairs {
        // Snapshot the other object so the receiver can be borrowed mutably
        let other_obj = match world.get::<&PhysicsObject>(other) {
            Ok(obj) => (*obj).clone(),
            Err(_) => {
                log::warn!("Collision pair references missing entity {other:?}");
                continue;
            }
        };

        let Ok(obj) = world.query_one_mut::<&mut PhysicsObject>(receiver) else {
            log::warn!("Collision pair references missing entity {receiver:?}");
            continue;
        };

        if obj.apply_collision_response(&other_obj) {
            events.collision_responses += 1;
            log::trace!(
                "{} hit {}, velocity now {}",
                obj.bitmap().name(),
                other_obj.bitmap().name(),
                obj.velocity()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_object, Bitmap};
    use glam::Vec2;
    use std::sync::Arc;

    fn velocity(world: &World, entity: hecs::Entity) -> Vec2 {
        world.get::<&PhysicsObject>(entity).unwrap().velocity()
    }

    fn square(name: &str) -> Arc<Bitmap> {
        Arc::new(Bitmap::solid(name, 10, 10).unwrap())
    }

    #[test]
    fn test_both_directions_flip_each_receiver_once() {
        let mut world = World::new();
        let a = create_object(&mut world, square("a"), Vec2::ZERO, Vec2::new(1.0, 1.0));
        let b = create_object(&mut world, square("b"), Vec2::new(5.0, 5.0), Vec2::new(-2.0, 0.0));
        let schedule = Schedule::with_all_ordered_pairs(vec![a, b]);
        let mut events = Events::new();

        apply_collision_responses(&mut world, &schedule, &mut events);

        assert_eq!(velocity(&world, a), Vec2::new(-1.0, -1.0));
        assert_eq!(velocity(&world, b), Vec2::new(2.0, 0.0));
        assert_eq!(events.collision_responses, 2);
    }

    #[test]
    fn test_demo_sequence_double_flips_with_three_overlapping() {
        let mut world = World::new();
        let a = create_object(&mut world, square("a"), Vec2::ZERO, Vec2::new(1.0, 0.0));
        let b = create_object(&mut world, square("b"), Vec2::new(2.0, 0.0), Vec2::new(0.0, 1.0));
        let c = create_object(&mut world, square("c"), Vec2::new(4.0, 0.0), Vec2::new(1.0, 1.0));
        let schedule = Schedule::demo(a, b, c);
        let mut events = Events::new();

        apply_collision_responses(&mut world, &schedule, &mut events);

        // Each object is a receiver twice in the demo sequence, so every
        // inversion is cancelled within the same frame
        assert_eq!(events.collision_responses, 6);
        assert_eq!(velocity(&world, a), Vec2::new(1.0, 0.0));
        assert_eq!(velocity(&world, b), Vec2::new(0.0, 1.0));
        assert_eq!(velocity(&world, c), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_repeated_pair_flips_receiver_back() {
        let mut world = World::new();
        let a = create_object(&mut world, square("a"), Vec2::ZERO, Vec2::new(1.0, 2.0));
        let b = create_object(&mut world, square("b"), Vec2::new(5.0, 5.0), Vec2::new(-3.0, 0.0));
        let mut schedule = Schedule::new();
        schedule.push(a);
        schedule.push(b);
        schedule.push_pair(a, b);
        let mut events = Events::new();

        apply_collision_responses(&mut world, &schedule, &mut events);
        assert_eq!(velocity(&world, a), Vec2::new(-1.0, -2.0));
        assert_eq!(velocity(&world, b), Vec2::new(-3.0, 0.0), "Only listed receivers flip");

        schedule.push_pair(a, b);
        apply_collision_responses(&mut world, &schedule, &mut events);
        assert_eq!(velocity(&world, a), Vec2::new(-1.0, -2.0), "Two flips cancel");
        assert_eq!(events.collision_responses, 3);
    }

    #[test]
    fn test_separated_objects_keep_velocity() {
        let mut world = World::new();
        let a = create_object(&mut world, square("a"), Vec2::ZERO, Vec2::new(1.0, 1.0));
        let b = create_object(&mut world, square("b"), Vec2::new(50.0, 50.0), Vec2::new(-2.0, 3.0));
        let schedule = Schedule::with_all_ordered_pairs(vec![a, b]);
        let mut events = Events::new();

        apply_collision_responses(&mut world, &schedule, &mut events);

        assert_eq!(velocity(&world, a), Vec2::new(1.0, 1.0));
        assert_eq!(velocity(&world, b), Vec2::new(-2.0, 3.0));
        assert_eq!(events.collision_responses, 0);
    }

    #[test]
    fn test_despawned_pair_member_is_skipped() {
        let mut world = World::new();
        let a = create_object(&mut world, square("a"), Vec2::ZERO, Vec2::new(1.0, 1.0));
        let b = create_object(&mut world, square("b"), Vec2::new(5.0, 5.0), Vec2::ZERO);
        let schedule = Schedule::with_all_ordered_pairs(vec![a, b]);
        world.despawn(b).unwrap();
        let mut events = Events::new();

        apply_collision_responses(&mut world, &schedule, &mut events);

        assert_eq!(velocity(&world, a), Vec2::new(1.0, 1.0));
        assert_eq!(events.collision_responses, 0);
    }
}
