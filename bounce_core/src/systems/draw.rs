use crate::{Canvas, PhysicsObject, Schedule};
use hecs::World;

/// Draw every object in roster order
pub fn draw_objects<C: Canvas + ?Sized>(world: &World, schedule: &Schedule, canvas: &mut C) {
    for &entity in &schedule.order {
        if let Ok(obj) = world.get::<&PhysicsObject>(entity) {
            obj.draw(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_object, Bitmap};
    use glam::Vec2;
    use std::sync::Arc;

    #[derive(Default)]
    struct NameLog(Vec<String>);

    impl Canvas for NameLog {
        fn draw_bitmap(&mut self, bitmap: &Arc<Bitmap>, _pos: Vec2) {
            self.0.push(bitmap.name().to_string());
        }
    }

    #[test]
    fn test_draws_in_roster_order() {
        let mut world = World::new();
        let mut schedule = Schedule::new();
        for name in ["c", "a", "b"] {
            let bitmap = Arc::new(Bitmap::solid(name, 1, 1).unwrap());
            schedule.push(create_object(&mut world, bitmap, Vec2::ZERO, Vec2::ZERO));
        }

        let mut canvas = NameLog::default();
        draw_objects(&world, &schedule, &mut canvas);

        assert_eq!(canvas.0, vec!["c", "a", "b"]);
    }
}
