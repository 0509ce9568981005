use bounce_core::systems::draw_objects;
use bounce_core::{
    create_object, scatter, step, Bitmap, Bounds, Canvas, Config, Events, FrameClock, GameRng,
    Schedule,
};
use hecs::World;
use std::sync::Arc;

/// The running demo: world, fixed schedule and per-frame resources
pub struct Demo {
    pub world: World,
    pub schedule: Schedule,
    pub bounds: Bounds,
    pub events: Events,
    pub clock: FrameClock,
}

impl Demo {
    /// Spawn the configured roster using `bitmaps` (same order as `config.sprites`)
    pub fn new(config: &Config, bitmaps: &[Arc<Bitmap>]) -> Self {
        let bounds = config.bounds();
        let mut world = World::new();

        let mut order: Vec<hecs::Entity> = config
            .sprites
            .iter()
            .zip(bitmaps)
            .map(|(sprite, bitmap)| {
                create_object(&mut world, bitmap.clone(), sprite.position, sprite.velocity)
            })
            .collect();

        let mut rng = GameRng::new(config.seed);
        for obj in scatter(&mut rng, &bounds, bitmaps, config.scatter) {
            order.push(world.spawn((obj,)));
        }

        // The classic trio keeps its hand-written pair sequence
        let schedule = if let [a, b, c] = order[..] {
            Schedule::demo(a, b, c)
        } else {
            Schedule::with_all_ordered_pairs(order)
        };

        log::info!(
            "Spawned {} sprites with {} collision pairs",
            schedule.len(),
            schedule.pairs.len()
        );

        Self {
            world,
            schedule,
            bounds,
            events: Events::new(),
            clock: FrameClock::new(),
        }
    }

    /// Update every sprite, then run the collision responses
    pub fn step(&mut self) {
        step(
            &mut self.world,
            &self.bounds,
            &self.schedule,
            &mut self.events,
            &mut self.clock,
        );

        if self.events.collision_responses > 0 {
            log::debug!(
                "Frame {}: {} collision responses",
                self.clock.frame,
                self.events.collision_responses
            );
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        draw_objects(&self.world, &self.schedule, canvas);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.bounds = Bounds::from((width, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_core::PhysicsObject;
    use glam::Vec2;

    fn bitmaps(n: usize) -> Vec<Arc<Bitmap>> {
        (0..n)
            .map(|i| Arc::new(Bitmap::solid(format!("sprite{i}"), 16, 16).unwrap()))
            .collect()
    }

    #[test]
    fn test_classic_roster_uses_demo_pairs() {
        let demo = Demo::new(&Config::new(), &bitmaps(3));
        let o = &demo.schedule.order;
        assert_eq!(o.len(), 3);
        assert_eq!(demo.schedule.pairs, Schedule::demo(o[0], o[1], o[2]).pairs);
    }

    #[test]
    fn test_scatter_switches_to_all_pairs() {
        let mut config = Config::new();
        config.scatter = 2;
        let demo = Demo::new(&config, &bitmaps(3));
        assert_eq!(demo.schedule.len(), 5);
        assert_eq!(demo.schedule.pairs.len(), 20);
    }

    #[test]
    fn test_step_advances_roster() {
        let config = Config::new();
        let mut demo = Demo::new(&config, &bitmaps(3));
        demo.step();

        let first = demo.schedule.order[0];
        let obj = demo.world.get::<&PhysicsObject>(first).unwrap();
        assert_eq!(obj.position(), config.sprites[0].position + config.sprites[0].velocity);
        assert_eq!(demo.clock.frame, 1);
    }

    #[test]
    fn test_resize_updates_bounds() {
        let mut demo = Demo::new(&Config::new(), &bitmaps(3));
        demo.resize(320, 200);
        assert_eq!(demo.bounds, Bounds::new(320.0, 200.0));
        assert_eq!(demo.bounds.size(), Vec2::new(320.0, 200.0));
    }
}
