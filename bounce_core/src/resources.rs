/// Frame counter for the simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    pub frame: u64, // Frames simulated so far
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounces_x: u32,       // Velocity flips on the left/right walls
    pub wall_bounces_y: u32,       // Velocity flips on the top/bottom walls
    pub collision_responses: u32, // Receiver velocity inversions
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounces_x = 0;
        self.wall_bounces_y = 0;
        self.collision_responses = 0;
    }

    pub fn wall_bounces(&self) -> u32 {
        self.wall_bounces_x + self.wall_bounces_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame, 0);
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame, 2);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.wall_bounces_x = 2;
        events.wall_bounces_y = 1;
        events.collision_responses = 4;
        assert_eq!(events.wall_bounces(), 3);

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_rng_is_seeded() {
        use rand::Rng;
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        let xs: Vec<u32> = (0..4).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys);
    }
}
