use glam::Vec2;
use std::path::PathBuf;
use std::time::Duration;

use crate::bounds::Bounds;
use crate::params::Params;

/// One sprite of the starting roster
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSpec {
    pub name: String,
    pub file: String, // relative to `Config::asset_dir`
    pub position: Vec2,
    pub velocity: Vec2,
}

impl SpriteSpec {
    pub fn new(name: &str, file: &str, position: Vec2, velocity: Vec2) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            position,
            velocity,
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub asset_dir: PathBuf,
    pub sprites: Vec<SpriteSpec>,
    pub scatter: usize, // Extra sprites placed at random
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: Params::WINDOW_TITLE.to_string(),
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            target_fps: Params::TARGET_FPS,
            asset_dir: PathBuf::from(Params::ASSET_DIR),
            sprites: Self::demo_sprites(),
            scatter: 0,
            seed: Params::SCATTER_SEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pig, bat and ghost with their classic starting positions
    pub fn demo_sprites() -> Vec<SpriteSpec> {
        vec![
            SpriteSpec::new(
                "Pig",
                "pig.png",
                Vec2::new(100.0, 100.0),
                Vec2::new(5.0, 5.0),
            ),
            SpriteSpec::new(
                "Bat",
                "bat.webp",
                Vec2::new(300.0, 300.0),
                Vec2::new(-6.0, -6.0),
            ),
            SpriteSpec::new(
                "Ghost",
                "ghost.webp",
                Vec2::new(200.0, 200.0),
                Vec2::new(-5.0, -5.0),
            ),
        ]
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from((self.window_width, self.window_height))
    }

    /// Time budget of a single frame at the target rate
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    pub fn sprite_path(&self, sprite: &SpriteSpec) -> PathBuf {
        self.asset_dir.join(&sprite.file)
    }
}
