use bounce_core::{Config, Params};
use clap::Parser;
use std::path::PathBuf;

/// Sprites bouncing off the walls and off each other
#[derive(Debug, Parser)]
#[command(name = "bounce", version, about)]
pub struct Cli {
    /// Directory holding pig.png, bat.webp and ghost.webp
    #[arg(long, default_value = Params::ASSET_DIR)]
    pub assets: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = Params::WINDOW_WIDTH)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = Params::WINDOW_HEIGHT)]
    pub height: u32,

    /// Target frames per second
    #[arg(long, default_value_t = Params::TARGET_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Extra sprites placed at random positions
    #[arg(long, default_value_t = 0)]
    pub scatter: usize,

    /// Seed for --scatter
    #[arg(long, default_value_t = Params::SCATTER_SEED)]
    pub seed: u64,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            window_width: self.width,
            window_height: self.height,
            target_fps: self.fps,
            asset_dir: self.assets,
            scatter: self.scatter,
            seed: self.seed,
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let config = Cli::parse_from(["bounce"]).into_config();
        let defaults = Config::default();
        assert_eq!(config.window_width, defaults.window_width);
        assert_eq!(config.window_height, defaults.window_height);
        assert_eq!(config.target_fps, defaults.target_fps);
        assert_eq!(config.asset_dir, defaults.asset_dir);
        assert_eq!(config.sprites, defaults.sprites);
        assert_eq!(config.scatter, 0);
    }

    #[test]
    fn test_overrides() {
        let config = Cli::parse_from([
            "bounce", "--assets", "res", "--width", "320", "--height", "240", "--fps", "30",
            "--scatter", "5", "--seed", "7",
        ])
        .into_config();
        assert_eq!(config.asset_dir, PathBuf::from("res"));
        assert_eq!((config.window_width, config.window_height), (320, 240));
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.scatter, 5);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_zero_fps_rejected() {
        assert!(Cli::try_parse_from(["bounce", "--fps", "0"]).is_err());
    }
}
