/// Tuning parameters for the bouncing sprites demo
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_TITLE: &'static str = "Bouncing Sprites";
    pub const WINDOW_WIDTH: u32 = 700;
    pub const WINDOW_HEIGHT: u32 = 500;

    // Pacing
    pub const TARGET_FPS: u32 = 60;

    // Assets
    pub const ASSET_DIR: &'static str = "assets";

    // Scatter
    pub const SCATTER_SEED: u64 = 12345;
    pub const SCATTER_MIN_SPEED: f32 = 2.0; // pixels per frame, per axis
    pub const SCATTER_MAX_SPEED: f32 = 7.0;
}
