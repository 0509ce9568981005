mod app;
mod assets;
mod camera;
mod cli;
mod mesh;
mod pacer;
mod renderer;
mod simulation;

use anyhow::Result;
use clap::Parser;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,bounce=info"))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = cli::Cli::parse().into_config();
    let bitmaps = assets::load_roster(&config)?;
    app::run(config, bitmaps)
}
