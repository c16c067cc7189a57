//! Application entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use trex_rush::{GameOptions, TrexRush};

/// Endless runner in the style of the offline dinosaur game.
#[derive(Parser)]
#[command(name = "trex-rush")]
struct Cli {
    /// Debug logging.
    #[arg(long)]
    debug: bool,
    /// Screen size as WIDTHxHEIGHT or WIDTH,HEIGHT.
    #[arg(long, default_value = "1024x400", value_parser = parse_screen)]
    screen: (u32, u32),
    /// Simulation and render rate, frames per second.
    #[arg(long, default_value_t = 60)]
    framerate: u32,
    /// Disable enemy spawning.
    #[arg(long)]
    no_enemies: bool,
    /// Seed for spawn randomization.
    #[arg(long, default_value_t = 0x7e_c0de)]
    seed: u64,
    /// Directory holding atlas.json, the sprite sheet and the sounds.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
}

fn parse_screen(s: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split(['x', 'X', ',']).collect();
    if parts.len() != 2 {
        return Err(format!("expected WIDTHxHEIGHT or W,H, got {s:?}"));
    }
    let w = parts[0].trim().parse::<u32>().map_err(|e| format!("bad width: {e}"))?;
    let h = parts[1].trim().parse::<u32>().map_err(|e| format!("bad height: {e}"))?;
    if w == 0 || h == 0 {
        return Err("screen size must be positive".to_string());
    }
    Ok((w, h))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let assets = rush_native::load_assets(&cli.assets).context("loading assets")?;

    let options = GameOptions {
        width: cli.screen.0 as f32,
        height: cli.screen.1 as f32,
        framerate: cli.framerate,
        enemies: !cli.no_enemies,
        seed: cli.seed,
    };
    let game = TrexRush::new(&assets.registry, options).context("resolving game sprites")?;

    rush_native::run(game, assets)
}
