//! Pyrite 2D main entry point.
//!
//! A small 2D game-engine runtime written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - load-once resource caches for decoded textures and rasterized fonts
//! - a camera-relative renderer with viewport culling and parallax layers
//!
//! This executable runs a built-in demo scene that exercises every renderer
//! path with generated textures; move the camera with the arrow keys.
//!
//! # Project Structure
//!
//! - [`resource`] – texture/font caches and the unified cache facade
//! - [`render`] – camera, sprite descriptor and renderer
//! - [`app`] – window bootstrap and the frame loop
//! - [`config`] – INI-backed window configuration
//! - [`time`] – per-frame delta and elapsed time with a time scale
//! - [`demo`] – the demo scene
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod config;
mod demo;
mod render;
mod resource;
mod time;

use std::path::PathBuf;

use clap::Parser;

use crate::app::App;
use crate::config::EngineConfig;

/// Pyrite 2D
#[derive(Parser)]
#[command(version, about = "Pyrite 2D: a small camera-and-caches game engine runtime")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // An explicitly requested config file that cannot be read aborts
    // startup; the default path falls back to safe defaults.
    let config = match cli.config {
        Some(path) => {
            let mut config = EngineConfig::with_path(path);
            if let Err(e) = config.load_from_file() {
                log::error!("{e}");
                std::process::exit(1);
            }
            config
        }
        None => {
            let mut config = EngineConfig::new();
            config.load_from_file().ok(); // ignore errors, use defaults
            config
        }
    };

    App::new(config).run();
}
