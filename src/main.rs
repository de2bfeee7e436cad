// main.rs - Interactive Conway's Game of Life
// The grid logic lives in the `conway` crate; this binary wires it to an eframe window.

use clap::Parser;
use eframe::egui;
use log::info;
use thiserror::Error;

mod config;  // Command-line configuration
mod sim;     // Simulation state and user commands
mod ui;      // eframe front end

use config::{Args, ConfigError};
use sim::PAUSED_TITLE;
use ui::{KEY_BINDINGS, LifeApp};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

fn main() -> Result<(), LaunchError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().validate()?;
    let (width, height) = config.canvas_size();

    info!("GAME OF LIFE");
    info!("{}x{} grid, {} px cells, {} fps", config.rows, config.cols, config.cell_size, config.fps);
    info!("Keybindings:");
    for (key, _, description) in KEY_BINDINGS {
        info!("  {:<8}{description}", format!("[{key:?}]"));
    }
    info!("  Mouse   Hold the left button to draw or erase cells");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false)
            .with_title(PAUSED_TITLE),
        ..Default::default()
    };

    let app = LifeApp::new(&config);
    eframe::run_native(
        PAUSED_TITLE,
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;

    info!("Window closed");
    Ok(())
}
