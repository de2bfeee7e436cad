// config.rs - Command-line configuration

use std::time::Duration;

use clap::Parser;
use conway::{DEFAULT_COLS, DEFAULT_ROWS, Pattern, patterns};
use thiserror::Error;

pub const DEFAULT_CANVAS_SIZE: usize = 800;
pub const DEFAULT_FPS: u32 = 24;

#[derive(Parser, Debug)]
#[command(name = "game_of_life")]
#[command(about = "Draw cells with the mouse and watch Conway's Game of Life evolve")]
pub struct Args {
    /// Number of grid rows.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of grid columns.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Canvas width in logical pixels.
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub width: usize,

    /// Canvas height in logical pixels.
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub height: usize,

    /// Frame-rate cap; continuous mode advances one generation per frame.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Start with a named pattern centered on the grid (e.g. glider, pulsar).
    #[arg(long, conflicts_with = "random")]
    pub pattern: Option<String>,

    /// Start with a random fill of the given density (0.0 - 1.0).
    #[arg(long, value_name = "DENSITY")]
    pub random: Option<f64>,

    /// Seed for --random, for reproducible fills.
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("a {width}x{height} canvas cannot fit a {rows}x{cols} grid")]
    CanvasTooSmall {
        width: usize,
        height: usize,
        rows: usize,
        cols: usize,
    },

    #[error("frame rate must be at least 1")]
    ZeroFps,

    #[error("random density must be between 0 and 1, got {0}")]
    InvalidDensity(f64),

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
}

/// What the grid holds before the first frame.
#[derive(Debug)]
pub enum Seed {
    Empty,
    Pattern(&'static Pattern),
    Random { density: f64, seed: Option<u64> },
}

/// Validated startup configuration.
#[derive(Debug)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: usize,
    pub fps: u32,
    pub seed: Seed,
}

impl Args {
    pub fn validate(self) -> Result<Config, ConfigError> {
        let Args { rows, cols, width, height, fps, pattern, random, seed } = self;

        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }

        let cell_size = (width / cols).min(height / rows);
        if cell_size == 0 {
            return Err(ConfigError::CanvasTooSmall { width, height, rows, cols });
        }

        if fps == 0 {
            return Err(ConfigError::ZeroFps);
        }

        let seed = match (pattern, random) {
            (Some(name), _) => {
                let pattern = patterns::find(&name).ok_or(ConfigError::UnknownPattern(name))?;
                Seed::Pattern(pattern)
            }
            (None, Some(density)) if !(0.0..=1.0).contains(&density) => {
                return Err(ConfigError::InvalidDensity(density));
            }
            (None, Some(density)) => Seed::Random { density, seed },
            (None, None) => Seed::Empty,
        };

        Ok(Config { rows, cols, cell_size, fps, seed })
    }
}

impl Config {
    /// Drawn canvas as (width, height); whole cells only.
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            (self.cols * self.cell_size) as f32,
            (self.rows * self.cell_size) as f32,
        )
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}
