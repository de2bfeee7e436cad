// sim.rs - Simulation state driven by the UI loop

use conway::{GridAutomaton, patterns};
use log::{debug, info, trace};
use rand::{SeedableRng, rngs::StdRng};

use crate::config::{Config, Seed};

pub const RUNNING_TITLE: &str = "Game Of Life";
pub const PAUSED_TITLE: &str = "Game Of Life - Paused (Press Space to Advance Game State)";

/// User commands, in the order the UI applies them each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    ToggleErase,
    ToggleContinuous,
    Step,
}

/// Grid plus the mode flags the UI toggles.
#[derive(Debug)]
pub struct Simulation {
    pub automaton  : GridAutomaton,
    pub continuous : bool,    // Advance every frame instead of waiting for Step
    pub erasing    : bool,    // Mouse kills cells instead of drawing them
    cell_size      : usize,
}

impl Simulation {
    /// Starts paused and in draw mode.
    pub fn new(automaton: GridAutomaton, cell_size: usize) -> Self {
        assert!(cell_size > 0, "cell size must be non-zero");
        Self {
            automaton,
            continuous: false,
            erasing: false,
            cell_size,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut automaton = GridAutomaton::new(config.rows, config.cols);

        match config.seed {
            Seed::Empty => {}
            Seed::Pattern(pattern) => {
                let placed = patterns::stamp_centered(&mut automaton, pattern);
                info!("Seeded {} ({placed} cells)", pattern.name);
            }
            Seed::Random { density, seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                patterns::random_fill(&mut automaton, density, &mut rng);
                info!("Seeded random fill at density {density} ({} cells)", automaton.population());
            }
        }

        Self::new(automaton, config.cell_size)
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Reset => {
                self.automaton.reset();
                info!("Grid reset");
            }
            Command::ToggleErase => {
                self.erasing = !self.erasing;
                info!("{} mode", if self.erasing { "Erase" } else { "Draw" });
            }
            Command::ToggleContinuous => {
                self.continuous = !self.continuous;
                info!("{}", if self.continuous { "Running" } else { "Paused" });
            }
            Command::Step if !self.continuous => self.advance(),
            Command::Step => {}
        }
    }

    /// Called once per frame; advances only in continuous mode.
    pub fn tick(&mut self) -> bool {
        if self.continuous {
            self.advance();
        }
        self.continuous
    }

    fn advance(&mut self) {
        self.automaton.advance_generation();
        debug!(
            "Generation {}: {} live cells",
            self.automaton.generation(),
            self.automaton.population()
        );
    }

    /// Maps a canvas position to (row, col), or None when it lies off the grid.
    pub fn cell_for_pixel(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }

        let col = (x / self.cell_size as f32).floor() as usize;
        let row = (y / self.cell_size as f32).floor() as usize;
        self.automaton.contains(row, col).then_some((row, col))
    }

    /// Draws (or erases) the cell under a held pointer. Returns the cell touched.
    pub fn paint(&mut self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (row, col) = self.cell_for_pixel(x, y)?;
        self.automaton.set_cell(row, col, !self.erasing);
        trace!("Painted ({row}, {col}) {}", if self.erasing { "dead" } else { "alive" });
        Some((row, col))
    }

    pub fn title(&self) -> &'static str {
        if self.continuous { RUNNING_TITLE } else { PAUSED_TITLE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker_sim() -> Simulation {
        let mut automaton = GridAutomaton::new(80, 80);
        for col in 4..7 {
            automaton.set_cell(5, col, true);
        }
        Simulation::new(automaton, 10)
    }

    #[test]
    fn starts_paused_in_draw_mode() {
        let sim = blinker_sim();
        assert!(!sim.continuous);
        assert!(!sim.erasing);
        assert_eq!(sim.title(), PAUSED_TITLE);
    }

    #[test]
    fn step_advances_only_while_paused() {
        let mut sim = blinker_sim();
        sim.apply(Command::Step);
        assert_eq!(sim.automaton.generation(), 1);
        assert!(sim.automaton.cell_at(4, 5));

        sim.apply(Command::ToggleContinuous);
        sim.apply(Command::Step);
        assert_eq!(sim.automaton.generation(), 1);
    }

    #[test]
    fn tick_advances_only_in_continuous_mode() {
        let mut sim = blinker_sim();
        assert!(!sim.tick());
        assert_eq!(sim.automaton.generation(), 0);

        sim.apply(Command::ToggleContinuous);
        assert_eq!(sim.title(), RUNNING_TITLE);
        assert!(sim.tick());
        assert!(sim.tick());
        assert_eq!(sim.automaton.generation(), 2);
        assert!(sim.automaton.cell_at(5, 4));
    }

    #[test]
    fn reset_clears_grid() {
        let mut sim = blinker_sim();
        sim.apply(Command::Reset);
        assert_eq!(sim.automaton.population(), 0);
    }

    #[test]
    fn pixel_mapping_floors() {
        let sim = blinker_sim();
        assert_eq!(sim.cell_for_pixel(0.0, 0.0), Some((0, 0)));
        assert_eq!(sim.cell_for_pixel(9.9, 10.0), Some((1, 0)));
        assert_eq!(sim.cell_for_pixel(799.5, 250.0), Some((25, 79)));
    }

    #[test]
    fn pixel_mapping_rejects_outside_canvas() {
        let sim = blinker_sim();
        assert_eq!(sim.cell_for_pixel(800.0, 10.0), None);
        assert_eq!(sim.cell_for_pixel(10.0, 800.0), None);
        assert_eq!(sim.cell_for_pixel(-0.5, 10.0), None);
        assert_eq!(sim.cell_for_pixel(f32::NAN, 10.0), None);
    }

    #[test]
    fn paint_follows_erase_mode() {
        let mut sim = blinker_sim();
        assert_eq!(sim.paint(205.0, 305.0), Some((30, 20)));
        assert!(sim.automaton.cell_at(30, 20));

        sim.apply(Command::ToggleErase);
        sim.paint(205.0, 305.0);
        sim.paint(55.0, 55.0);
        assert!(!sim.automaton.cell_at(30, 20));
        assert!(!sim.automaton.cell_at(5, 5));

        assert_eq!(sim.paint(-1.0, 0.0), None);
    }

    #[test]
    fn seeds_from_config() {
        let config = Config {
            rows: 20,
            cols: 20,
            cell_size: 10,
            fps: 24,
            seed: Seed::Pattern(patterns::find("block").unwrap()),
        };
        let sim = Simulation::from_config(&config);
        assert_eq!(sim.automaton.population(), 4);
        assert!(sim.automaton.cell_at(9, 9));
        assert_eq!(sim.cell_size(), 10);
    }

    #[test]
    fn seeded_random_fill_is_reproducible() {
        let config = Config {
            rows: 20,
            cols: 20,
            cell_size: 10,
            fps: 24,
            seed: Seed::Random { density: 0.4, seed: Some(3) },
        };
        let a = Simulation::from_config(&config);
        let b = Simulation::from_config(&config);
        assert_eq!(a.automaton.cells(), b.automaton.cells());
    }
}
