//! Conway's Game of Life on a bounded grid.
//!
//! [`GridAutomaton`] owns the cells and steps them with the B3/S23 rule;
//! [`patterns`] seeds it with well-known shapes or random noise.

pub mod grid;      // Grid storage and the generation rule
pub mod patterns;  // Named seed patterns

pub use grid::{DEFAULT_COLS, DEFAULT_ROWS, GridAutomaton};
pub use patterns::{PATTERNS, Pattern};
