// grid.rs - Fixed-size grid for Conway's Game of Life

use std::fmt;

/// Default grid dimensions (80x80 playing area)
pub const DEFAULT_ROWS: usize = 80;
pub const DEFAULT_COLS: usize = 80;

/// A bounded rows x cols Game of Life grid.
///
/// Cells live in one flat row-major buffer indexed by `row * cols + col`.
/// Neighbours outside the grid count as dead; there is no wraparound.
/// Every coordinate handed to the accessors must be in range, out-of-range
/// access panics.
#[derive(Debug, Clone)]
pub struct GridAutomaton {
    rows       : usize,
    cols       : usize,
    cells      : Vec<bool>,
    next_cells : Vec<bool>,   // Scratch buffer swapped in by advance_generation
    generation : u64,
}

impl Default for GridAutomaton {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl GridAutomaton {
    /// Creates an all-dead grid. Panics if either dimension is zero.
    #[track_caller]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero, got {rows}x{cols}");

        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
            next_cells: vec![false; rows * cols],
            generation: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of generations advanced since creation or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[track_caller]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    #[track_caller]
    pub fn cell_at(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    #[track_caller]
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        let index = self.index(row, col);
        self.cells[index] = alive;
    }

    /// Counts live cells among the up-to-8 neighbours of (row, col).
    #[track_caller]
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.index(row, col);

        let mut count = 0;
        for nr in row.saturating_sub(1)..=(row + 1).min(self.rows - 1) {
            for nc in col.saturating_sub(1)..=(col + 1).min(self.cols - 1) {
                if (nr, nc) != (row, col) && self.cells[nr * self.cols + nc] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Kills every cell and rewinds the generation counter.
    pub fn reset(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Advances every cell one generation using B3/S23.
    ///
    /// Neighbour counts come only from the current buffer; results go to the
    /// scratch buffer, which is swapped in once every cell is computed.
    pub fn advance_generation(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let index = row * self.cols + col;
                let alive = self.cells[index];
                let count = self.count_live_neighbors(row, col);

                self.next_cells[index] = match (alive, count) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next_cells);
        self.generation += 1;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// (row, col) of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(index, _)| (index / cols, index % cols))
    }
}

impl fmt::Display for GridAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
