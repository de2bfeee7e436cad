// patterns.rs - Named seed patterns and random fills

use rand::Rng;

use crate::GridAutomaton;

/// A named pattern; cells are (row, col) offsets from the pattern's top-left.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Looks a pattern up by name, ignoring case, spaces, dashes and underscores.
pub fn find(name: &str) -> Option<&'static Pattern> {
    let wanted = normalize(name);
    PATTERNS.iter().find(|pattern| normalize(pattern.name) == wanted)
}

impl Pattern {
    /// Bounding box as (rows, cols).
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(row, col)| {
            (rows.max(row + 1), cols.max(col + 1))
        })
    }
}

/// Sets the pattern's cells alive relative to `origin`. Cells that fall
/// outside the grid are skipped; returns how many were placed.
pub fn stamp(grid: &mut GridAutomaton, pattern: &Pattern, origin: (usize, usize)) -> usize {
    let mut placed = 0;
    for &(row, col) in pattern.cells {
        let (row, col) = (origin.0 + row, origin.1 + col);
        if grid.contains(row, col) {
            grid.set_cell(row, col, true);
            placed += 1;
        }
    }
    placed
}

/// Stamps the pattern with its bounding box centered on the grid.
pub fn stamp_centered(grid: &mut GridAutomaton, pattern: &Pattern) -> usize {
    let (rows, cols) = pattern.size();
    let origin = (
        grid.rows().saturating_sub(rows) / 2,
        grid.cols().saturating_sub(cols) / 2,
    );
    stamp(grid, pattern, origin)
}

/// Clears the grid, then brings each cell alive with probability `density`.
pub fn random_fill<R: Rng>(grid: &mut GridAutomaton, density: f64, rng: &mut R) {
    grid.reset();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if rng.gen_bool(density) {
                grid.set_cell(row, col, true);
            }
        }
    }
}
