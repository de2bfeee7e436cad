// Compares advance_generation against a separately written reference step.

use conway::{GridAutomaton, patterns};
use rand::{SeedableRng, rngs::StdRng};

/// Reference step over a plain Vec<Vec<bool>>, written without the grid's API.
fn reference_step(cells: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let rows = cells.len() as isize;
    let cols = cells[0].len() as isize;

    let alive = |r: isize, c: isize| r >= 0 && r < rows && c >= 0 && c < cols && cells[r as usize][c as usize];

    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let mut n = 0;
                    for dr in -1..=1 {
                        for dc in -1..=1 {
                            if (dr, dc) != (0, 0) && alive(r + dr, c + dc) {
                                n += 1;
                            }
                        }
                    }
                    if alive(r, c) { n == 2 || n == 3 } else { n == 3 }
                })
                .collect()
        })
        .collect()
}

fn snapshot(grid: &GridAutomaton) -> Vec<Vec<bool>> {
    grid.cells().chunks(grid.cols()).map(|row| row.to_vec()).collect()
}

#[test]
fn matches_reference_on_random_grids() {
    for (seed, (rows, cols)) in [(1, (80, 80)), (2, (17, 31)), (3, (1, 9)), (4, (40, 3))] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = GridAutomaton::new(rows, cols);
        patterns::random_fill(&mut grid, 0.35, &mut rng);

        let mut expected = snapshot(&grid);
        for generation in 1..=20 {
            expected = reference_step(&expected);
            grid.advance_generation();
            assert_eq!(snapshot(&grid), expected, "seed {seed}, generation {generation}\n{grid}");
        }
        assert_eq!(grid.generation(), 20);
    }
}

#[test]
fn neighbor_counts_match_reference() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut grid = GridAutomaton::new(12, 12);
    patterns::random_fill(&mut grid, 0.5, &mut rng);

    for row in 0..12usize {
        for col in 0..12usize {
            let mut n = 0;
            for r in row.saturating_sub(1)..(row + 2).min(12) {
                for c in col.saturating_sub(1)..(col + 2).min(12) {
                    if (r, c) != (row, col) && grid.cell_at(r, c) {
                        n += 1;
                    }
                }
            }
            assert_eq!(grid.count_live_neighbors(row, col), n, "({row}, {col})");
        }
    }
}

#[test]
fn glider_travels_diagonally() {
    let mut grid = GridAutomaton::default();
    let glider = patterns::find("glider").unwrap();
    patterns::stamp(&mut grid, glider, (10, 10));
    let start: Vec<_> = grid.live_cells().collect();

    for _ in 0..4 {
        grid.advance_generation();
    }

    let moved: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(grid.live_cells().collect::<Vec<_>>(), moved);
}

#[test]
fn glider_dies_against_the_edge() {
    // No wraparound: a glider heading into the bottom-right corner becomes a block
    let mut grid = GridAutomaton::new(10, 10);
    patterns::stamp(&mut grid, patterns::find("glider").unwrap(), (5, 5));

    for _ in 0..40 {
        grid.advance_generation();
    }
    assert_eq!(grid.live_cells().collect::<Vec<_>>(), [(8, 8), (8, 9), (9, 8), (9, 9)]);
}
