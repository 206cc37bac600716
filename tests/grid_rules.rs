use life_engine::core::random::Xorshift32;
use life_engine::{CellState, Grid};

fn blinker_5x5() -> Grid {
    Grid::from_rows(&[
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ])
}

#[test]
fn neighbor_counts_stay_within_eight_for_random_boards() {
    let mut rng = Xorshift32::new(77);
    for &(rows, cols) in &[(1, 1), (2, 3), (7, 5), (16, 16)] {
        let grid = Grid::randomized(rows, cols, 0.5, &mut rng);
        for row in 0..rows {
            for col in 0..cols {
                assert!(grid.count_live_neighbors(row, col) <= 8);
            }
        }
    }
}

#[test]
fn edge_cells_see_the_opposite_edge() {
    let mut grid = Grid::new(6, 8);
    grid.set(0, 3, CellState::Alive);
    assert_eq!(grid.count_live_neighbors(5, 3), 1);
    assert_eq!(grid.count_live_neighbors(5, 2), 1);
    assert_eq!(grid.count_live_neighbors(5, 4), 1);

    let mut grid = Grid::new(6, 8);
    grid.set(2, 7, CellState::Alive);
    assert_eq!(grid.count_live_neighbors(2, 0), 1);
    assert_eq!(grid.count_live_neighbors(1, 0), 1);
    assert_eq!(grid.count_live_neighbors(3, 0), 1);
}

#[test]
fn dead_board_stays_dead() {
    let grid = Grid::new(12, 9);
    let next = grid.next_generation();
    assert_eq!(next.live_count(), 0);
    assert_eq!(next, grid);
}

#[test]
fn lonely_cell_dies() {
    let mut grid = Grid::new(5, 5);
    grid.set(2, 2, CellState::Alive);
    assert_eq!(grid.next_generation().live_count(), 0);
}

#[test]
fn block_is_a_still_life() {
    let mut grid = Grid::new(8, 8);
    for (row, col) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
        grid.set(row, col, CellState::Alive);
    }
    let start = grid.clone();
    for _ in 0..5 {
        grid = grid.next_generation();
        assert_eq!(grid, start);
    }
}

#[test]
fn blinker_has_period_two() {
    let gen0 = blinker_5x5();
    let gen1 = gen0.next_generation();
    let gen2 = gen1.next_generation();
    assert_ne!(gen0, gen1);
    assert_eq!(gen0, gen2);
}

#[test]
fn blinker_example_turns_vertical_and_back() {
    let grid = blinker_5x5();
    let next = grid.next_generation();
    for row in 0..5 {
        for col in 0..5 {
            let expected = col == 2 && (1..=3).contains(&row);
            assert_eq!(next.get(row, col).is_alive(), expected, "cell ({row}, {col})");
        }
    }
    assert_eq!(next.next_generation(), grid);
}

#[test]
fn glider_returns_shifted_after_four_generations() {
    let mut grid = Grid::new(10, 10);
    for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        grid.set(row, col, CellState::Alive);
    }
    let mut moved = grid.clone();
    for _ in 0..4 {
        moved = moved.next_generation();
    }
    assert_eq!(moved.live_count(), 5);
    for (row, col) in [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)] {
        assert!(moved.get(row, col).is_alive(), "cell ({row}, {col})");
    }
}

#[test]
fn glider_wraps_around_the_torus() {
    let mut grid = Grid::new(6, 6);
    for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        grid.set(row, col, CellState::Alive);
    }
    let start = grid.clone();
    // One diagonal cell per 4 generations; 6 cells brings it home.
    for _ in 0..24 {
        grid = grid.next_generation();
        assert_eq!(grid.live_count(), 5);
    }
    assert_eq!(grid, start);
}
