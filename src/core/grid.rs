//! Grid - fixed-size toroidal board of cell states
//!
//! Row-major `Vec<CellState>`, one byte per cell. Dimensions are set once
//! at construction and never change; a new generation is a new `Grid`
//! built from the old one, so every neighbor count in a step reads the
//! board as it was before the step.

use crate::core::random::Xorshift32;
use crate::domain::cell::CellState;
use crate::domain::rules;

mod indexing;

/// Relative offsets of the Moore neighborhood.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(rows: u32, cols: u32) -> Self {
        let size = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            cells: vec![CellState::Dead; size],
        }
    }

    /// Fresh grid filled by `randomize`.
    pub fn randomized(rows: u32, cols: u32, alive_probability: f64, rng: &mut Xorshift32) -> Self {
        let mut grid = Self::new(rows, cols);
        grid.randomize(alive_probability, rng);
        grid
    }

    /// Build from rows of 0/1 values. Short rows are padded with dead cells.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut grid = Self::new(rows.len() as u32, cols);
        for (row, values) in rows.iter().enumerate() {
            for (col, &v) in values.iter().enumerate() {
                grid.set(row as u32, col as u32, CellState::from_alive(v != 0));
            }
        }
        grid
    }

    /// Overwrite every cell: alive iff a uniform `[0, 1)` sample falls below
    /// `alive_probability`.
    pub fn randomize(&mut self, alive_probability: f64, rng: &mut Xorshift32) {
        for cell in self.cells.iter_mut() {
            *cell = CellState::from_alive(rng.next_f64() < alive_probability);
        }
    }

    /// Set every cell dead.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Live cells among the 8 neighbors, wrapping at every edge.
    ///
    /// Coordinates past the edge are reduced modulo the board size first, so
    /// any `u32` pair names a cell.
    pub fn count_live_neighbors(&self, row: u32, col: u32) -> u8 {
        if self.is_empty() {
            return 0;
        }
        let rows = self.rows as i64;
        let cols = self.cols as i64;
        let row = row as i64 % rows;
        let col = col as i64 % cols;
        let mut count = 0u8;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = (row + dr as i64 + rows) % rows;
            let c = (col + dc as i64 + cols) % cols;
            count += self.cells[self.index(r as u32, c as u32)] as u8;
        }
        count
    }

    /// Apply B3/S23 to every cell, reading only from `self`.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid::new(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(row, col);
                let neighbors = self.count_live_neighbors(row, col);
                next.cells[idx] = rules::next_state(self.cells[idx], neighbors);
            }
        }
        next
    }

    /// (births, deaths) going from `self` to `next`.
    pub fn transition_counts(&self, next: &Grid) -> (u32, u32) {
        let mut births = 0;
        let mut deaths = 0;
        for (before, after) in self.cells.iter().zip(next.cells.iter()) {
            match (before, after) {
                (CellState::Dead, CellState::Alive) => births += 1,
                (CellState::Alive, CellState::Dead) => deaths += 1,
                _ => {}
            }
        }
        (births, deaths)
    }

    pub fn live_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_alive()).count() as u32
    }

    // === Cell access ===
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> CellState {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: u32, col: u32, state: CellState) {
        let idx = self.index(row, col);
        self.cells[idx] = state;
    }

    /// Read-only row-major view for renderers.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Pointer to the cell buffer (for JS `Uint8Array` views).
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr() as *const u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_cells(grid: &Grid) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if grid.get(row, col).is_alive() {
                    out.push((row, col));
                }
            }
        }
        out
    }

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.size(), 24);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn neighbor_count_excludes_self() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, CellState::Alive);
        assert_eq!(grid.count_live_neighbors(2, 2), 0);
        assert_eq!(grid.count_live_neighbors(1, 1), 1);
        assert_eq!(grid.count_live_neighbors(3, 2), 1);
    }

    #[test]
    fn neighbor_count_wraps_across_edges() {
        let mut grid = Grid::new(5, 5);
        grid.set(4, 4, CellState::Alive);
        // Opposite corner sees it through both wraps.
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
        grid.set(0, 4, CellState::Alive);
        grid.set(4, 0, CellState::Alive);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
    }

    #[test]
    fn full_grid_has_eight_neighbors_everywhere() {
        let mut grid = Grid::new(3, 3);
        grid.randomize(1.0, &mut Xorshift32::new(1));
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.count_live_neighbors(row, col), 8);
            }
        }
    }

    #[test]
    fn neighbor_count_reduces_huge_coordinates() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, CellState::Alive);
        // 2^31 = 2 (mod 3), u32::MAX = 0 (mod 3)
        assert_eq!(grid.count_live_neighbors(1 << 31, 0), grid.count_live_neighbors(2, 0));
        assert_eq!(grid.count_live_neighbors(1 << 31, 0), 1);
        assert_eq!(grid.count_live_neighbors(u32::MAX, u32::MAX), 1);
        assert_eq!(grid.count_live_neighbors(4, 4), 0);
    }

    #[test]
    fn blinker_flips_orientation() {
        let grid = Grid::from_rows(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        let next = grid.next_generation();
        assert_eq!(alive_cells(&next), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(next.next_generation(), grid);
    }

    #[test]
    fn next_generation_does_not_touch_input() {
        let grid = Grid::from_rows(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0], &[0, 0, 0]]);
        let before = grid.clone();
        let _ = grid.next_generation();
        assert_eq!(grid, before);
    }

    #[test]
    fn empty_grid_is_a_no_op() {
        let mut grid = Grid::new(0, 7);
        assert!(grid.is_empty());
        grid.randomize(1.0, &mut Xorshift32::new(5));
        assert_eq!(grid.size(), 0);
        let next = grid.next_generation();
        assert_eq!(next.rows(), 0);
        assert_eq!(next.cols(), 7);
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn randomize_respects_probability_extremes() {
        let mut rng = Xorshift32::new(11);
        let mut grid = Grid::new(10, 10);
        grid.randomize(0.0, &mut rng);
        assert_eq!(grid.live_count(), 0);
        grid.randomize(1.0, &mut rng);
        assert_eq!(grid.live_count(), 100);
    }

    #[test]
    fn randomize_density_is_near_probability() {
        let grid = Grid::randomized(100, 100, 0.25, &mut Xorshift32::new(2024));
        let density = grid.live_count() as f64 / grid.size() as f64;
        assert!((0.2..0.3).contains(&density), "density {density}");
    }

    #[test]
    fn transition_counts_births_and_deaths() {
        let grid = Grid::from_rows(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0], &[0, 0, 0]]);
        let next = grid.next_generation();
        let (births, deaths) = grid.transition_counts(&next);
        assert_eq!(births as i64 - deaths as i64, next.live_count() as i64 - grid.live_count() as i64);
    }
}
