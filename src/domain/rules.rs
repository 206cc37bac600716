//! Rules - the B3/S23 transition
//!
//! Kept apart from the grid so the rule can be checked on its own,
//! one (state, neighbor count) pair at a time.

use super::cell::CellState;

/// Next state of a single cell given its live neighbor count.
///
/// - alive with 2 or 3 neighbors survives
/// - alive with fewer than 2 or more than 3 dies
/// - dead with exactly 3 is born
#[inline]
pub fn next_state(current: CellState, live_neighbors: u8) -> CellState {
    match (current, live_neighbors) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survival_needs_two_or_three() {
        for n in 0..=8u8 {
            let expected = if n == 2 || n == 3 { CellState::Alive } else { CellState::Dead };
            assert_eq!(next_state(CellState::Alive, n), expected, "alive with {n} neighbors");
        }
    }

    #[test]
    fn birth_needs_exactly_three() {
        for n in 0..=8u8 {
            let expected = if n == 3 { CellState::Alive } else { CellState::Dead };
            assert_eq!(next_state(CellState::Dead, n), expected, "dead with {n} neighbors");
        }
    }
}
