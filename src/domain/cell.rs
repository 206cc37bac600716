//! Cell states
//!
//! `repr(u8)` keeps the grid buffer byte-per-cell so JS can view it as a
//! `Uint8Array` without copying (0 = dead, 1 = alive).

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    #[inline]
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl From<CellState> for u8 {
    #[inline]
    fn from(state: CellState) -> u8 {
        state as u8
    }
}
