use serde::Serialize;

use super::Simulation;

/// Owned copy of the board for JS consumers that prefer JSON over a raw
/// memory view.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSnapshot {
    pub rows: u32,
    pub cols: u32,
    pub generation: u64,
    pub running: bool,
    pub live_cells: u32,
    /// Row-major, 0 = dead, 1 = alive.
    pub cells: Vec<u8>,
}

pub(super) fn snapshot(sim: &Simulation) -> GridSnapshot {
    GridSnapshot {
        rows: sim.grid.rows(),
        cols: sim.grid.cols(),
        generation: sim.generation,
        running: sim.running,
        live_cells: sim.grid.live_count(),
        cells: sim.grid.cells().iter().map(|&c| u8::from(c)).collect(),
    }
}

pub(super) fn snapshot_json(sim: &Simulation) -> String {
    serde_json::to_string(&snapshot(sim)).unwrap_or_else(|_| "{}".to_string())
}
