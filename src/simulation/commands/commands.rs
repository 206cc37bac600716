use crate::domain::cell::CellState;

use super::Simulation;

pub(super) fn clear(sim: &mut Simulation) {
    sim.halt();
    sim.grid.clear();
    sim.generation = 0;
    log::info!("board cleared");
    sim.render();
}

pub(super) fn randomize_and_reset(sim: &mut Simulation) {
    sim.halt();
    let probability = sim.config.alive_probability;
    sim.grid.randomize(probability, &mut sim.rng);
    sim.generation = 0;
    log::info!(
        "board randomized: {} live cells (p = {probability})",
        sim.grid.live_count()
    );
    sim.render();
}

pub(super) fn edit_cell(sim: &mut Simulation, row: i32, col: i32, alive: bool) -> bool {
    if !sim.grid.in_bounds(row, col) {
        return false;
    }
    sim.grid.set(row as u32, col as u32, CellState::from_alive(alive));
    sim.render();
    true
}
