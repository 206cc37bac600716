use crate::core::clock;

use super::Simulation;

pub(super) fn tick(sim: &mut Simulation) {
    // The frame being delivered is no longer pending, whatever happens next.
    sim.pending_frame = None;
    if !sim.running {
        log::trace!("dropping stale frame at generation {}", sim.generation);
        return;
    }
    step(sim);
}

pub(super) fn run_pending(sim: &mut Simulation, max_frames: usize) -> usize {
    let mut advanced = 0;
    while advanced < max_frames && sim.running && sim.pending_frame.is_some() {
        tick(sim);
        advanced += 1;
    }
    advanced
}

pub(super) fn step(sim: &mut Simulation) {
    let perf_on = sim.perf_enabled;
    let started_ms = perf_on.then(clock::now_ms);

    let next = sim.grid.next_generation();
    if perf_on {
        let (births, deaths) = sim.grid.transition_counts(&next);
        sim.perf_stats.births = births;
        sim.perf_stats.deaths = deaths;
    }
    sim.grid = next;
    sim.generation += 1;
    log::trace!("advanced to generation {}", sim.generation);

    if let Some(started_ms) = started_ms {
        sim.perf_stats.step_ms = clock::since_ms(started_ms);
        sim.perf_stats.live_cells = sim.grid.live_count();
        sim.perf_stats.generation = sim.generation;
        sim.perf_stats.grid_size = sim.grid.size() as u32;
    }

    sim.render();
    sim.schedule_next();
}
