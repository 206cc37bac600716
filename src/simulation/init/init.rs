use crate::core::grid::Grid;
use crate::core::random::Xorshift32;
use crate::domain::config::LifeConfig;

use super::perf_stats::PerfStats;
use super::{RenderSink, Scheduler, Simulation};

pub(super) fn create_simulation(
    config: LifeConfig,
    scheduler: Box<dyn Scheduler>,
    renderer: Box<dyn RenderSink>,
) -> Result<Simulation, String> {
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => Xorshift32::new(seed),
        None => Xorshift32::from_clock(),
    };
    let grid = Grid::new(config.rows(), config.cols());

    log::info!(
        "life simulation created: {} rows x {} cols ({}px cells)",
        grid.rows(),
        grid.cols(),
        config.cell_size
    );

    let mut sim = Simulation {
        config,
        grid,
        rng,
        scheduler,
        renderer,
        generation: 0,
        running: false,
        pending_frame: None,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    sim.render();
    Ok(sim)
}
