use super::perf_stats::PerfStats;
use super::Simulation;

pub(super) fn alive_probability(sim: &Simulation) -> f64 {
    sim.config.alive_probability
}

pub(super) fn set_alive_probability(sim: &mut Simulation, probability: f64) {
    if probability.is_nan() {
        log::warn!("ignoring NaN alive probability");
        return;
    }
    sim.config.alive_probability = probability.clamp(0.0, 1.0);
}

pub(super) fn enable_perf_metrics(sim: &mut Simulation, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &Simulation) -> PerfStats {
    sim.perf_stats.clone()
}
