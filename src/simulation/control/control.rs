use super::Simulation;

pub(super) fn start(sim: &mut Simulation) {
    if sim.running {
        return;
    }
    sim.running = true;
    log::info!("simulation started at generation {}", sim.generation);
    super::step::step(sim);
}

pub(super) fn stop(sim: &mut Simulation) {
    if sim.halt() {
        log::info!("simulation stopped at generation {}", sim.generation);
        sim.render();
    }
}

pub(super) fn toggle(sim: &mut Simulation) {
    if sim.running {
        stop(sim);
    } else {
        start(sim);
    }
}

pub(super) fn halt(sim: &mut Simulation) -> bool {
    if let Some(handle) = sim.pending_frame.take() {
        sim.scheduler.cancel(handle);
    }
    std::mem::replace(&mut sim.running, false)
}

pub(super) fn schedule_next(sim: &mut Simulation) {
    match sim.scheduler.schedule_next() {
        Ok(handle) => sim.pending_frame = Some(handle),
        Err(e) => {
            log::error!("failed to schedule next frame, stopping: {e}");
            sim.pending_frame = None;
            sim.running = false;
            sim.render();
        }
    }
}
