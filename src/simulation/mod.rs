//! Simulation - the play/pause controller around the grid
//!
//! `Simulation` owns every piece of mutable session state: the grid, the
//! generation counter, the running flag and the pending frame handle.
//! Frame pacing and drawing are injected:
//! - `Scheduler` decides when the next `tick()` happens
//! - `RenderSink` is told about every visible state change
//!
//! The same controller therefore runs under `requestAnimationFrame`, a
//! `setTimeout` loop, or a test that ticks by hand.

use crate::core::grid::Grid;
use crate::core::random::Xorshift32;
use crate::domain::config::LifeConfig;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "control/control.rs"]
mod control;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/sink.rs"]
mod sink;
#[path = "render/render_extract.rs"]
mod render_extract;
mod scheduler;

pub use perf_stats::PerfStats;
pub use render_extract::GridSnapshot;
pub use scheduler::{FrameHandle, ManualProbe, ManualScheduler, Scheduler};
pub use sink::{FrameView, NullRenderer, RenderSink};

pub struct Simulation {
    config: LifeConfig,
    grid: Grid,
    rng: Xorshift32,
    scheduler: Box<dyn Scheduler>,
    renderer: Box<dyn RenderSink>,

    // State
    generation: u64,
    running: bool,
    pending_frame: Option<FrameHandle>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation {
    /// Build a stopped simulation with an all-dead grid sized from `config`
    /// and draw it once.
    pub fn new(
        config: LifeConfig,
        scheduler: Box<dyn Scheduler>,
        renderer: Box<dyn RenderSink>,
    ) -> Result<Self, String> {
        init::create_simulation(config, scheduler, renderer)
    }

    /// Manual scheduler, no renderer. Drive it with `run_pending`.
    pub fn headless(config: LifeConfig) -> Result<Self, String> {
        Self::new(config, Box::new(ManualScheduler::new()), Box::new(NullRenderer))
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn is_running(&self) -> bool { self.running }

    pub fn pending_frame(&self) -> Option<FrameHandle> { self.pending_frame }

    pub fn config(&self) -> &LifeConfig { &self.config }

    // === Controls ===

    /// STOPPED -> RUNNING. Steps once right away, then keeps stepping on
    /// every scheduled frame.
    pub fn start(&mut self) {
        control::start(self);
    }

    /// RUNNING -> STOPPED, cancelling the pending frame.
    pub fn stop(&mut self) {
        control::stop(self);
    }

    pub fn toggle(&mut self) {
        control::toggle(self);
    }

    /// Stop, kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Stop, reseed the board at the configured density and reset the
    /// generation counter.
    pub fn randomize_and_reset(&mut self) {
        commands::randomize_and_reset(self);
    }

    /// Set one cell. Out-of-range coordinates are ignored (returns false).
    pub fn edit_cell(&mut self, row: i32, col: i32, alive: bool) -> bool {
        commands::edit_cell(self, row, col, alive)
    }

    // === Frame loop ===

    /// Scheduler entry point. Advances one generation if still running;
    /// a frame that fires after `stop()` is dropped.
    pub fn tick(&mut self) {
        step::tick(self);
    }

    /// Tick while a frame is pending, at most `max_frames` times.
    /// Returns the number of generations advanced.
    pub fn run_pending(&mut self, max_frames: usize) -> usize {
        step::run_pending(self, max_frames)
    }

    // === Settings ===

    pub fn alive_probability(&self) -> f64 {
        settings::alive_probability(self)
    }

    pub fn set_alive_probability(&mut self, probability: f64) {
        settings::set_alive_probability(self, probability);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Render extraction ===

    pub fn snapshot(&self) -> GridSnapshot {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }

    /// Pointer to the cell buffer (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }
}

// Private helpers shared by the submodules
impl Simulation {
    fn render(&mut self) {
        let frame = FrameView {
            grid: &self.grid,
            generation: self.generation,
            running: self.running,
        };
        self.renderer.render(&frame);
    }

    fn schedule_next(&mut self) {
        control::schedule_next(self);
    }

    /// Drop to STOPPED without rendering. Returns whether it was running.
    fn halt(&mut self) -> bool {
        control::halt(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
