use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::domain::config::LifeConfig;
use crate::simulation::{NullRenderer, PerfStats, RenderSink, Scheduler, Simulation};

use super::canvas::{CallbackRenderer, CanvasRenderer};
use super::dom::{self, Binding};
use super::frame::{AnimationFrameScheduler, FrameCallbackSlot, TimeoutScheduler};

/// A running Game of Life board bound to the page.
#[wasm_bindgen]
pub struct LifeApp {
    sim: Rc<RefCell<Simulation>>,
    bindings: Vec<Binding>,
    // Owns the per-frame closure; schedulers only borrow it.
    _frames: FrameCallbackSlot,
}

#[wasm_bindgen]
impl LifeApp {
    /// Board on the configured canvas with mouse painting enabled.
    /// `config_json` may be omitted for the default 1200x660 board.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<LifeApp, JsValue> {
        Self::on_canvas(config_json).map_err(|e| JsValue::from_str(&e))
    }

    /// Canvas board plus the start/stop, clear and randomize buttons.
    pub fn mount(config_json: Option<String>) -> Result<LifeApp, JsValue> {
        let mut app = Self::new(config_json)?;
        app.bind_controls()?;
        Ok(app)
    }

    /// No canvas: every frame goes to `on_render(generation, running, cells)`
    /// when given, otherwise nowhere.
    pub fn headless(
        config_json: Option<String>,
        on_render: Option<js_sys::Function>,
    ) -> Result<LifeApp, JsValue> {
        Self::without_canvas(config_json, on_render).map_err(|e| JsValue::from_str(&e))
    }

    /// Wire the three control buttons named in the config.
    pub fn bind_controls(&mut self) -> Result<(), JsValue> {
        let ids = self.read(|sim| sim.config().elements.clone())?;
        let document = browser_document().map_err(|e| JsValue::from_str(&e))?;
        let bindings =
            dom::bind_controls(&document, &ids, &self.sim).map_err(|e| JsValue::from_str(&e))?;
        self.bindings.extend(bindings);
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        self.write(Simulation::start)
    }

    pub fn stop(&mut self) -> Result<(), JsValue> {
        self.write(Simulation::stop)
    }

    pub fn toggle(&mut self) -> Result<(), JsValue> {
        self.write(Simulation::toggle)
    }

    pub fn clear(&mut self) -> Result<(), JsValue> {
        self.write(Simulation::clear)
    }

    pub fn randomize(&mut self) -> Result<(), JsValue> {
        self.write(Simulation::randomize_and_reset)
    }

    /// Returns false when (row, col) is off the board.
    pub fn edit_cell(&mut self, row: i32, col: i32, alive: bool) -> Result<bool, JsValue> {
        self.write(|sim| sim.edit_cell(row, col, alive))
    }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> Result<u64, JsValue> { self.read(Simulation::generation) }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> Result<bool, JsValue> { self.read(Simulation::is_running) }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> Result<u32, JsValue> { self.read(Simulation::rows) }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> Result<u32, JsValue> { self.read(Simulation::cols) }

    /// Pointer to the cell bytes (for a `Uint8Array` over wasm memory).
    /// Invalidated by the next step, clear or randomize.
    pub fn cells_ptr(&self) -> Result<*const u8, JsValue> {
        self.read(Simulation::cells_ptr)
    }

    pub fn cells_len(&self) -> Result<usize, JsValue> {
        self.read(Simulation::cells_len)
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.read(Simulation::snapshot_json)
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.read(|sim| sim.config().to_json())
    }

    pub fn alive_probability(&self) -> Result<f64, JsValue> {
        self.read(Simulation::alive_probability)
    }

    pub fn set_alive_probability(&mut self, probability: f64) -> Result<(), JsValue> {
        self.write(|sim| sim.set_alive_probability(probability))
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) -> Result<(), JsValue> {
        self.write(|sim| sim.enable_perf_metrics(enabled))
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> Result<PerfStats, JsValue> {
        self.read(Simulation::get_perf_stats)
    }
}

// Calls made from inside a render callback find the simulation borrowed and
// get a thrown error back instead of a panic.
impl LifeApp {
    fn read<T>(&self, f: impl FnOnce(&Simulation) -> T) -> Result<T, JsValue> {
        read_sim(&self.sim, f).map_err(|e| JsValue::from_str(&e))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Simulation) -> T) -> Result<T, JsValue> {
        write_sim(&self.sim, f).map_err(|e| JsValue::from_str(&e))
    }
}

fn read_sim<T>(
    sim: &RefCell<Simulation>,
    f: impl FnOnce(&Simulation) -> T,
) -> Result<T, String> {
    let sim = sim.try_borrow().map_err(|_| BUSY.to_string())?;
    Ok(f(&sim))
}

fn write_sim<T>(
    sim: &RefCell<Simulation>,
    f: impl FnOnce(&mut Simulation) -> T,
) -> Result<T, String> {
    let mut sim = sim.try_borrow_mut().map_err(|_| BUSY.to_string())?;
    Ok(f(&mut sim))
}

const BUSY: &str = "simulation is busy rendering; read the render callback arguments instead";

impl LifeApp {
    fn on_canvas(config_json: Option<String>) -> Result<LifeApp, String> {
        let config = parse_config(config_json)?;
        let window = browser_window()?;
        let document = window
            .document()
            .ok_or_else(|| "window has no document".to_string())?;

        let ids = &config.elements;
        let canvas = dom::canvas_by_id(&document, &ids.canvas)?;
        let renderer = CanvasRenderer::new(&canvas, &config)?.with_labels(
            document.get_element_by_id(&ids.generation_counter),
            document.get_element_by_id(&ids.start_stop_button),
        );
        let cell_size = config.cell_size;

        let mut app = Self::assemble(config, window, Box::new(renderer))?;
        let bindings = dom::bind_canvas(&canvas, &app.sim, cell_size)?;
        app.bindings.extend(bindings);
        Ok(app)
    }

    fn without_canvas(
        config_json: Option<String>,
        on_render: Option<js_sys::Function>,
    ) -> Result<LifeApp, String> {
        let config = parse_config(config_json)?;
        let renderer: Box<dyn RenderSink> = match on_render {
            Some(callback) => Box::new(CallbackRenderer::new(callback)),
            None => Box::new(NullRenderer),
        };
        Self::assemble(config, browser_window()?, renderer)
    }

    fn assemble(
        config: LifeConfig,
        window: Window,
        renderer: Box<dyn RenderSink>,
    ) -> Result<LifeApp, String> {
        let frames = FrameCallbackSlot::new();
        let scheduler: Box<dyn Scheduler> = match config.frame_interval_ms {
            Some(interval_ms) => {
                Box::new(TimeoutScheduler::new(window, frames.clone(), interval_ms))
            }
            None => Box::new(AnimationFrameScheduler::new(window, frames.clone())),
        };

        let sim = Rc::new(RefCell::new(Simulation::new(config, scheduler, renderer)?));

        let weak = Rc::downgrade(&sim);
        frames.install(Closure::new(move || {
            let Some(sim) = weak.upgrade() else {
                return;
            };
            match sim.try_borrow_mut() {
                Ok(mut sim) => sim.tick(),
                Err(_) => log::warn!("simulation busy when its frame fired"),
            };
        }));

        Ok(LifeApp {
            sim,
            bindings: Vec::new(),
            _frames: frames,
        })
    }
}

impl Drop for LifeApp {
    fn drop(&mut self) {
        if let Ok(mut sim) = self.sim.try_borrow_mut() {
            sim.stop();
        }
        self.bindings.clear();
    }
}

fn parse_config(config_json: Option<String>) -> Result<LifeConfig, String> {
    match config_json {
        Some(json) if !json.trim().is_empty() => LifeConfig::from_json(&json),
        _ => Ok(LifeConfig::default()),
    }
}

fn browser_window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "no global window".to_string())
}

fn browser_document() -> Result<Document, String> {
    browser_window()?
        .document()
        .ok_or_else(|| "window has no document".to_string())
}
