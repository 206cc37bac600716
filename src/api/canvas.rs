//! Render sinks for the browser
//!
//! `CanvasRenderer` paints the board the way the classic page did: a filled
//! square per cell, then a 1px grid on top, and keeps the generation label
//! and the start/stop caption in sync. `CallbackRenderer` hands every frame
//! to a JS function instead.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::domain::config::LifeConfig;
use crate::simulation::{FrameView, RenderSink};

use super::js_error;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    cell_size: f64,
    width: f64,
    height: f64,
    live_color: String,
    dead_color: String,
    grid_color: String,
    generation_label: Option<Element>,
    start_stop_button: Option<Element>,
}

impl CanvasRenderer {
    /// Resizes the canvas to the configured board and grabs its 2d context.
    pub fn new(canvas: &HtmlCanvasElement, config: &LifeConfig) -> Result<Self, String> {
        canvas.set_width(config.canvas_width);
        canvas.set_height(config.canvas_height);

        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| "canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context has an unexpected type".to_string())?;

        Ok(Self {
            ctx,
            cell_size: config.cell_size as f64,
            width: config.canvas_width as f64,
            height: config.canvas_height as f64,
            live_color: config.live_color.clone(),
            dead_color: config.dead_color.clone(),
            grid_color: config.grid_color.clone(),
            generation_label: None,
            start_stop_button: None,
        })
    }

    pub fn with_labels(
        mut self,
        generation_label: Option<Element>,
        start_stop_button: Option<Element>,
    ) -> Self {
        self.generation_label = generation_label;
        self.start_stop_button = start_stop_button;
        self
    }

    fn draw_cells(&self, frame: &FrameView<'_>) {
        let grid = frame.grid;
        let size = self.cell_size;
        for (idx, cell) in grid.cells().iter().enumerate() {
            let (row, col) = grid.coords(idx);
            let color = if cell.is_alive() { &self.live_color } else { &self.dead_color };
            self.ctx.set_fill_style_str(color);
            self.ctx.fill_rect(col as f64 * size, row as f64 * size, size, size);
        }
    }

    fn draw_grid_lines(&self, rows: u32, cols: u32) {
        let size = self.cell_size;
        self.ctx.set_stroke_style_str(&self.grid_color);
        self.ctx.set_line_width(1.0);
        for i in 0..=cols {
            let x = i as f64 * size;
            self.ctx.begin_path();
            self.ctx.move_to(x, 0.0);
            self.ctx.line_to(x, self.height);
            self.ctx.stroke();
        }
        for j in 0..=rows {
            let y = j as f64 * size;
            self.ctx.begin_path();
            self.ctx.move_to(0.0, y);
            self.ctx.line_to(self.width, y);
            self.ctx.stroke();
        }
    }
}

impl RenderSink for CanvasRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.draw_cells(frame);
        self.draw_grid_lines(frame.grid.rows(), frame.grid.cols());

        if let Some(label) = &self.generation_label {
            label.set_text_content(Some(&generation_text(frame.generation)));
        }
        if let Some(button) = &self.start_stop_button {
            button.set_text_content(Some(start_stop_caption(frame.running)));
        }
    }
}

pub fn generation_text(generation: u64) -> String {
    format!("Generation: {generation}")
}

/// Caption names the action the button performs next.
pub fn start_stop_caption(running: bool) -> &'static str {
    if running { "Stop" } else { "Start" }
}

/// Calls `callback(generation, running, cells)` on every frame, `cells`
/// being a fresh row-major `Uint8Array` copy (0 = dead, 1 = alive).
///
/// The callback runs while the app is busy: calling back into the app from
/// it throws, so everything it needs is in its arguments.
pub struct CallbackRenderer {
    callback: js_sys::Function,
    scratch: Vec<u8>,
}

impl CallbackRenderer {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback, scratch: Vec::new() }
    }
}

impl RenderSink for CallbackRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.scratch.clear();
        self.scratch.extend(frame.grid.cells().iter().map(|&c| u8::from(c)));
        let cells = js_sys::Uint8Array::from(self.scratch.as_slice());

        let result = self.callback.call3(
            &JsValue::NULL,
            &JsValue::from_f64(frame.generation as f64),
            &JsValue::from_bool(frame.running),
            &cells,
        );
        if let Err(e) = result {
            log::error!("render callback threw: {}", js_error(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_label_text() {
        assert_eq!(generation_text(0), "Generation: 0");
        assert_eq!(generation_text(42), "Generation: 42");
    }

    #[test]
    fn caption_follows_running_flag() {
        assert_eq!(start_stop_caption(false), "Start");
        assert_eq!(start_stop_caption(true), "Stop");
    }
}
