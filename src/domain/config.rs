//! Startup configuration
//!
//! Loaded from a JSON object handed over by the page (camelCase keys, every
//! field optional). Defaults reproduce the classic 1200x660 board with
//! 15px cells.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CELL_SIZE: u32 = 15;
pub const DEFAULT_CANVAS_WIDTH: u32 = 1200;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 660;
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.25;
/// Largest board accepted, 2048 x 2048 cells.
pub const MAX_CELLS: u64 = 1 << 22;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifeConfig {
    pub cell_size: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Chance that a cell starts alive when the board is randomized.
    pub alive_probability: f64,
    pub live_color: String,
    pub dead_color: String,
    pub grid_color: String,
    /// Fixed RNG seed; the clock is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Step on a fixed timer instead of every animation frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_interval_ms: Option<u32>,
    pub elements: ElementIds,
}

/// DOM ids the default page uses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementIds {
    pub canvas: String,
    pub start_stop_button: String,
    pub clear_button: String,
    pub random_button: String,
    pub generation_counter: String,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            live_color: "#333333ff".to_string(),
            dead_color: "#f0f0f0ff".to_string(),
            grid_color: "#ccccccff".to_string(),
            seed: None,
            frame_interval_ms: None,
            elements: ElementIds::default(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            canvas: "gameCanvas".to_string(),
            start_stop_button: "startStopBtn".to_string(),
            clear_button: "clearBtn".to_string(),
            random_button: "randomBtn".to_string(),
            generation_counter: "generationCounter".to_string(),
        }
    }
}

impl LifeConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: LifeConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cellSize must be greater than zero".to_string());
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(format!(
                "aliveProbability must be within [0, 1], got {}",
                self.alive_probability
            ));
        }
        let cells = self.rows() as u64 * self.cols() as u64;
        if cells > MAX_CELLS {
            return Err(format!(
                "board of {} x {} cells exceeds the {MAX_CELLS} cell limit",
                self.rows(),
                self.cols()
            ));
        }
        if self.frame_interval_ms == Some(0) {
            return Err("frameIntervalMs must be greater than zero when set".to_string());
        }
        Ok(())
    }

    /// Grid rows derived from the canvas height.
    pub fn rows(&self) -> u32 {
        self.canvas_height.checked_div(self.cell_size).unwrap_or(0)
    }

    /// Grid columns derived from the canvas width.
    pub fn cols(&self) -> u32 {
        self.canvas_width.checked_div(self.cell_size).unwrap_or(0)
    }
}
