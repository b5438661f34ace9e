// main.rs - Bridge grid front end
// Draws the engine's snapshot and feeds clicks back in as toggles.

use anyhow::Context;
use eframe::egui;
use egui::Color32;
use log::{debug, info, warn};
use std::path::PathBuf;

mod geometry; // Pointer mapping and bridge outlines
mod ui; // eframe::App implementation

use bridge_cells::patterns::{self, PATTERNS};
use bridge_cells::{Config, GridError, InteractionController};

const CONFIG_ENV: &str = "BRIDGE_GRID_CONFIG";

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let app = BridgeGrid::new(&config).context("failed to build grid")?;

    let (width, height) = app.controller.grid().dimensions();
    let pitch = app.cell_size + app.spacing;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            (width as f32 * pitch).max(640.0) + 40.0,
            height as f32 * pitch + 220.0,
        ]),
        ..Default::default()
    };

    info!("Starting bridge grid {width}x{height}");
    eframe::run_native("Bridge Grid", options, Box::new(|_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("window closed with error: {e}"))
}

/// Config path from the first argument, then the environment; defaults otherwise.
fn load_config() -> anyhow::Result<Config> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    match path {
        Some(path) => {
            let config = Config::load(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            info!("Configuration loaded from {}", path.display());
            Ok(config)
        }
        None => {
            info!("Configuration loaded (using default).");
            Ok(Config::default())
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

pub struct BridgeGrid {
    pub controller: InteractionController,

    pub cell_size: f32,
    pub spacing: f32,
    pub round_corners: bool,
    pub show_bridges: bool,
    pub active_color: Color32,
    pub default_color: Color32,
    pub selected_pattern: usize,
    pub random_seed: u32,
    pub status: Option<String>,
}

impl BridgeGrid {
    pub fn new(config: &Config) -> Result<Self, GridError> {
        let appearance = &config.appearance;
        Ok(Self {
            controller: InteractionController::from_config(config)?,
            cell_size: appearance.cell_size,
            spacing: appearance.spacing,
            round_corners: appearance.round_corners,
            show_bridges: appearance.show_bridges,
            active_color: rgb(appearance.active_color),
            default_color: rgb(appearance.default_color),
            selected_pattern: 0,
            random_seed: 0,
            status: None,
        })
    }
}

/// Operations the UI drives. Failures end up in the status line.
pub trait BridgeGridInterface {
    fn click(&mut self, x: i32, y: i32);
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
}

impl BridgeGridInterface for BridgeGrid {
    fn click(&mut self, x: i32, y: i32) {
        match self.controller.toggle(x, y) {
            Ok(()) => self.status = None,
            Err(e) => {
                debug!("click ignored: {e}");
                self.status = Some(e.to_string());
            }
        }
    }

    fn clear_grid(&mut self) {
        self.controller.clear();
        self.status = None;
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            if let Err(e) = patterns::apply_pattern(&mut self.controller, pattern) {
                warn!("pattern {} failed: {e}", pattern.name);
                self.status = Some(e.to_string());
            }
        }
    }

    fn apply_random_pattern(&mut self) {
        self.random_seed = self.random_seed.wrapping_add(1);
        if let Err(e) = patterns::apply_random_pattern(&mut self.controller, self.random_seed) {
            warn!("random pattern failed: {e}");
            self.status = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_cells::CellState;
    use test_log::test;

    fn app() -> BridgeGrid {
        let mut config = Config::default();
        config.grid.width = 4;
        config.grid.height = 4;
        BridgeGrid::new(&config).unwrap()
    }

    #[test]
    fn clicking_a_bridge_reports_status() {
        let mut app = app();
        app.click(0, 0);
        app.click(1, 1);
        assert!(app.status.is_none());

        app.click(1, 0);
        assert!(app.status.is_some());
        assert!(app.controller.grid().has_state(1, 0, CellState::Bridge));

        app.click(3, 3);
        assert!(app.status.is_none());
    }

    #[test]
    fn clear_after_random() {
        let mut app = app();
        app.apply_random_pattern();
        app.clear_grid();
        assert_eq!(app.controller.active_count(), 0);
    }
}
