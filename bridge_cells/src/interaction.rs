// interaction.rs - Applies user toggles to the grid

use log::{debug, warn};

use crate::bridges;
use crate::cell::{refresh_corners, transition};
use crate::config::{BridgeTogglePolicy, Config, DEFAULT_ROUND_RADIUS};
use crate::error::GridError;
use crate::grid::{CellState, Grid};
use crate::snapshot::Snapshot;

/// Owns the grid and runs each toggle to completion before returning.
///
/// Rendering is not driven from here: a mutation only raises a redraw flag,
/// and the renderer pulls a [`Snapshot`] whenever it wants one.
#[derive(Debug, Clone)]
pub struct InteractionController {
    grid: Grid,
    round_radius: f32,
    policy: BridgeTogglePolicy,
    redraw: bool,
}

impl InteractionController {
    pub fn new(grid: Grid) -> Self {
        Self::with_policy(grid, DEFAULT_ROUND_RADIUS, BridgeTogglePolicy::default())
    }

    pub fn with_policy(grid: Grid, round_radius: f32, policy: BridgeTogglePolicy) -> Self {
        Self {
            grid,
            round_radius,
            policy,
            redraw: true,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, GridError> {
        let grid = Grid::new(config.grid.width, config.grid.height)?;
        Ok(Self::with_policy(
            grid,
            config.appearance.round_radius,
            config.behavior.bridge_toggle,
        ))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn policy(&self) -> BridgeTogglePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: BridgeTogglePolicy) {
        self.policy = policy;
    }

    pub fn round_radius(&self) -> f32 {
        self.round_radius
    }

    /// Changes the corner radius and reprofiles every active cell.
    pub fn set_round_radius(&mut self, radius: f32) {
        self.round_radius = radius;
        let active: Vec<(i32, i32)> = self
            .grid
            .cells()
            .filter(|c| c.is(CellState::Active))
            .map(|c| (c.x, c.y))
            .collect();
        for (x, y) in active {
            refresh_corners(&mut self.grid, x, y, radius);
        }
        self.redraw = true;
    }

    /// Flips the cell at `(x, y)` between Default and Active, then settles
    /// bridges and corner profiles around it.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        let current = self
            .grid
            .state_at(x, y)
            .ok_or(GridError::OutOfBounds { x, y })?;

        let next = match (current, self.policy) {
            (CellState::Default, _) => CellState::Active,
            (CellState::Active, _) => CellState::Default,
            (CellState::Bridge, BridgeTogglePolicy::Reject) => {
                warn!("rejected toggle of bridge cell ({x}, {y})");
                return Err(GridError::BridgeToggle { x, y });
            }
            (CellState::Bridge, BridgeTogglePolicy::Override) => {
                transition(&mut self.grid, x, y, CellState::Default, self.round_radius)?;
                CellState::Active
            }
        };

        debug!("toggle ({x}, {y}): {current:?} -> {next:?}");
        transition(&mut self.grid, x, y, next, self.round_radius)?;

        let changed = bridges::resolve(&mut self.grid, x, y)?;
        if !changed.is_empty() {
            debug!("toggle ({x}, {y}) changed bridges at {changed:?}");
        }

        self.refresh_neighbourhood(x, y);
        self.redraw = true;
        Ok(())
    }

    // Only cells touching (x, y) can see a different set of active neighbours.
    fn refresh_neighbourhood(&mut self, x: i32, y: i32) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                refresh_corners(&mut self.grid, x + dx, y + dy, self.round_radius);
            }
        }
    }

    /// Returns every cell to Default.
    pub fn clear(&mut self) {
        self.grid.reset();
        self.redraw = true;
    }

    /// Reports and clears the pending redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.grid)
    }

    pub fn active_count(&self) -> usize {
        self.grid.count(CellState::Active)
    }

    pub fn bridge_count(&self) -> usize {
        self.grid.count(CellState::Bridge)
    }
}
