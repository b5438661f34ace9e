// snapshot.rs - Read-only view of the grid handed to the renderer

use serde::Serialize;

use crate::grid::{CellState, Corners, Grid};
use crate::neighbours::active_corners;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellView {
    pub x: i32,
    pub y: i32,
    pub state: CellState,
    /// Radii in draw order, `[NW, NE, SE, SW]`.
    pub corners: Corners,
    /// Corners (`[NE, SE, SW, NW]`) a bridge connector should fill. All false
    /// for non-bridge cells.
    pub bridge_arms: [bool; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<CellView>,
}

impl Snapshot {
    pub fn capture(grid: &Grid) -> Self {
        let (width, height) = grid.dimensions();
        let cells = grid
            .cells()
            .map(|cell| CellView {
                x: cell.x,
                y: cell.y,
                state: cell.state(),
                corners: cell.corners(),
                bridge_arms: match cell.state() {
                    CellState::Bridge => active_corners(grid, cell.x, cell.y),
                    CellState::Default | CellState::Active => [false; 4],
                },
            })
            .collect();

        Self { width, height, cells }
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&CellView> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width + x as usize)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
