// grid.rs - Grid and cell types for the bridge grid

use serde::{Deserialize, Serialize};

use crate::error::GridError;

pub const DEFAULT_WIDTH: usize = 20; // Cells per row
pub const DEFAULT_HEIGHT: usize = 20; // Rows

/// Corner radii, clockwise from top-left: `[NW, NE, SE, SW]`.
pub type Corners = [f32; 4];

pub const SQUARE: Corners = [0.0; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Default,
    Active,
    Bridge,
}

/// A single grid cell. State and corners only change through the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    state: CellState,
    corners: Corners,
}

impl Cell {
    fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            state: CellState::Default,
            corners: SQUARE,
        }
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// Radii per corner. All zero unless the cell is active.
    pub fn corners(&self) -> Corners {
        self.corners
    }

    pub fn is(&self, state: CellState) -> bool {
        self.state == state
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) fn set_corners(&mut self, corners: Corners) {
        self.corners = corners;
    }
}

/// Row-major grid of fixed size. Cells are created once and mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let invalid = || GridError::InvalidDimensions { width, height };
        let len = width
            .checked_mul(height)
            .filter(|len| {
                len.checked_mul(size_of::<Cell>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(invalid)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(Cell::new(x, y));
            }
        }

        Ok(Self { cells, width, height })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Bounds-checked lookup; `None` for anything outside `[0,width) x [0,height)`.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub(crate) fn cell_at_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    pub fn state_at(&self, x: i32, y: i32) -> Option<CellState> {
        self.cell_at(x, y).map(Cell::state)
    }

    /// True iff the cell exists and holds `state`. Absent cells never match.
    #[inline]
    pub fn has_state(&self, x: i32, y: i32, state: CellState) -> bool {
        self.state_at(x, y) == Some(state)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.is(state)).count()
    }

    /// Puts every cell back to Default with square corners.
    pub(crate) fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.set_state(CellState::Default);
            cell.set_corners(SQUARE);
        }
    }
}
