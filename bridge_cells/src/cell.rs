// cell.rs - Per-cell state machine and corner profile

use log::trace;

use crate::error::GridError;
use crate::grid::{CellState, Corners, Grid, SQUARE};
use crate::neighbours::free_corners;

/// Maps free corners (`[NE, SE, SW, NW]`) to radii in draw order (`[NW, NE, SE, SW]`).
pub fn corner_radii(free: [bool; 4], radius: f32) -> Corners {
    let r = |free: bool| if free { radius } else { 0.0 };
    [r(free[3]), r(free[0]), r(free[1]), r(free[2])]
}

fn allowed(from: CellState, to: CellState) -> bool {
    !matches!(
        (from, to),
        (CellState::Active, CellState::Bridge) | (CellState::Bridge, CellState::Active)
    )
}

/// Moves the cell at `(x, y)` to `next`.
///
/// Bridge is only ever entered from, or left to, Default. Entering Active
/// computes the corner profile from the current neighbourhood; every other
/// state clears it.
pub fn transition(
    grid: &mut Grid,
    x: i32,
    y: i32,
    next: CellState,
    radius: f32,
) -> Result<(), GridError> {
    let from = grid.state_at(x, y).ok_or(GridError::OutOfBounds { x, y })?;
    if !allowed(from, next) {
        return Err(GridError::InvalidTransition { x, y, from, to: next });
    }

    let corners = match next {
        CellState::Active => corner_radii(free_corners(grid, x, y), radius),
        CellState::Default | CellState::Bridge => SQUARE,
    };

    if let Some(cell) = grid.cell_at_mut(x, y) {
        trace!("cell ({x}, {y}): {from:?} -> {next:?}");
        cell.set_state(next);
        cell.set_corners(corners);
    }
    Ok(())
}

/// Recomputes the corner profile of an active cell. Other cells are left alone.
pub fn refresh_corners(grid: &mut Grid, x: i32, y: i32, radius: f32) {
    if !grid.has_state(x, y, CellState::Active) {
        return;
    }
    let corners = corner_radii(free_corners(grid, x, y), radius);
    if let Some(cell) = grid.cell_at_mut(x, y) {
        cell.set_corners(corners);
    }
}
