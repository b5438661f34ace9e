// neighbours.rs - Face and diagonal lookups over the grid
//
// Counting order, clockwise:
//
//   faces:      N, E, S, W
//   diagonals:  NW, NE, SE, SW
//   corners:    NE, SE, SW, NW   (corner i sits between face i and face i+1)

use crate::grid::{CellState, Grid};

/// Face offsets in N, E, S, W order.
pub const FACE_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Diagonal offsets in NW, NE, SE, SW order.
pub const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

fn lookup(grid: &Grid, x: i32, y: i32, offsets: &[(i32, i32); 4], state: CellState) -> [bool; 4] {
    offsets.map(|(dx, dy)| {
        x.checked_add(dx)
            .zip(y.checked_add(dy))
            .is_some_and(|(nx, ny)| grid.has_state(nx, ny, state))
    })
}

/// `[north, east, south, west]`, true iff that face neighbour exists and holds `state`.
pub fn state_faces(grid: &Grid, x: i32, y: i32, state: CellState) -> [bool; 4] {
    lookup(grid, x, y, &FACE_OFFSETS, state)
}

/// `[NW, NE, SE, SW]`, true iff that diagonal neighbour exists and holds `state`.
pub fn state_neighbours(grid: &Grid, x: i32, y: i32, state: CellState) -> [bool; 4] {
    lookup(grid, x, y, &DIAGONAL_OFFSETS, state)
}

/// Corners whose two adjoining faces are both active.
///
/// A bridge cell draws one connector per flagged corner.
pub fn active_corners(grid: &Grid, x: i32, y: i32) -> [bool; 4] {
    let faces = state_faces(grid, x, y, CellState::Active);
    std::array::from_fn(|i| faces[i] && faces[(i + 1) % 4])
}

/// Corners that may be rounded.
///
/// A corner stays square when either adjoining face or the diagonal it points
/// at is active, so touching active shapes merge without a notch.
pub fn free_corners(grid: &Grid, x: i32, y: i32) -> [bool; 4] {
    let faces = state_faces(grid, x, y, CellState::Active);
    let diagonals = state_neighbours(grid, x, y, CellState::Active);
    std::array::from_fn(|i| {
        let next = (i + 1) % 4;
        !(faces[i] || faces[next] || diagonals[next])
    })
}
