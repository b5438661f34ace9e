// bridges.rs - Bridge derivation between diagonally active cells
//
//  |   |   |   |
//  | N | a |   |
//  | b | C | b |
//  |   | a | N |
//  |   |   |   |
//
// C: the cell that was just toggled
// N: an active diagonal neighbour of C
// a: bridge candidate at (N.x, C.y)
// b: bridge candidate at (C.x, N.y)

use log::trace;

use crate::cell::transition;
use crate::error::GridError;
use crate::grid::{CellState, Grid};
use crate::neighbours::{DIAGONAL_OFFSETS, active_corners};

/// The two cells sharing an edge with both `(cx, cy)` and its diagonal `(nx, ny)`.
pub fn bridge_candidates(cx: i32, cy: i32, nx: i32, ny: i32) -> [(i32, i32); 2] {
    [(nx, cy), (cx, ny)]
}

/// True iff any pair of diagonally active cells needs `(x, y)` as their bridge.
///
/// Such a pair always occupies two adjoining faces of the cell, so this is the
/// same question as "does the cell have any doubly active corner".
pub fn bridge_required(grid: &Grid, x: i32, y: i32) -> bool {
    active_corners(grid, x, y).contains(&true)
}

/// Re-derives the bridge candidates of every active diagonal pair that the
/// cell at `(x, y)` takes part in. Returns the cells whose state changed.
///
/// Each candidate is judged against the whole grid rather than the single
/// pair being processed, so a bridge still needed by another pair survives.
pub fn resolve(grid: &mut Grid, x: i32, y: i32) -> Result<Vec<(i32, i32)>, GridError> {
    let centre = grid.state_at(x, y).ok_or(GridError::OutOfBounds { x, y })?;
    let mut changed = Vec::new();

    for (dx, dy) in DIAGONAL_OFFSETS {
        let (nx, ny) = (x + dx, y + dy);
        if !grid.has_state(nx, ny, CellState::Active) {
            continue;
        }

        for (bx, by) in bridge_candidates(x, y, nx, ny) {
            let Some(current) = grid.state_at(bx, by) else {
                continue;
            };
            let required = bridge_required(grid, bx, by);

            let next = match (centre, current) {
                (CellState::Active, CellState::Default) if required => CellState::Bridge,
                (CellState::Default, CellState::Bridge) if !required => CellState::Default,
                _ => continue,
            };

            trace!("bridge ({bx}, {by}) for pair ({x}, {y})/({nx}, {ny}): {current:?} -> {next:?}");
            transition(grid, bx, by, next, 0.0)?;
            changed.push((bx, by));
        }
    }

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn activate(grid: &mut Grid, x: i32, y: i32) {
        transition(grid, x, y, CellState::Active, 0.0).unwrap();
        resolve(grid, x, y).unwrap();
    }

    fn deactivate(grid: &mut Grid, x: i32, y: i32) {
        transition(grid, x, y, CellState::Default, 0.0).unwrap();
        resolve(grid, x, y).unwrap();
    }

    #[test]
    fn candidates_share_the_pair_intersection() {
        assert_eq!(bridge_candidates(1, 1, 0, 0), [(0, 1), (1, 0)]);
        assert_eq!(bridge_candidates(1, 1, 2, 2), [(2, 1), (1, 2)]);
    }

    #[test]
    fn diagonal_pair_creates_two_bridges() {
        let mut grid = Grid::new(3, 3).unwrap();
        activate(&mut grid, 0, 0);
        assert_eq!(grid.count(CellState::Bridge), 0);

        activate(&mut grid, 1, 1);
        assert!(grid.has_state(1, 0, CellState::Bridge));
        assert!(grid.has_state(0, 1, CellState::Bridge));
        assert_eq!(grid.count(CellState::Bridge), 2);
    }

    #[test]
    fn active_candidate_is_never_overwritten() {
        let mut grid = Grid::new(2, 2).unwrap();
        activate(&mut grid, 1, 0);
        activate(&mut grid, 0, 0);
        activate(&mut grid, 1, 1);
        assert!(grid.has_state(1, 0, CellState::Active));
        assert!(grid.has_state(0, 1, CellState::Bridge));
    }

    #[test]
    fn deactivation_clears_unneeded_bridges() {
        let mut grid = Grid::new(3, 3).unwrap();
        activate(&mut grid, 0, 0);
        activate(&mut grid, 1, 1);
        deactivate(&mut grid, 0, 0);
        assert_eq!(grid.count(CellState::Bridge), 0);
    }

    #[test]
    fn shared_bridge_survives_while_another_pair_needs_it() {
        let mut grid = Grid::new(3, 3).unwrap();
        activate(&mut grid, 0, 0);
        activate(&mut grid, 2, 0);
        activate(&mut grid, 1, 1);
        // (1, 0) serves both {(0,0),(1,1)} and {(2,0),(1,1)}.
        assert!(grid.has_state(1, 0, CellState::Bridge));

        let changed = resolve_after(&mut grid, 0, 0);
        assert_eq!(changed, vec![(0, 1)]);
        assert!(grid.has_state(1, 0, CellState::Bridge));
        assert!(grid.has_state(0, 1, CellState::Default));
        assert!(grid.has_state(2, 1, CellState::Bridge));
    }

    fn resolve_after(grid: &mut Grid, x: i32, y: i32) -> Vec<(i32, i32)> {
        transition(grid, x, y, CellState::Default, 0.0).unwrap();
        resolve(grid, x, y).unwrap()
    }

    #[test]
    fn required_reads_adjoining_faces() {
        let mut grid = Grid::new(3, 3).unwrap();
        transition(&mut grid, 1, 0, CellState::Active, 0.0).unwrap();
        transition(&mut grid, 0, 1, CellState::Active, 0.0).unwrap();
        assert!(bridge_required(&grid, 0, 0));
        assert!(bridge_required(&grid, 1, 1));
        assert!(!bridge_required(&grid, 2, 2));
    }
}
