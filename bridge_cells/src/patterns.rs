use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::debug;

use crate::error::GridError;
use crate::grid::CellState;
use crate::interaction::InteractionController;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Diagonal",
        cells: &[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6), (7, 7)],
    },
    Pattern {
        name: "Checkerboard",
        cells: &[
            (4, 4), (6, 4), (8, 4),
            (5, 5), (7, 5),
            (4, 6), (6, 6), (8, 6),
            (5, 7), (7, 7),
            (4, 8), (6, 8), (8, 8),
        ],
    },
    Pattern {
        // (5, 4) is the bridge of both diagonal pairs
        name: "T cluster",
        cells: &[(4, 4), (6, 4), (5, 5)],
    },
    Pattern {
        name: "Ring",
        cells: &[
            (8, 5), (9, 5), (10, 5),
            (7, 6), (11, 6),
            (6, 7), (12, 7),
            (6, 8), (12, 8),
            (6, 9), (12, 9),
            (7, 10), (11, 10),
            (8, 11), (9, 11), (10, 11),
        ],
    },
    Pattern {
        name: "Staircase",
        cells: &[(2, 2), (3, 2), (4, 3), (5, 3), (6, 4), (7, 4), (8, 5), (9, 5)],
    },
];

/// Clears the grid and clicks every pattern cell that fits, so bridges derive
/// exactly as they would from user input.
pub fn apply_pattern(controller: &mut InteractionController, pattern: &Pattern) -> Result<(), GridError> {
    controller.clear();
    debug!("applying pattern {}", pattern.name);

    for &(x, y) in pattern.cells {
        if controller.grid().has_state(x, y, CellState::Default) {
            controller.toggle(x, y)?;
        }
    }
    Ok(())
}

/// Clears the grid and activates roughly a third of the cells.
pub fn apply_random_pattern(controller: &mut InteractionController, seed_value: u32) -> Result<(), GridError> {
    controller.clear();

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    let (width, height) = controller.grid().dimensions();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            if (seed >> 33) % 3 == 0 && controller.grid().has_state(x, y, CellState::Default) {
                controller.toggle(x, y)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use test_log::test;

    fn controller() -> InteractionController {
        InteractionController::new(Grid::new(16, 16).unwrap())
    }

    #[test]
    fn every_preset_fits_the_default_grid() {
        for pattern in PATTERNS {
            assert!(
                pattern.cells.iter().all(|&(x, y)| (0..20).contains(&x) && (0..20).contains(&y)),
                "{} leaves the grid",
                pattern.name
            );
        }
    }

    #[test]
    fn t_cluster_shares_its_middle_bridge() {
        let mut c = controller();
        let t = PATTERNS.iter().find(|p| p.name == "T cluster").unwrap();
        apply_pattern(&mut c, t).unwrap();

        assert_eq!(c.active_count(), 3);
        assert!(c.grid().has_state(5, 4, CellState::Bridge));
        assert!(c.grid().has_state(4, 5, CellState::Bridge));
        assert!(c.grid().has_state(6, 5, CellState::Bridge));
        assert_eq!(c.bridge_count(), 3);
    }

    #[test]
    fn applying_replaces_previous_state() {
        let mut c = controller();
        c.toggle(0, 0).unwrap();
        apply_pattern(&mut c, &PATTERNS[0]).unwrap();
        assert!(c.grid().has_state(0, 0, CellState::Default));
        assert_eq!(c.active_count(), 6);
    }

    #[test]
    fn random_pattern_is_seeded() {
        let mut a = controller();
        let mut b = controller();
        apply_random_pattern(&mut a, 7).unwrap();
        apply_random_pattern(&mut b, 7).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert!(a.active_count() > 0);
    }
}
