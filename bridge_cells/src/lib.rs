//! Cell-state engine for a toggleable square grid.
//!
//! Users flip cells between Default and Active. Two diagonally active cells
//! turn the two cells at their intersection into Bridge cells, and each active
//! cell rounds only the corners that touch no other active geometry. Drawing is
//! left to the caller, which reads a [`Snapshot`] after each toggle settles.

pub mod bridges;
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod neighbours;
pub mod patterns;
pub mod snapshot;

pub use config::{BridgeTogglePolicy, Config};
pub use error::{ConfigError, GridError};
pub use grid::{Cell, CellState, Corners, Grid};
pub use interaction::InteractionController;
pub use snapshot::{CellView, Snapshot};
