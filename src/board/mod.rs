//! The 8x8 board: tiles, the grid that owns occupancy, and setup layouts.

mod grid;
mod layout;
mod tile;

pub use grid::Grid;
pub use layout::{Layout, Placement};
pub use tile::{Tile, TileState};
