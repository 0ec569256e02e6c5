//! Procedural cubic lattice of points parented under a single container.

pub mod grid;
pub mod spawn;

pub use grid::*;
pub use spawn::*;
