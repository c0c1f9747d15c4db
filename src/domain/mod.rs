mod cell;
mod engine;
mod universe;

pub use cell::Cell;
pub use engine::Engine;
pub use universe::{Universe, UniverseError};
