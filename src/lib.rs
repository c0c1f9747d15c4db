// Domain layer - simulation engine
pub mod domain;

// Application layer - controller state
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Engine, Universe, UniverseError};
pub use application::AppState;
pub use ui::Button;
