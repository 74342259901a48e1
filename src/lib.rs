// Domain layer - cells, grids, pattern text and presets
pub mod domain;

// Application layer - the universe engine and the loop that drives it
pub mod application;

// Infrastructure layer - console and window output
pub mod rendering;

// Re-exports for convenience
pub use application::{RunConfig, Simulation, SimulationConfig, Universe, UniverseError};
pub use domain::{Cell, Grid, Pattern, presets};
pub use rendering::{ConsoleRenderer, Renderer};
