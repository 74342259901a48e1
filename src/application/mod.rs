mod config;
mod simulation;
mod universe;

pub use config::{ConfigError, DEFAULT_DELAY, InitialPattern, RunConfig};
pub use simulation::{RunSummary, Simulation, SimulationConfig};
pub use universe::{EngineState, Universe, UniverseError};
