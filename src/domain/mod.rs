mod cell;
mod grid;
mod pattern_source;
mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use pattern_source::{PatternError, parse_pattern};
pub use patterns::{Pattern, presets};
