use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Grid, Pattern, PatternError, parse_pattern};

/// Errors surfaced by the engine. Nothing here is retried internally.
#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("pattern source {} is unavailable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),
}

/// Whether the universe holds a meaningful grid yet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Zero-sized grid waiting for a load
    Uninitialized,
    Populated,
}

/// Universe owns the current generation and advances it under B3/S23.
#[derive(Clone, Debug, Default)]
pub struct Universe {
    grid: Grid,
    generation: u64,
}

impl Universe {
    /// Create a universe with every cell dead.
    /// `0 × 0` is allowed and leaves the universe uninitialized until a load.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            generation: 0,
        }
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    pub fn state(&self) -> EngineState {
        if self.grid.is_empty() {
            EngineState::Uninitialized
        } else {
            EngineState::Populated
        }
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Generations stepped since the grid was last seeded, loaded or reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Read-only view of the current generation
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    /// Overwrite every cell, each alive with probability `alive_percentage / 100`.
    /// The caller owns the random source, so a seeded RNG gives a reproducible grid.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, alive_percentage: u8, rng: &mut R) {
        self.grid = std::mem::take(&mut self.grid).randomize(alive_percentage, rng);
        self.generation = 0;
        info!(
            alive_percentage,
            population = self.grid.population(),
            "seeded universe"
        );
    }

    /// Kill every cell, keeping the dimensions
    pub fn reset(&mut self) {
        self.grid = std::mem::take(&mut self.grid).clear();
        self.generation = 0;
    }

    /// Stamp a preset onto the current grid, centred
    pub fn place_pattern(&mut self, pattern: &Pattern) {
        pattern.place_centered(&mut self.grid);
        debug!(pattern = pattern.name, "placed pattern");
    }

    /// Live cells among the eight neighbors of `(row, col)`; out-of-bounds neighbors count as dead
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.grid.count_live_neighbors(row, col)
    }

    /// Advance one generation. Every next state is computed from the current
    /// grid before it is replaced, so updates never observe each other.
    ///
    /// Returns `true` if any cell changed.
    pub fn step_generation(&mut self) -> bool {
        if self.state() == EngineState::Uninitialized {
            return false;
        }

        let next = self.grid.evolve();
        let changed = next != self.grid;
        self.grid = next;
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.grid.population(),
            changed,
            "stepped generation"
        );
        changed
    }

    /// Replace the grid with the pattern stored at `path`
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<(), UniverseError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| UniverseError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        // Invalid UTF-8 decodes to U+FFFD, which reads as a dead cell.
        self.load_from_str(&String::from_utf8_lossy(&bytes))?;
        let (rows, cols) = self.grid.dimensions();
        info!(path = %path.display(), rows, cols, "loaded pattern");
        Ok(())
    }

    /// Replace the grid with a pattern held in memory
    pub fn load_from_str(&mut self, text: &str) -> Result<(), UniverseError> {
        self.grid = parse_pattern(text)?;
        self.generation = 0;
        Ok(())
    }
}
