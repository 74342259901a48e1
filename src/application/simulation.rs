use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use super::config::{DEFAULT_DELAY, RunConfig};
use super::universe::Universe;
use crate::rendering::{RenderError, Renderer};

/// Pacing and length of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub generations: u64,
    pub delay: Duration,
    /// Stop as soon as a step leaves the grid unchanged
    pub stop_when_stable: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            delay: DEFAULT_DELAY,
            stop_when_stable: false,
        }
    }
}

impl From<&RunConfig> for SimulationConfig {
    fn from(config: &RunConfig) -> Self {
        Self {
            generations: config.generations,
            delay: config.delay,
            stop_when_stable: config.stop_when_stable,
        }
    }
}

/// What a finished run looked like
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub generations_run: u64,
    pub final_population: usize,
    /// The grid stopped changing before the requested generation count
    pub stabilized: bool,
}

/// Simulation drives a universe: render, step, pause, for a fixed number of generations.
pub struct Simulation {
    config: SimulationConfig,
    steps: u64,
    stabilized: bool,
    update_timer: f32,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            steps: 0,
            stabilized: false,
            update_timer: 0.0,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.steps >= self.config.generations || self.stabilized
    }

    /// Blocking loop for text output
    pub fn run<R: Renderer + ?Sized>(
        &mut self,
        universe: &mut Universe,
        renderer: &mut R,
    ) -> Result<RunSummary, RenderError> {
        info!(
            generations = self.config.generations,
            delay_ms = self.config.delay.as_millis() as u64,
            "starting simulation"
        );

        while !self.is_finished() {
            renderer.render(universe.generation(), universe.snapshot())?;
            self.advance(universe);
            if !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }
        }

        let summary = self.summary(universe);
        info!(
            generations_run = summary.generations_run,
            final_population = summary.final_population,
            stabilized = summary.stabilized,
            "simulation finished"
        );
        Ok(summary)
    }

    /// Frame-driven stepping for event loops: accumulates `delta_time` seconds
    /// and advances once per elapsed delay. Returns `true` if a step happened.
    pub fn tick(&mut self, universe: &mut Universe, delta_time: f32) -> bool {
        if self.is_finished() {
            return false;
        }

        self.update_timer += delta_time;
        if self.update_timer < self.config.delay.as_secs_f32() {
            return false;
        }

        self.update_timer = 0.0;
        self.advance(universe);
        true
    }

    pub fn summary(&self, universe: &Universe) -> RunSummary {
        RunSummary {
            generations_run: self.steps,
            final_population: universe.population(),
            stabilized: self.stabilized,
        }
    }

    fn advance(&mut self, universe: &mut Universe) {
        let changed = universe.step_generation();
        self.steps += 1;
        if self.config.stop_when_stable && !changed {
            debug!(generation = universe.generation(), "grid is stable");
            self.stabilized = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Grid, presets};
    use crate::rendering::RecordingRenderer;

    fn config(generations: u64, stop_when_stable: bool) -> SimulationConfig {
        SimulationConfig {
            generations,
            delay: Duration::ZERO,
            stop_when_stable,
        }
    }

    #[test]
    fn test_renders_once_per_generation() {
        let mut universe = Universe::new(5, 5);
        universe.place_pattern(&presets::blinker());
        let mut renderer = RecordingRenderer::default();

        let summary = Simulation::new(config(4, false))
            .run(&mut universe, &mut renderer)
            .unwrap();

        assert_eq!(renderer.frames.len(), 4);
        let generations: Vec<u64> = renderer.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, vec![0, 1, 2, 3]);
        assert_eq!(summary.generations_run, 4);
        assert_eq!(summary.final_population, 3);
        assert!(!summary.stabilized);
        assert_eq!(universe.generation(), 4);
    }

    #[test]
    fn test_first_frame_is_initial_grid() {
        let mut universe = Universe::from_grid(Grid::from_digit_rows(&["000", "111", "000"]));
        let mut renderer = RecordingRenderer::default();
        Simulation::new(config(1, false))
            .run(&mut universe, &mut renderer)
            .unwrap();

        assert_eq!(renderer.frames[0].1, Grid::from_digit_rows(&["000", "111", "000"]));
        assert_eq!(universe.snapshot(), &Grid::from_digit_rows(&["010", "010", "010"]));
    }

    #[test]
    fn test_stops_when_stable() {
        let mut universe = Universe::new(4, 4);
        universe.place_pattern(&presets::block());
        let mut renderer = RecordingRenderer::default();

        let summary = Simulation::new(config(50, true))
            .run(&mut universe, &mut renderer)
            .unwrap();

        assert_eq!(summary.generations_run, 1);
        assert!(summary.stabilized);
        assert_eq!(renderer.frames.len(), 1);
    }

    #[test]
    fn test_tick_waits_for_delay() {
        let mut universe = Universe::new(5, 5);
        universe.place_pattern(&presets::blinker());
        let mut simulation = Simulation::new(SimulationConfig {
            generations: 2,
            delay: Duration::from_millis(200),
            stop_when_stable: false,
        });

        assert!(!simulation.tick(&mut universe, 0.1));
        assert!(simulation.tick(&mut universe, 0.15));
        assert!(simulation.tick(&mut universe, 0.5));
        assert!(simulation.is_finished());
        assert!(!simulation.tick(&mut universe, 1.0));
        assert_eq!(universe.generation(), 2);
    }
}
