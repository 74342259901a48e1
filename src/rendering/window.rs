//! Windowed frontend built on macroquad.
//!
//! The grid is scaled to fill the window above a one-line status bar. Space
//! pauses, Escape closes the window.

use macroquad::prelude::*;
use tracing::info;

use crate::application::{Simulation, Universe};
use crate::domain::Grid;

const STATUS_BAR_HEIGHT: f32 = 28.0;

/// Window settings for a universe of the given size
pub fn window_conf(rows: usize, cols: usize) -> Conf {
    // Aim for 10px cells, within sane window bounds.
    let width = (cols as f32 * 10.0).clamp(320.0, 1600.0);
    let height = (rows as f32 * 10.0).clamp(240.0, 1000.0) + STATUS_BAR_HEIGHT;
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

/// Open a window and drive the simulation from its frame loop.
/// Blocks until the window is closed.
pub fn run_windowed(universe: Universe, simulation: Simulation) {
    let (rows, cols) = universe.dimensions();
    // Started from a plain main, since the window is only one of two frontends picked at runtime.
    macroquad::Window::from_config(window_conf(rows, cols), event_loop(universe, simulation));
}

async fn event_loop(mut universe: Universe, mut simulation: Simulation) {
    let mut paused = false;
    let mut reported = false;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
        }

        if !paused {
            simulation.tick(&mut universe, get_frame_time());
        }

        if simulation.is_finished() && !reported {
            let summary = simulation.summary(&universe);
            info!(
                generations_run = summary.generations_run,
                final_population = summary.final_population,
                stabilized = summary.stabilized,
                "simulation finished"
            );
            reported = true;
        }

        clear_background(BLACK);
        draw_grid(universe.snapshot());
        draw_status(&universe, &simulation, paused);

        next_frame().await;
    }
}

/// Size of one cell so the whole grid fits the drawable area
fn cell_size(grid: &Grid) -> f32 {
    let (rows, cols) = grid.dimensions();
    if rows == 0 || cols == 0 {
        return 0.0;
    }
    let area_height = (screen_height() - STATUS_BAR_HEIGHT).max(0.0);
    (screen_width() / cols as f32).min(area_height / rows as f32)
}

fn draw_grid(grid: &Grid) {
    let size = cell_size(grid);
    if size <= 0.0 {
        return;
    }

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let dead_cell_color = Color::from_rgba(15, 15, 15, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_grid_lines = size >= 4.0;

    for (row, col, cell) in grid.iter_cells() {
        let x = col as f32 * size;
        let y = STATUS_BAR_HEIGHT + row as f32 * size;

        if cell.is_alive() {
            draw_rectangle(x, y, size, size, alive_color);
        } else if draw_grid_lines {
            draw_rectangle(x, y, size, size, dead_cell_color);
        }

        if draw_grid_lines {
            draw_rectangle_lines(x, y, size, size, 1.0, grid_line_color);
        }
    }
}

fn draw_status(universe: &Universe, simulation: &Simulation, paused: bool) {
    let status = if simulation.is_finished() {
        "Finished"
    } else if paused {
        "Paused"
    } else {
        "Running"
    };
    let text = format!(
        "Generation {} / {}   Population {}   {}",
        universe.generation(),
        simulation.config().generations,
        universe.population(),
        status
    );
    draw_text(&text, 8.0, 20.0, 20.0, Color::from_rgba(180, 180, 180, 255));
}
