use std::io::{self, Write};

use thiserror::Error;

use crate::domain::Grid;

pub mod window;

/// Width of the separator line printed under each console frame
const SEPARATOR_WIDTH: usize = 64;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),
}

/// Presents one generation. Renderers never mutate the universe.
pub trait Renderer {
    fn render(&mut self, generation: u64, grid: &Grid) -> Result<(), RenderError>;
}

/// Plain-text renderer: one line per row, then a separator
pub struct ConsoleRenderer<W: Write> {
    out: W,
    alive: char,
    dead: char,
}

impl<W: Write> ConsoleRenderer<W> {
    /// `A` for alive, `-` for dead
    pub fn new(out: W) -> Self {
        Self::with_glyphs(out, 'A', '-')
    }

    pub fn with_glyphs(out: W, alive: char, dead: char) -> Self {
        Self { out, alive, dead }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, _generation: u64, grid: &Grid) -> Result<(), RenderError> {
        // A blank line stands in for clearing the screen.
        writeln!(self.out)?;
        for row in grid.rows() {
            let line: String = row
                .iter()
                .map(|cell| if cell.is_alive() { self.alive } else { self.dead })
                .collect();
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "\n{}", "_".repeat(SEPARATOR_WIDTH))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Records every frame it is handed. Handy for driving a simulation headless.
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<(u64, Grid)>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, generation: u64, grid: &Grid) -> Result<(), RenderError> {
        self.frames.push((generation, grid.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_frame_layout() {
        let grid = Grid::from_digit_rows(&["101", "010"]);
        let mut renderer = ConsoleRenderer::new(Vec::new());
        renderer.render(0, &grid).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let expected = format!("\nA-A\n-A-\n\n{}\n", "_".repeat(64));
        assert_eq!(text, expected);
    }

    #[test]
    fn test_custom_glyphs() {
        let grid = Grid::from_digit_rows(&["10"]);
        let mut renderer = ConsoleRenderer::with_glyphs(Vec::new(), '#', '.');
        renderer.render(3, &grid).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.starts_with("\n#.\n"));
    }

    #[test]
    fn test_recording_renderer_keeps_frames() {
        let mut renderer = RecordingRenderer::default();
        renderer.render(0, &Grid::new(1, 1)).unwrap();
        renderer.render(1, &Grid::new(1, 1)).unwrap();
        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.frames[1].0, 1);
    }
}
