use super::{Cell, Grid};

/// A named arrangement of live cells that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) of live cells relative to the top-left corner
}

impl Pattern {
    /// Create a new pattern from live cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, description, rows, cols, cells }
    }

    /// Place pattern with its top-left corner at `(row, col)`.
    /// Cells falling outside the grid are clipped.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
    }

    /// Place pattern in the middle of the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let (rows, cols) = grid.dimensions();
        let row = rows.saturating_sub(self.rows) / 2;
        let col = cols.saturating_sub(self.cols) / 2;
        self.place_on(grid, row, col);
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        // One quadrant, mirrored into the other three around row/col 6.
        let quadrant = [
            (0, 2), (0, 3), (0, 4),
            (2, 0), (3, 0), (4, 0),
            (2, 5), (3, 5), (4, 5),
            (5, 2), (5, 3), (5, 4),
        ];
        let cells = quadrant
            .iter()
            .flat_map(|&(r, c)| [(r, c), (r, 12 - c), (12 - r, c), (12 - r, 12 - c)])
            .collect();
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            pulsar(),
            r_pentomino(),
        ]
    }

    /// Look up a preset by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        let pulsar = presets::pulsar();
        assert_eq!((pulsar.rows, pulsar.cols), (13, 13));
        assert_eq!(pulsar.cells.len(), 48);
    }

    #[test]
    fn test_place_centered() {
        let mut grid = Grid::new(5, 5);
        presets::block().place_centered(&mut grid);
        assert_eq!(
            grid,
            Grid::from_digit_rows(&["00000", "01100", "01100", "00000", "00000"])
        );
    }

    #[test]
    fn test_place_clips_at_border() {
        let mut grid = Grid::new(2, 2);
        presets::glider().place_on(&mut grid, 0, 0);
        assert_eq!(grid, Grid::from_digit_rows(&["01", "00"]));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(presets::by_name("bLiNkEr").map(|p| p.name), Some("Blinker"));
        assert!(presets::by_name("unicorn").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_oscillators_return_after_period() {
        let oscillators = [
            (presets::blinker(), 2),
            (presets::toad(), 2),
            (presets::beacon(), 2),
            (presets::pulsar(), 3),
        ];
        for (pattern, period) in oscillators {
            let mut grid = Grid::new(pattern.rows + 6, pattern.cols + 6);
            pattern.place_on(&mut grid, 3, 3);
            let start = grid.clone();
            for _ in 0..period {
                grid = grid.evolve();
            }
            assert_eq!(grid, start, "{} should have period {}", pattern.name, period);
        }
    }
}
