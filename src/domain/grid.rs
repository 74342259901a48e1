use std::fmt;

use rand::Rng;

use super::Cell;

/// Grid holds a bounded `rows × cols` rectangle of cells in row-major order.
/// Positions outside the rectangle do not exist: there is no wrapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a grid from rows of `'1'`/`'0'` characters.
    /// The widest row sets the column count; shorter rows are dead-filled.
    pub fn from_digit_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let cols = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.as_ref().chars().enumerate() {
                grid.set(r, c, Cell::from_digit(ch));
            }
        }
        grid
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Count live cells in the Moore neighborhood of `(row, col)`.
    /// Neighbors that fall outside the grid count as dead.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure evolution: every next state is computed from `self` into a fresh grid
    pub fn evolve(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(row, col, current)| current.evolve(self.count_live_neighbors(row, col)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Set each cell alive independently with probability `alive_percentage / 100`.
    /// Values above 100 behave like 100.
    pub fn randomize<R: Rng + ?Sized>(mut self, alive_percentage: u8, rng: &mut R) -> Self {
        let p = f64::from(alive_percentage.min(100)) / 100.0;
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(p)));
        self
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.cols.max(1)).take(self.rows)
    }
}

/// Writes the grid in pattern-file form: a `rows cols` header, then one digit row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.to_digit()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
