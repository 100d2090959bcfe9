pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

/// A coordinate outside the 7x6 grid. Normal play never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate (column {column}, row {row})")]
pub struct CoordinateError {
    pub column: usize,
    pub row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    fn check(column: usize, row: usize) -> Result<(), CoordinateError> {
        if column < COLS && row < ROWS {
            Ok(())
        } else {
            Err(CoordinateError { column, row })
        }
    }

    /// Get the cell at (column, row), or an error if the coordinate is off the grid.
    pub fn try_get(&self, column: usize, row: usize) -> Result<Cell, CoordinateError> {
        Self::check(column, row)?;
        Ok(self.cells[row][column])
    }

    /// Get the cell at (column, row).
    /// Row 0 is the top, row 5 is the bottom.
    ///
    /// # Panics
    ///
    /// Panics on a coordinate outside the grid.
    pub fn get(&self, column: usize, row: usize) -> Cell {
        match self.try_get(column, row) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_set(&mut self, column: usize, row: usize, cell: Cell) -> Result<(), CoordinateError> {
        Self::check(column, row)?;
        self.cells[row][column] = cell;
        Ok(())
    }

    /// Overwrite a single cell.
    ///
    /// # Panics
    ///
    /// Panics on a coordinate outside the grid.
    pub fn set(&mut self, column: usize, row: usize, cell: Cell) {
        if let Err(err) = self.try_set(column, row, cell) {
            panic!("{err}");
        }
    }

    /// The topmost cell of a column
    pub fn top_cell(&self, column: usize) -> Cell {
        self.get(column, 0)
    }

    /// Check if a column is full. Columns off the grid count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        self.top_cell(column) != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// All cells in row-major order: row 0 first, columns left to right.
    pub fn cells_row_major(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
