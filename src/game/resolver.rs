use super::board::{Board, Cell, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    ColumnOutOfRange,

    #[error("column is full")]
    ColumnFull,

    #[error("game is over")]
    GameOver,
}

/// Find the row a piece dropped into `column` would land on.
///
/// Pieces fall to the lowest empty cell, so the scan runs from the bottom row
/// up. The board is never modified.
pub fn resolve(board: &Board, column: usize) -> Result<usize, MoveError> {
    if column >= COLS {
        return Err(MoveError::ColumnOutOfRange);
    }
    if board.top_cell(column) != Cell::Empty {
        return Err(MoveError::ColumnFull);
    }

    (0..ROWS)
        .rev()
        .find(|&row| board.get(column, row) == Cell::Empty)
        .ok_or(MoveError::ColumnFull)
}
