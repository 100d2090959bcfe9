use super::board::{Board, COLS, ROWS};
use super::player::Player;

/// Number of aligned pieces needed to win.
pub const LINE_LENGTH: usize = 4;

/// Column and row step for each line orientation.
const DIRECTIONS: [(isize, isize); 4] = [
    (1, 0),  // horizontal
    (0, 1),  // vertical
    (1, 1),  // diagonal, column and row both increasing
    (1, -1), // diagonal, row decreasing as column increases
];

/// Check whether `player` owns every cell of some line of four on the board.
///
/// Every start cell and orientation is tried; a line is only considered when
/// its far end stays on the grid, so the start ranges follow from the board
/// dimensions. Nothing is cached between calls.
pub fn is_winner(player: Player, board: &Board) -> bool {
    let tag = player.to_cell();

    DIRECTIONS.iter().any(|&(dc, dr)| {
        (0..ROWS).any(|row| {
            (0..COLS).any(|col| {
                line(col, row, dc, dr)
                    .is_some_and(|cells| cells.iter().all(|&(c, r)| board.get(c, r) == tag))
            })
        })
    })
}

/// The cells of the line starting at (col, row), or `None` if it leaves the grid.
fn line(col: usize, row: usize, dc: isize, dr: isize) -> Option<[(usize, usize); LINE_LENGTH]> {
    let reach = LINE_LENGTH as isize - 1;
    let end_col = col.checked_add_signed(dc * reach)?;
    let end_row = row.checked_add_signed(dr * reach)?;
    if end_col >= COLS || end_row >= ROWS {
        return None;
    }

    let mut cells = [(col, row); LINE_LENGTH];
    for (step, cell) in cells.iter_mut().enumerate() {
        let step = step as isize;
        *cell = (
            col.checked_add_signed(dc * step)?,
            row.checked_add_signed(dr * step)?,
        );
    }
    Some(cells)
}
