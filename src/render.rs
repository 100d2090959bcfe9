//! Text output: the board grid and every message shown to the players.

use std::io::{self, Write};

use crate::game::{Board, Cell, MoveError, Player, Rejection, COLS};

/// Display symbol for each cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Symbols {
    pub empty: char,
    pub player_x: char,
    pub player_o: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            empty: '.',
            player_x: 'X',
            player_o: 'O',
        }
    }
}

impl Symbols {
    pub fn cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::X => self.player_x,
            Cell::O => self.player_o,
        }
    }

    pub fn player(&self, player: Player) -> char {
        self.cell(player.to_cell())
    }
}

/// Something the players need to be told.
#[derive(Debug, Clone, Copy)]
pub enum Notice<'a> {
    Intro,
    Prompt(Player),
    Rejected(&'a Rejection),
    Won(Player),
    Tied,
    Quit,
}

pub trait Renderer {
    fn render_board(&mut self, board: &Board) -> io::Result<()>;

    fn notify(&mut self, notice: Notice<'_>) -> io::Result<()>;
}

const INTRO: &str = "Four-in-a-Row,
A two-player game where each player drops pieces into a column. The goal is to
line up four pieces in a row (horizontally, vertically, or diagonally).
";

/// Plain-text renderer writing to any `Write`.
pub struct TextRenderer<W> {
    out: W,
    symbols: Symbols,
    quit_token: String,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, symbols: Symbols, quit_token: impl Into<String>) -> Self {
        TextRenderer {
            out,
            symbols,
            quit_token: quit_token.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// The bordered grid, one line per row, with column labels on top.
    pub fn board_text(&self, board: &Board) -> String {
        let border = format!("+{}+", "-".repeat(COLS));
        let labels: String = (1..=COLS).map(|label| label.to_string()).collect();

        let mut text = format!("\n {labels}\n{border}\n");
        let cells: Vec<char> = board
            .cells_row_major()
            .map(|cell| self.symbols.cell(cell))
            .collect();
        for row in cells.chunks(COLS) {
            text.push('|');
            text.extend(row);
            text.push_str("|\n");
        }
        text.push_str(&border);
        text
    }

    fn rejection_text(rejection: &Rejection) -> String {
        match rejection {
            Rejection::Move(MoveError::ColumnFull) => {
                "That column is full, choose another one.".to_string()
            }
            Rejection::Move(MoveError::GameOver) => "The game is over.".to_string(),
            Rejection::Move(MoveError::ColumnOutOfRange) | Rejection::Input(_) => {
                format!("Enter a number from 1 to {COLS}.")
            }
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_board(&mut self, board: &Board) -> io::Result<()> {
        let text = self.board_text(board);
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    fn notify(&mut self, notice: Notice<'_>) -> io::Result<()> {
        match notice {
            Notice::Intro => writeln!(self.out, "{INTRO}")?,
            Notice::Prompt(player) => {
                writeln!(
                    self.out,
                    "Player {}, enter 1 to {COLS} or '{}' to quit:",
                    self.symbols.player(player),
                    self.quit_token
                )?;
                write!(self.out, "> ")?;
            }
            Notice::Rejected(rejection) => {
                writeln!(self.out, "{}", Self::rejection_text(rejection))?
            }
            Notice::Won(player) => {
                writeln!(self.out, "Player {} has won!", self.symbols.player(player))?
            }
            Notice::Tied => writeln!(self.out, "It's a tie!")?,
            Notice::Quit => writeln!(self.out, "Thanks for playing!")?,
        }
        self.out.flush()
    }
}
