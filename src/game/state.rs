use tracing::debug;

use super::command::{Command, InputError};
use super::resolver::{resolve, MoveError};
use super::win::is_winner;
use super::{Board, Player, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Player),
    Won(Player),
    Tied,
    Quit,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }
}

/// An accepted move and where the piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    pub column: usize,
    pub row: usize,
}

/// Why a turn did not produce a move. The same player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    Accepted(Move),
    Rejected(Rejection),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::from_board(Board::new(), Player::FIRST)
    }

    /// Resume play on an existing board with `to_move` on turn.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        GameState {
            board,
            status: GameStatus::AwaitingMove(to_move),
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player on turn, or `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::AwaitingMove(player) => Some(player),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column` and advance the game.
    ///
    /// On error nothing changes and the same player stays on turn.
    pub fn apply_move(&mut self, column: usize) -> Result<Move, MoveError> {
        let player = self.current_player().ok_or(MoveError::GameOver)?;
        let row = resolve(&self.board, column)?;
        self.board.set(column, row, player.to_cell());

        self.status = if is_winner(player, &self.board) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::AwaitingMove(player.other())
        };

        Ok(Move {
            player,
            column,
            row,
        })
    }

    /// End the game without a result. A finished game keeps its result.
    pub fn quit(&mut self) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.status = GameStatus::Quit;
        Ok(())
    }

    /// Run one turn from a parsed player response.
    ///
    /// Once the game is over every response is rejected with `GameOver`.
    pub fn take_turn(&mut self, input: Result<Command, InputError>) -> TurnResult {
        if self.is_terminal() {
            debug!(status = ?self.status, "turn after game over");
            return TurnResult::Rejected(MoveError::GameOver.into());
        }

        let command = match input {
            Ok(command) => command,
            Err(err) => {
                debug!(error = %err, "input rejected");
                return TurnResult::Rejected(err.into());
            }
        };

        let label = match command {
            Command::Quit => {
                self.status = GameStatus::Quit;
                return TurnResult::Quit;
            }
            Command::Drop { label } => label,
        };

        let result = column_for_label(label).and_then(|column| self.apply_move(column));
        match result {
            Ok(mv) => {
                debug!(player = %mv.player, column = mv.column, row = mv.row, "move accepted");
                TurnResult::Accepted(mv)
            }
            Err(err) => {
                debug!(label, error = %err, "move rejected");
                TurnResult::Rejected(err.into())
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Map a 1-based column label to a column index.
fn column_for_label(label: i64) -> Result<usize, MoveError> {
    label
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .ok_or(MoveError::ColumnOutOfRange)
}
