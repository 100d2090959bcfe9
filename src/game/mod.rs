//! Core Four-in-a-Row logic: board representation, move resolution, win
//! detection, and the turn state machine.

mod board;
mod command;
mod player;
mod resolver;
mod state;
mod win;

pub use board::{Board, Cell, CoordinateError, COLS, ROWS};
pub use command::{Command, InputError};
pub use player::Player;
pub use resolver::{resolve, MoveError};
pub use state::{GameState, GameStatus, Move, Rejection, TurnResult};
pub use win::{is_winner, LINE_LENGTH};
