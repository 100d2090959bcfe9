//! The game loop: alternates turns between the two players, asking the input
//! provider for moves and reporting through the renderer until the game ends.

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::PlayError;
use crate::game::{Command, GameState, GameStatus, Player, TurnResult};
use crate::input::{parse_response, InputProvider};
use crate::render::{Notice, Renderer};

pub struct Controller<I, R> {
    state: GameState,
    input: I,
    renderer: R,
    quit_token: String,
    show_intro: bool,
}

impl<I: InputProvider, R: Renderer> Controller<I, R> {
    pub fn new(input: I, renderer: R, config: &AppConfig) -> Self {
        Self::with_state(GameState::initial(), input, renderer, config)
    }

    /// Start from an existing position instead of an empty board.
    pub fn with_state(state: GameState, input: I, renderer: R, config: &AppConfig) -> Self {
        Controller {
            state,
            input,
            renderer,
            quit_token: config.quit_token.clone(),
            show_intro: config.show_intro,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_parts(self) -> (GameState, I, R) {
        (self.state, self.input, self.renderer)
    }

    /// Play until someone wins, the board fills, or a player quits.
    pub fn run(&mut self) -> Result<GameStatus, PlayError> {
        if self.show_intro {
            self.notify(Notice::Intro)?;
        }

        loop {
            let player = match self.state.status() {
                GameStatus::AwaitingMove(player) => player,
                status => return Ok(status),
            };

            self.renderer
                .render_board(self.state.board())
                .map_err(PlayError::Output)?;
            self.play_turn(player)?;

            match self.state.status() {
                GameStatus::AwaitingMove(_) => {}
                GameStatus::Won(winner) => {
                    info!(winner = %winner, "game won");
                    self.finish(Notice::Won(winner))?;
                }
                GameStatus::Tied => {
                    info!("game tied");
                    self.finish(Notice::Tied)?;
                }
                GameStatus::Quit => {
                    info!(player = %player, "player quit");
                    self.notify(Notice::Quit)?;
                }
            }
        }
    }

    /// Ask `player` for moves until one is accepted or they quit.
    fn play_turn(&mut self, player: Player) -> Result<(), PlayError> {
        loop {
            self.notify(Notice::Prompt(player))?;

            let command = match self.input.next_response().map_err(PlayError::Input)? {
                Some(raw) => parse_response(&raw, &self.quit_token),
                None => {
                    debug!("input ended");
                    Ok(Command::Quit)
                }
            };

            match self.state.take_turn(command) {
                TurnResult::Accepted(_) | TurnResult::Quit => return Ok(()),
                TurnResult::Rejected(reason) => self.notify(Notice::Rejected(&reason))?,
            }
        }
    }

    fn finish(&mut self, notice: Notice<'_>) -> Result<(), PlayError> {
        self.renderer
            .render_board(self.state.board())
            .map_err(PlayError::Output)?;
        self.notify(notice)
    }

    fn notify(&mut self, notice: Notice<'_>) -> Result<(), PlayError> {
        self.renderer.notify(notice).map_err(PlayError::Output)
    }
}
