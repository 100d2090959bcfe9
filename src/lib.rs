//! # Four-in-a-Row
//!
//! A two-player game played on a 7x6 grid: players take turns dropping pieces
//! into columns, and the first to line up four pieces horizontally, vertically
//! or diagonally wins.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, move resolution, win detection, turn state machine
//! - [`input`] — Parsing player responses and reading them line by line
//! - [`render`] — Text board and player-facing messages
//! - [`controller`] — The game loop tying input, engine and renderer together
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
