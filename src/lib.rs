//! # Connect Four
//!
//! A two-player Connect Four game: players take turns dropping checkers down
//! columns, and the first to get four in a row wins. The game logic is a pure,
//! embeddable core; a terminal UI shell built with Ratatui renders it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn/win state machine
//! - [`ui`] — Terminal UI: board view, input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
