//! Core Connect Four game logic: board representation, player types, and the
//! turn/win-detection state machine. No rendering concerns live here; the UI
//! consumes result values and read-only queries.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, GameError, MIN_DIMENSION};
pub use engine::{GameEngine, GamePhase, MoveResult, WinningLine};
pub use player::Player;
