//! Terminal UI shell. Renders the board, collects column input, and consumes
//! the engine's move results; all game state lives in the engine.

mod app;
mod game_view;

use ratatui::style::Color;

use crate::config::PieceColor;

pub use app::App;

fn terminal_color(color: PieceColor) -> Color {
    match color {
        PieceColor::Red => Color::Red,
        PieceColor::Black => Color::DarkGray,
        PieceColor::Yellow => Color::Yellow,
        PieceColor::Blue => Color::Blue,
        PieceColor::Green => Color::Green,
        PieceColor::Magenta => Color::Magenta,
        PieceColor::Cyan => Color::Cyan,
        PieceColor::White => Color::White,
    }
}
