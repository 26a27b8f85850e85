use crate::config::PlayersConfig;
use crate::game::{Cell, GameEngine, GamePhase, Player, WinningLine};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    players: &PlayersConfig,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, players, chunks[0]);
    render_board(frame, engine, players, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player, players: &PlayersConfig) -> Color {
    match player {
        Player::One => super::terminal_color(players.one),
        Player::Two => super::terminal_color(players.two),
    }
}

fn render_header(
    frame: &mut Frame,
    engine: &GameEngine,
    players: &PlayersConfig,
    area: ratatui::layout::Rect,
) {
    let (status, color) = match engine.phase() {
        GamePhase::InProgress => {
            let player = engine.current_player();
            (
                format!("{}'s turn...", player.name()),
                player_color(player, players),
            )
        }
        GamePhase::Won { winner, .. } => (
            format!("Game Over — {} wins!", winner.name()),
            player_color(*winner, players),
        ),
        GamePhase::Tied => ("Game Over — it's a tie".to_string(), Color::Gray),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Let's play Connect 4!"),
        );

    frame.render_widget(header, area);
}

fn winning_line(engine: &GameEngine) -> Option<&WinningLine> {
    match engine.phase() {
        GamePhase::Won { line, .. } => Some(line),
        _ => None,
    }
}

fn render_board(
    frame: &mut Frame,
    engine: &GameEngine,
    players: &PlayersConfig,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let rows = engine.board().rows();
    let columns = engine.board().columns();
    let line = winning_line(engine);

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding to match "  ║"
    for col in 0..columns {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(columns * 3))));

    // Board rows; winning cells get the highlight color, the way the
    // original paints cyan ovals over the winning tiles.
    for row in 0..rows {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..columns {
            let highlighted = line.is_some_and(|l| l.contains(&(row, col)));
            let (symbol, color) = match engine.occupant_at(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::One if highlighted => (" ● ", Color::Cyan),
                Cell::Two if highlighted => (" ● ", Color::Cyan),
                Cell::One => (" ● ", player_color(Player::One, players)),
                Cell::Two => (" ● ", player_color(Player::Two, players)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(columns * 3))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Play Again  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
