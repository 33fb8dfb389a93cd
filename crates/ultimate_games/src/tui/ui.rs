//! Stateless UI rendering for the nested board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ultimate_tictactoe::{Address, Cell, GameState, Player, Square};

use super::app::App;
use crate::render::owner_map;

const BOARD_WIDTH: u16 = 29;
const BOARD_HEIGHT: u16 = 11;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(13),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Ultimate Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(16)])
        .split(chunks[1]);

    draw_board(frame, middle[0], app.game(), *app.cursor());
    draw_owners(frame, middle[1], app.game());

    let status = Paragraph::new(app.status().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows move, Enter places, 'r' restarts, 'q' quits")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, game: &GameState, cursor: Address) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for row in 0..9 {
        if row == 3 || row == 6 {
            lines.push(Line::styled(
                "─────────┼─────────┼─────────",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let mut spans = Vec::with_capacity(11);
        for col in 0..9 {
            if col == 3 || col == 6 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            if let Some(address) = Address::from_global(row, col) {
                spans.push(cell_span(game, address, address == cursor));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell_span(game: &GameState, address: Address, under_cursor: bool) -> Span<'static> {
    let sub = game.board().sub_board(address.outer);
    let targeted = !game.is_over()
        && game
            .active_constraint()
            .map_or(sub.is_playable(), |pos| pos == address.outer);

    let (symbol, mut style) = match sub.get(address.inner) {
        Square::Empty if targeted => (" · ", Style::default().fg(Color::Green)),
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if sub.is_closed() {
        style = style.add_modifier(Modifier::DIM);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(symbol, style)
}

fn draw_owners(frame: &mut Frame, area: Rect, game: &GameState) {
    let owners = Paragraph::new(owner_map(game))
        .alignment(Alignment::Center)
        .block(Block::default().title("Sub-boards").borders(Borders::ALL));
    frame.render_widget(owners, Rect { height: area.height.min(5), ..area });
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
