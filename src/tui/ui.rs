//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_rules::{Player, Position, Square};

use crate::controller::GameController;
use crate::settings::Theme;

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    background: Color,
    foreground: Color,
    muted: Color,
    title: Color,
    status: Color,
    x: Color,
    o: Color,
    win: Color,
    hint: Color,
    cursor: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                muted: Color::Gray,
                title: Color::Blue,
                status: Color::Magenta,
                x: Color::Blue,
                o: Color::Red,
                win: Color::LightGreen,
                hint: Color::LightYellow,
                cursor: Color::LightCyan,
            },
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                muted: Color::DarkGray,
                title: Color::Cyan,
                status: Color::Yellow,
                x: Color::LightBlue,
                o: Color::LightRed,
                win: Color::Green,
                hint: Color::Yellow,
                cursor: Color::DarkGray,
            },
        }
    }

    fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, controller: &GameController, cursor: Position, notice: Option<&str>) {
    let settings = controller.settings();
    let palette = Palette::for_theme(settings.theme);
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Settings
            Constraint::Length(1),  // Scoreboard
            Constraint::Min(11),    // Board
            Constraint::Length(1),  // Notice
            Constraint::Length(2),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(palette.base().fg(palette.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(controller.status_text())
        .style(palette.base().fg(palette.status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[1]);

    let settings_line = format!(
        "Theme: {}   Emojis: {}   Mode: {}",
        settings.theme.label(),
        if settings.use_emojis { "on" } else { "off" },
        settings.mode.label(),
    );
    frame.render_widget(
        Paragraph::new(settings_line)
            .style(palette.base().fg(palette.muted))
            .alignment(Alignment::Center),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(controller.scores().to_string())
            .style(palette.base().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[3],
    );

    draw_board(frame, chunks[4], controller, cursor, &palette);

    if let Some(notice) = notice {
        frame.render_widget(
            Paragraph::new(notice)
                .style(palette.base().fg(palette.o))
                .alignment(Alignment::Center),
            chunks[5],
        );
    }

    let help = Paragraph::new(
        "Arrows/Enter or 1-9: play | N: new game | H: hint | R: reset scores\n\
         T: theme | E: emojis | M: mode | Q: quit",
    )
    .style(palette.base().fg(palette.muted))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[6]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    controller: &GameController,
    cursor: Position,
    palette: &Palette,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, controller, cursor, palette, row);
    }
    draw_separator(frame, rows[1], palette);
    draw_separator(frame, rows[3], palette);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    controller: &GameController,
    cursor: Position,
    palette: &Palette,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, chunk, controller, cursor, palette, pos);
        }
    }
    draw_separator_vertical(frame, cols[1], palette);
    draw_separator_vertical(frame, cols[3], palette);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    controller: &GameController,
    cursor: Position,
    palette: &Palette,
    pos: Position,
) {
    let state = controller.state();
    let square = state.board().get(pos);

    let (symbol, base_style) = match square {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            palette.base().fg(palette.muted),
        ),
        Square::Occupied(player) => {
            let colour = match player {
                Player::X => palette.x,
                Player::O => palette.o,
            };
            (
                controller.mark(player).to_string(),
                palette.base().fg(colour).add_modifier(Modifier::BOLD),
            )
        }
    };

    let on_winning_line = state
        .phase()
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let style = if on_winning_line {
        base_style.bg(palette.win)
    } else if controller.hint() == Some(pos) {
        base_style.bg(palette.hint)
    } else if pos == cursor {
        base_style.bg(palette.cursor)
    } else {
        base_style
    };

    // Pad vertically so the mark sits in the middle of the 3-line cell.
    let text = vec![
        Line::from(Span::styled("", style)),
        Line::from(Span::styled(symbol, style)),
        Line::from(Span::styled("", style)),
    ];
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(palette.base().fg(palette.muted));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("│\n│\n│").style(palette.base().fg(palette.muted));
    frame.render_widget(sep, area);
}

/// A `width` x `height` box centred in `area`, shrunk to fit.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_centred_in_area() {
        let area = Rect::new(2, 1, 60, 21);
        assert_eq!(center_rect(area, 40, 11), Rect::new(12, 6, 40, 11));
    }

    #[test]
    fn test_board_shrinks_to_small_area() {
        let area = Rect::new(0, 0, 30, 8);
        assert_eq!(center_rect(area, 40, 11), area);
    }
}
