use super::app::{DialogKind, DialogState};
use crate::session::APP_TITLE;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const MIN_DIALOG_WIDTH: u16 = 36;
const INPUT_PREFIX: &str = "> ";
const CURSOR: &str = "█";

pub fn draw(f: &mut Frame, dialog: &DialogState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Backdrop + dialog
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_backdrop(f, chunks[0]);
    draw_dialog(f, dialog, chunks[0]);
    draw_status_bar(f, dialog, chunks[1]);
}

fn draw_backdrop(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", APP_TITLE));
    f.render_widget(block, area);
}

fn border_color(kind: DialogKind) -> Color {
    match kind {
        DialogKind::Question => Color::Yellow,
        DialogKind::Info => Color::Cyan,
        DialogKind::Error => Color::Red,
    }
}

/// Center a box sized to the dialog text, clamped to `area`.
pub fn dialog_area(dialog: &DialogState, area: Rect) -> Rect {
    let text_width = dialog
        .body
        .lines()
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(dialog.title.width() + 2))
        .chain(std::iter::once(
            INPUT_PREFIX.width() + dialog.input.width() + CURSOR.width(),
        ))
        .max()
        .unwrap_or(0);
    let width = (text_width as u16)
        .saturating_add(4)
        .max(MIN_DIALOG_WIDTH)
        .min(area.width);

    let mut lines = dialog.body.lines().count() as u16;
    if dialog.accepts_input() {
        lines += 2; // blank + input
    }
    let height = lines.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_dialog(f: &mut Frame, dialog: &DialogState, area: Rect) {
    let rect = dialog_area(dialog, area);
    let color = border_color(dialog.kind);

    let body_style = match dialog.kind {
        DialogKind::Error => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let mut lines: Vec<Line> = dialog
        .body
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), body_style)))
        .collect();

    if dialog.accepts_input() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(INPUT_PREFIX, Style::default().fg(Color::Yellow)),
            Span::styled(
                dialog.input.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(CURSOR, Style::default().fg(Color::White)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(Span::styled(
                    format!(" {} ", dialog.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, rect);
    f.render_widget(paragraph, rect);
}

fn draw_status_bar(f: &mut Frame, dialog: &DialogState, area: Rect) {
    let help_text = if dialog.accepts_input() {
        " Enter:Submit  Backspace:Delete  Esc:Cancel "
    } else {
        " Enter:OK "
    };

    let help = Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::Cyan),
    )))
    .block(Block::default().borders(Borders::ALL).title(" Keys "));

    f.render_widget(help, area);
}
