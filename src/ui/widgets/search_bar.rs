//! Search bar: prompt, live query, placeholder and cursor.

use ratatui::{
    layout::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

const PLACEHOLDER: &str = "Search commands (e.g., 'list files', 'find text')";

pub fn render(f: &mut Frame, query: &str, area: ratatui::prelude::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let prompt = " ▸ ";
    let line = if query.is_empty() {
        Line::from(vec![
            Span::styled(prompt, Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(PLACEHOLDER, Style::default().fg(colors::MUTED)),
        ])
    } else {
        Line::from(vec![
            Span::styled(prompt, Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(query, Style::default().fg(colors::TEXT)),
        ])
    };
    f.render_widget(Paragraph::new(line), inner);

    let cursor_x = inner.x + 3 + query.chars().count() as u16;
    let x = cursor_x.min(inner.x + inner.width.saturating_sub(1));
    f.set_cursor_position(Position { x, y: inner.y });
}
