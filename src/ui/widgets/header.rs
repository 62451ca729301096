//! Header banner: product name, tagline, version.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::colors;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                " ❯ SyntaxScope ",
                Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("v{VERSION}"), Style::default().fg(colors::MUTED)),
        ]),
        Line::from(Span::styled(
            "   Instant reference for bash, zsh, PowerShell and Python one-liners",
            Style::default().fg(colors::TEXT_DIM),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
