//! Shell filter tabs: one per category, active one highlighted.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::CATEGORIES;
use crate::ui::theme::colors;

/// Display names for the category keys, in [`CATEGORIES`] order.
const DISPLAY: &[&str] = &["Bash", "Zsh", "PowerShell", "Python"];

pub fn render(f: &mut Frame, active: Option<&str>, area: ratatui::prelude::Rect) {
    let mut spans = vec![Span::styled(" Shell: ", Style::default().fg(colors::TEXT_DIM))];
    let all_selected = active.is_none();
    spans.push(tab("All", all_selected));
    for (key, name) in CATEGORIES.iter().zip(DISPLAY) {
        spans.push(Span::raw(" "));
        spans.push(tab(name, active == Some(*key)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn tab(name: &str, selected: bool) -> Span<'_> {
    if selected {
        Span::styled(
            format!(" {name} "),
            Style::default()
                .fg(colors::BG)
                .bg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {name} "), Style::default().fg(colors::TEXT_DIM))
    }
}
