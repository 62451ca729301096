//! Status bar: catalog size or copy confirmation on the left, key hints right.

use ratatui::{
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::theme::colors;

pub fn render(f: &mut Frame, app: &App, area: ratatui::prelude::Rect) {
    let left = if let Some(copied) = app.state.last_copied() {
        format!(" ✓ Copied {copied}")
    } else if app.store().is_empty() {
        " No syntax data loaded".to_string()
    } else {
        format!(" {} commands", app.store().len())
    };
    let right = " ↑↓ select  Tab/Alt+1-4 shell  Enter copy  Esc back  Ctrl+C quit ";
    let width = area.width as usize;
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    let pad = width.saturating_sub(left_len + right_len);
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    let fg = if app.state.last_copied().is_some() { colors::SUCCESS } else { colors::MUTED };
    let span = Span::styled(line, Style::default().fg(fg).bg(colors::ELEVATED));
    f.render_widget(Paragraph::new(span), area);
}
