//! Results list: count, per-record rows, empty state.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::CommandRecord;
use crate::ui::theme::{colors, RESULT_ROW_LINES};

pub fn render(f: &mut Frame, app: &App, area: ratatui::prelude::Rect) {
    let count = app.state.results.len();
    let plural = if count == 1 { "" } else { "s" };
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Results", Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  Showing {count} result{plural}"),
                Style::default().fg(colors::TEXT_DIM),
            ),
        ]),
        Line::default(),
    ];

    if count == 0 {
        lines.push(Line::from(Span::styled(
            "No results found",
            Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Try adjusting your search or filter criteria",
            Style::default().fg(colors::TEXT_DIM),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let header_lines = lines.len() as u16;
    let rows_visible = (area.height.saturating_sub(header_lines) / RESULT_ROW_LINES) as usize;
    let selected = app.state.selected_index;
    let offset = if selected < rows_visible { 0 } else { selected + 1 - rows_visible.max(1) };

    for (row, &store_index) in app.state.results.iter().enumerate().skip(offset).take(rows_visible.max(1)) {
        if let Some(record) = app.store().get(store_index) {
            let is_selected = row == selected;
            let copied = app.state.last_copied() == Some(record.command.as_str());
            push_record(&mut lines, record, is_selected, copied);
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn push_record(lines: &mut Vec<Line<'_>>, record: &CommandRecord, selected: bool, copied: bool) {
    let bar = if selected { "▎ " } else { "  " };
    let command_style = if selected {
        Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT)
    };
    let mut first = vec![
        Span::styled(bar.to_string(), Style::default().fg(colors::ACCENT)),
        Span::styled(
            format!("[{}] ", record.category),
            Style::default().fg(colors::ACCENT_ALT),
        ),
        Span::styled(record.command.clone(), command_style),
    ];
    if copied {
        first.push(Span::styled(
            "  ✓ copied",
            Style::default().fg(colors::SUCCESS),
        ));
    }
    lines.push(Line::from(first));

    let tags = record
        .tags
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(record.description.clone(), Style::default().fg(colors::TEXT_DIM)),
        Span::raw("  "),
        Span::styled(tags, Style::default().fg(colors::MUTED)),
    ]));
    lines.push(Line::default());
}
