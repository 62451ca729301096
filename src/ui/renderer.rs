//! Single-panel render: header, search bar, shell tabs, results, status.

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::theme::colors;
use crate::ui::widgets::{render_header, render_results, render_search, render_status, render_tabs};

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(colors::BG)), area);
    let regions = layout::compute(area);

    render_header(f, regions.header);
    render_search(f, app.state.search_query(), regions.search);
    render_tabs(f, app.state.query.active_category.as_deref(), regions.tabs);
    render_results(f, app, regions.results);
    render_status(f, app, regions.status);
}
