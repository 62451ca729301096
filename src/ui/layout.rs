//! Single-column layout: header, search bar, shell tabs, results, status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    HEADER_HEIGHT, MARGIN_X, MIN_RESULT_LINES, SEARCH_HEIGHT, STATUS_HEIGHT, TABS_HEIGHT,
};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub search: Rect,
    pub tabs: Rect,
    pub results: Rect,
    pub status: Rect,
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(MIN_RESULT_LINES),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let results = Rect {
        x: area.x + MARGIN_X,
        y: chunks[3].y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: chunks[3].height,
    };
    LayoutRegions {
        header: chunks[0],
        search: chunks[1],
        tabs: chunks[2],
        results,
        status: chunks[4],
    }
}
