//! TUI widgets: header, search bar, shell tabs, results list, status bar.

mod header;
mod results;
mod search_bar;
mod status;
mod tabs;

pub use header::render as render_header;
pub use results::render as render_results;
pub use search_bar::render as render_search;
pub use status::render as render_status;
pub use tabs::render as render_tabs;
