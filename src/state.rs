//! App state: catalog records, query state, result set, copied marker.

use serde::Deserialize;
use std::time::{Duration, Instant};

/// How long the "copied" confirmation stays visible after a copy.
pub const COPIED_TTL: Duration = Duration::from_secs(2);

/// One catalog entry describing a single shell/language command.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommandRecord {
    pub id: String,
    pub command: String,
    pub description: String,
    /// Shell/language tag ("bash", "zsh", "powershell", "python"), matched
    /// exactly by the category filter.
    pub category: String,
    pub tags: Vec<String>,
}

impl CommandRecord {
    /// Lowercased "command description tags" text the fallback matcher scans.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {}",
            self.command.to_lowercase(),
            self.description.to_lowercase(),
            self.tags.join(" ").to_lowercase()
        )
    }
}

/// The two pieces of user input that drive result derivation.
#[derive(Clone, Debug, Default)]
pub struct QueryState {
    pub search_query: String,
    /// `None` means "no category filter" — distinct from any record category.
    pub active_category: Option<String>,
}

/// Most recent clipboard copy. Expires after [`COPIED_TTL`]; a new copy
/// restarts the window for the new value.
#[derive(Clone, Debug)]
pub struct CopiedMarker {
    pub text: String,
    pub at: Instant,
}

impl CopiedMarker {
    pub fn new(text: String) -> Self {
        Self { text, at: Instant::now() }
    }

    pub fn is_fresh(&self) -> bool {
        self.at.elapsed() < COPIED_TTL
    }
}

/// Global app state. Results are indices into the record store, recomputed
/// whole on every query change.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub query: QueryState,
    pub results: Vec<usize>,
    pub selected_index: usize,
    pub copied: Option<CopiedMarker>,
}

impl AppState {
    pub fn search_query(&self) -> &str {
        self.query.search_query.as_str()
    }

    /// Last copied text, or `None` once the confirmation window has passed.
    pub fn last_copied(&self) -> Option<&str> {
        self.copied
            .as_ref()
            .filter(|m| m.is_fresh())
            .map(|m| m.text.as_str())
    }
}
