//! App service object: owns the store, index and clipboard; applies actions
//! and re-derives the result set.

use tracing::warn;

use crate::actions::Action;
use crate::clipboard::ClipboardWriter;
use crate::filter::derive_results;
use crate::search::{SearchIndex, SkimIndex};
use crate::state::{AppState, CopiedMarker};
use crate::store::RecordStore;

/// Shell categories offered by the filter tabs, in display order.
pub const CATEGORIES: &[&str] = &["bash", "zsh", "powershell", "python"];

pub struct App {
    store: RecordStore,
    index: Option<SkimIndex>,
    clipboard: Box<dyn ClipboardWriter>,
    pub state: AppState,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: RecordStore, clipboard: Box<dyn ClipboardWriter>) -> Self {
        // The index is built once; an empty store means "not yet available"
        // and the pipeline will use the fallback matcher.
        let index = (!store.is_empty()).then(|| SkimIndex::build(store.records()));
        let mut app = Self {
            store,
            index,
            clipboard,
            state: AppState::default(),
            should_quit: false,
        };
        app.refresh_results();
        app
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn selected_record(&self) -> Option<&crate::state::CommandRecord> {
        self.state
            .results
            .get(self.state.selected_index)
            .and_then(|&i| self.store.get(i))
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                let mut query = self.state.query.search_query.clone();
                query.push(c);
                self.set_search_query(query);
            }
            Action::Backspace => {
                let mut query = self.state.query.search_query.clone();
                query.pop();
                self.set_search_query(query);
            }
            Action::ClearQuery => self.set_search_query(String::new()),
            Action::ClearCategory => self.set_active_category(None),

            Action::SelectUp => {
                if !self.state.results.is_empty() {
                    let len = self.state.results.len();
                    self.state.selected_index = (self.state.selected_index + len - 1) % len;
                }
            }
            Action::SelectDown => {
                if !self.state.results.is_empty() {
                    let len = self.state.results.len();
                    self.state.selected_index = (self.state.selected_index + 1) % len;
                }
            }
            Action::CopySelected => {
                if let Some(record) = self.selected_record() {
                    let text = record.command.clone();
                    self.copy_to_clipboard(text);
                }
            }

            Action::SetCategory(category) => self.set_active_category(Some(category)),
            Action::CycleCategoryForward => self.apply_category(self.neighbor_category(1)),
            Action::CycleCategoryBack => self.apply_category(self.neighbor_category(-1)),
        }
    }

    /// Replace the search query and re-derive. Runs on every keystroke; the
    /// catalog is small enough that no debouncing is needed.
    pub fn set_search_query(&mut self, query: String) {
        self.state.query.search_query = query;
        self.refresh_results();
    }

    /// Toggle semantics: selecting the already-active category clears the
    /// filter; a different one replaces it.
    pub fn set_active_category(&mut self, category: Option<String>) {
        let next = match category {
            Some(c) if self.state.query.active_category.as_deref() == Some(c.as_str()) => None,
            other => other,
        };
        self.apply_category(next);
    }

    fn apply_category(&mut self, category: Option<String>) {
        self.state.query.active_category = category;
        self.refresh_results();
    }

    /// Next category in tab order, passing through "no filter" at the ends.
    fn neighbor_category(&self, step: isize) -> Option<String> {
        let position = self
            .state
            .query
            .active_category
            .as_deref()
            .and_then(|c| CATEGORIES.iter().position(|&k| k == c));
        let next = match (position, step) {
            (None, s) if s > 0 => Some(0),
            (None, _) => Some(CATEGORIES.len() - 1),
            (Some(i), s) => {
                let j = i as isize + s;
                (0..CATEGORIES.len() as isize).contains(&j).then_some(j as usize)
            }
        };
        next.map(|i| CATEGORIES[i].to_string())
    }

    /// Copy to the system clipboard and set the transient "copied" marker.
    /// Failure is absorbed: the confirmation simply never appears.
    pub fn copy_to_clipboard(&mut self, text: String) {
        match self.clipboard.write(&text) {
            Ok(()) => self.state.copied = Some(CopiedMarker::new(text)),
            Err(e) => warn!("clipboard write failed: {e}"),
        }
    }

    fn refresh_results(&mut self) {
        let index = self.index.as_ref().map(|ix| ix as &dyn SearchIndex);
        self.state.results = derive_results(&self.store, &self.state.query, index);
        self.state.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CopiedMarker, COPIED_TTL};
    use anyhow::{anyhow, Result};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Instant;

    struct FakeClipboard {
        writes: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl ClipboardWriter for FakeClipboard {
        fn write(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(anyhow!("denied"));
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn app_with(store: RecordStore) -> (App, Rc<RefCell<Vec<String>>>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let clipboard = FakeClipboard { writes: Rc::clone(&writes), fail: false };
        (App::new(store, Box::new(clipboard)), writes)
    }

    fn store() -> RecordStore {
        RecordStore::from_json_str(
            r#"[
              {"id":"1","command":"ls -la","description":"List all files","category":"bash","tags":["files","listing"]},
              {"id":"2","command":"Get-ChildItem","description":"List directory contents","category":"powershell","tags":["files"]},
              {"id":"3","command":"grep -r","description":"Search text recursively","category":"bash","tags":["search","text"]}
            ]"#,
        )
    }

    #[test]
    fn starts_with_full_store_visible() {
        let (app, _) = app_with(store());
        assert_eq!(app.state.results, vec![0, 1, 2]);
        assert_eq!(app.state.search_query(), "");
        assert!(app.state.query.active_category.is_none());
    }

    #[test]
    fn typing_and_clearing_rederives_results() {
        let (mut app, _) = app_with(store());
        for c in "grep".chars() {
            app.dispatch(Action::Char(c));
        }
        assert_eq!(app.state.search_query(), "grep");
        assert_eq!(app.selected_record().unwrap().id, "3");
        app.dispatch(Action::ClearQuery);
        assert_eq!(app.state.results, vec![0, 1, 2]);
    }

    #[test]
    fn category_toggle_is_idempotent() {
        let (mut app, _) = app_with(store());
        app.set_active_category(Some("bash".into()));
        assert_eq!(app.state.query.active_category.as_deref(), Some("bash"));
        assert_eq!(app.state.results, vec![0, 2]);
        app.set_active_category(Some("bash".into()));
        assert_eq!(app.state.query.active_category, None);
        assert_eq!(app.state.results, vec![0, 1, 2]);
    }

    #[test]
    fn switching_category_replaces_instead_of_clearing() {
        let (mut app, _) = app_with(store());
        app.set_active_category(Some("bash".into()));
        app.set_active_category(Some("powershell".into()));
        assert_eq!(app.state.query.active_category.as_deref(), Some("powershell"));
        assert_eq!(app.state.results, vec![1]);
    }

    #[test]
    fn cycling_passes_through_no_filter_at_the_ends() {
        let (mut app, _) = app_with(store());
        app.dispatch(Action::CycleCategoryForward);
        assert_eq!(app.state.query.active_category.as_deref(), Some("bash"));
        for _ in 1..CATEGORIES.len() {
            app.dispatch(Action::CycleCategoryForward);
        }
        assert_eq!(app.state.query.active_category.as_deref(), Some("python"));
        app.dispatch(Action::CycleCategoryForward);
        assert_eq!(app.state.query.active_category, None);
        app.dispatch(Action::CycleCategoryBack);
        assert_eq!(app.state.query.active_category.as_deref(), Some("python"));
    }

    #[test]
    fn results_stay_within_active_category_whatever_the_query() {
        let (mut app, _) = app_with(store());
        app.set_active_category(Some("bash".into()));
        app.set_search_query("list files".into());
        for &i in &app.state.results {
            assert_eq!(app.store().records()[i].category, "bash");
        }
    }

    #[test]
    fn copy_selected_writes_command_and_sets_marker() {
        let (mut app, writes) = app_with(store());
        app.dispatch(Action::CopySelected);
        assert_eq!(writes.borrow().as_slice(), ["ls -la"]);
        assert_eq!(app.state.last_copied(), Some("ls -la"));
    }

    #[test]
    fn copied_marker_expires_after_ttl() {
        let (mut app, _) = app_with(store());
        app.copy_to_clipboard("ls -la".into());
        assert_eq!(app.state.last_copied(), Some("ls -la"));
        // Back-date the marker instead of sleeping through the window.
        let expired_at = Instant::now()
            .checked_sub(COPIED_TTL + std::time::Duration::from_millis(10))
            .unwrap();
        app.state.copied = Some(CopiedMarker { text: "ls -la".into(), at: expired_at });
        assert_eq!(app.state.last_copied(), None);
    }

    #[test]
    fn clipboard_failure_leaves_marker_unset() {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let clipboard = FakeClipboard { writes: Rc::clone(&writes), fail: true };
        let mut app = App::new(store(), Box::new(clipboard));
        app.dispatch(Action::CopySelected);
        assert!(writes.borrow().is_empty());
        assert_eq!(app.state.last_copied(), None);
    }

    #[test]
    fn selection_wraps_and_resets_on_query_change() {
        let (mut app, _) = app_with(store());
        app.dispatch(Action::SelectUp);
        assert_eq!(app.state.selected_index, 2);
        app.dispatch(Action::SelectDown);
        assert_eq!(app.state.selected_index, 0);
        app.dispatch(Action::SelectDown);
        app.set_search_query("list".into());
        assert_eq!(app.state.selected_index, 0);
    }

    #[test]
    fn empty_store_never_panics() {
        let (mut app, _) = app_with(RecordStore::default());
        app.dispatch(Action::Char('x'));
        app.dispatch(Action::SelectDown);
        app.dispatch(Action::CopySelected);
        assert!(app.state.results.is_empty());
        assert_eq!(app.state.last_copied(), None);
    }
}
