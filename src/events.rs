//! Keybindings: type to search, Tab cycles shells, Enter copies, Esc backs out.

use crate::actions::Action;
use crate::app::CATEGORIES;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent, has_query: bool, has_category: bool) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);

    if code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if code == KeyCode::Char('l') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ClearQuery);
    }
    // Esc backs out one layer at a time: category filter, then query, then exit.
    if code == KeyCode::Esc && mods.is_empty() {
        return Some(if has_category {
            Action::ClearCategory
        } else if has_query {
            Action::ClearQuery
        } else {
            Action::Quit
        });
    }

    if code == KeyCode::Enter && mods.is_empty() {
        return Some(Action::CopySelected);
    }
    if code == KeyCode::Backspace && mods.is_empty() {
        return Some(Action::Backspace);
    }

    if code == KeyCode::Up && mods.is_empty() {
        return Some(Action::SelectUp);
    }
    if code == KeyCode::Down && mods.is_empty() {
        return Some(Action::SelectDown);
    }

    if code == KeyCode::Tab && mods.is_empty() {
        return Some(Action::CycleCategoryForward);
    }
    if code == KeyCode::BackTab {
        return Some(Action::CycleCategoryBack);
    }

    // Alt+1..4 toggle a shell filter directly (same shell again clears it).
    if let KeyCode::Char(c) = code {
        if mods.contains(KeyModifiers::ALT) {
            if let Some(d) = c.to_digit(10) {
                let i = d as usize;
                if (1..=CATEGORIES.len()).contains(&i) {
                    return Some(Action::SetCategory(CATEGORIES[i - 1].to_string()));
                }
            }
        }
    }

    // Any other character goes to the search query (allow Alt for accented
    // chars; only block Ctrl/Cmd).
    if let KeyCode::Char(c) = code {
        if !mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::SUPER) {
            return Some(Action::Char(c));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn printable_chars_go_to_the_query() {
        let action = key_to_action(&key(KeyCode::Char('q'), KeyModifiers::NONE), false, false);
        assert!(matches!(action, Some(Action::Char('q'))));
    }

    #[test]
    fn esc_clears_category_before_query_before_quitting() {
        let esc = key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(key_to_action(&esc, true, true), Some(Action::ClearCategory)));
        assert!(matches!(key_to_action(&esc, true, false), Some(Action::ClearQuery)));
        assert!(matches!(key_to_action(&esc, false, false), Some(Action::Quit)));
    }

    #[test]
    fn alt_digit_toggles_the_matching_shell() {
        let action = key_to_action(&key(KeyCode::Char('1'), KeyModifiers::ALT), false, false);
        assert!(matches!(action, Some(Action::SetCategory(c)) if c == "bash"));
        // Plain digits belong to the query.
        let action = key_to_action(&key(KeyCode::Char('1'), KeyModifiers::NONE), false, false);
        assert!(matches!(action, Some(Action::Char('1'))));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut event = key(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert!(key_to_action(&event, false, false).is_none());
    }
}
