//! Shared table-selection key handling.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::TableState;

/// Apply vim-style navigation to a table selection. Returns `true` if
/// the key was consumed.
pub fn handle_table_nav(state: &mut TableState, len: usize, key: KeyEvent) -> bool {
    if len == 0 {
        return false;
    }

    let current = state.selected().unwrap_or(0);
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            state.select(Some((current + 1).min(len - 1)));
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select(Some(current.saturating_sub(1)));
            true
        }
        KeyCode::Char('g') | KeyCode::Home => {
            state.select(Some(0));
            true
        }
        KeyCode::Char('G') | KeyCode::End => {
            state.select(Some(len - 1));
            true
        }
        _ => false,
    }
}

/// Clamp the selection after the underlying list shrank.
pub fn clamp_selection(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
    } else {
        let current = state.selected().unwrap_or(0);
        state.select(Some(current.min(len - 1)));
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = TableState::default();
        state.select(Some(0));

        assert!(handle_table_nav(&mut state, 3, key(KeyCode::Char('G'))));
        assert_eq!(state.selected(), Some(2));

        assert!(handle_table_nav(&mut state, 3, key(KeyCode::Char('j'))));
        assert_eq!(state.selected(), Some(2));

        assert!(handle_table_nav(&mut state, 3, key(KeyCode::Char('g'))));
        assert_eq!(state.selected(), Some(0));

        assert!(handle_table_nav(&mut state, 3, key(KeyCode::Char('k'))));
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn empty_list_consumes_nothing() {
        let mut state = TableState::default();
        assert!(!handle_table_nav(&mut state, 0, key(KeyCode::Down)));
    }

    #[test]
    fn clamp_after_shrink() {
        let mut state = TableState::default();
        state.select(Some(9));
        clamp_selection(&mut state, 3);
        assert_eq!(state.selected(), Some(2));

        clamp_selection(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
