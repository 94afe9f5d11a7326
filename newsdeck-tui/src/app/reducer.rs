//! Pure reducer function for state transitions
//!
//! The reducer is a pure function `(State, Action) -> State`: no I/O, no
//! side effects, deterministic. Fetch dispatch and browser opening happen
//! in the event loop, keyed off the same actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libnewsdeck::{Category, Query};

use super::actions::Action;
use super::state::{AppState, InputMode};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Application ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ToggleHelp => AppState {
            help_visible: !state.help_visible,
            ..state
        },

        Action::ToggleTheme => AppState {
            theme: state.theme.toggled(),
            ..state
        },

        // === Search ===
        Action::EnterSearch => AppState {
            input_mode: InputMode::Search,
            ..state
        },

        Action::LeaveSearch => AppState {
            input_mode: InputMode::Browse,
            ..state
        },

        Action::SearchChanged(text) => {
            let query = Query {
                search_text: text,
                ..state.query.clone()
            };
            AppState { query, ..state }
        }

        // The refetch itself is dispatched by the event loop; here the
        // submit just hands focus back to the list.
        Action::SearchSubmitted => AppState {
            input_mode: InputMode::Browse,
            ..state
        },

        // === Categories ===
        Action::CategorySelected(category) => {
            let query = Query {
                category,
                ..state.query.clone()
            };
            AppState { query, ..state }
        }

        // === Headline list ===
        Action::CursorNext => move_cursor(state, 1),
        Action::CursorPrev => move_cursor(state, -1),

        Action::OpenDetail => match state.current_article().cloned() {
            Some(article) => AppState {
                detail: Some(article),
                ..state
            },
            None => state,
        },

        Action::CloseDetail => AppState {
            detail: None,
            ..state
        },

        Action::OpenInBrowser => state, // side effect in the event loop

        // === Fetch lifecycle ===
        Action::FetchStarted(request_id) => AppState {
            loading: true,
            latest_request: request_id,
            ..state
        },

        Action::FetchSucceeded {
            request_id,
            articles,
        } => {
            if request_id != state.latest_request {
                // Stale response from an older request; a newer one is
                // still in flight or already landed.
                return state;
            }
            let cursor = if articles.is_empty() {
                0
            } else {
                state.cursor.min(articles.len() - 1)
            };
            AppState {
                articles,
                cursor,
                loading: false,
                error: None,
                ..state
            }
        }

        Action::FetchFailed {
            request_id,
            message,
        } => {
            if request_id != state.latest_request {
                return state;
            }
            // The result set stays as-is: stale headlines remain visible
            // under the error message.
            AppState {
                loading: false,
                error: Some(message),
                ..state
            }
        }
    }
}

/// Whether the event loop should dispatch a fetch after reducing.
///
/// A fetch fires whenever the query changed (every search keystroke,
/// every category switch) and additionally on an explicit submit, which
/// refetches even an unchanged query. Backspacing an already empty
/// search box or re-selecting the current category changes nothing and
/// fires nothing.
pub fn triggers_fetch(action: &Action, query_before: &Query, query_after: &Query) -> bool {
    query_before != query_after || matches!(action, Action::SearchSubmitted)
}

fn move_cursor(state: AppState, delta: isize) -> AppState {
    let len = state.articles.len();
    if len == 0 {
        return state;
    }
    let cursor = (state.cursor as isize + delta).rem_euclid(len as isize) as usize;
    AppState { cursor, ..state }
}

/// Translate a key press into an intent for the current state.
///
/// Pure and public so the event loop can inspect the intent before
/// reducing: fetch dispatch and browser opening key off the returned
/// action. `None` means the key is unbound right now.
pub fn action_for_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    // Ctrl+C quits from anywhere, including the search box.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Search => search_key(state, key),
        InputMode::Browse => browse_key(state, key),
    }
}

/// Keys while the search box is focused: edits, submit, escape.
fn search_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::LeaveSearch),
        KeyCode::Enter => Some(Action::SearchSubmitted),
        KeyCode::Backspace => {
            let mut text = state.query.search_text.clone();
            text.pop();
            Some(Action::SearchChanged(text))
        }
        KeyCode::Char(c) => {
            let mut text = state.query.search_text.clone();
            text.push(c);
            Some(Action::SearchChanged(text))
        }
        _ => None,
    }
}

/// Keys while the headline list is focused.
fn browse_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    // The detail view swallows everything except close, open-link, quit.
    if state.detail_open() {
        return match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(Action::CloseDetail),
            (KeyCode::Char('o'), KeyModifiers::NONE) => Some(Action::OpenInBrowser),
            (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
            _ => None,
        };
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (KeyCode::Char('?'), _) => Some(Action::ToggleHelp),
        (KeyCode::Char('/'), KeyModifiers::NONE) => Some(Action::EnterSearch),
        (KeyCode::Char('t'), KeyModifiers::NONE) => Some(Action::ToggleTheme),
        (KeyCode::Char('o'), KeyModifiers::NONE) => Some(Action::OpenInBrowser),
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Some(Action::CursorNext),
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Some(Action::CursorPrev),
        (KeyCode::Enter, _) => Some(Action::OpenDetail),
        (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => c
            .to_digit(10)
            .and_then(|d| Category::from_index(d as usize))
            .map(Action::CategorySelected),
        _ => None,
    }
}

/// Handle keyboard input by translating it and reducing the result.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    match action_for_key(&state, key) {
        Some(action) => reduce(state, action),
        None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::ToggleTheme);

        // Original state unchanged
        assert_eq!(state_clone.theme, state.theme);

        // New state has the change
        assert_ne!(new_state.theme, state.theme);
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_search_edit_updates_query_only() {
        let state = AppState::new();

        let new_state = reduce(state, Action::SearchChanged("cricket".to_string()));

        assert_eq!(new_state.query.search_text, "cricket");
        assert_eq!(new_state.query.category, Category::World);
        assert!(!new_state.loading);
    }

    #[test]
    fn test_category_keeps_search_text() {
        let state = reduce(
            AppState::new(),
            Action::SearchChanged("cricket".to_string()),
        );

        let new_state = reduce(state, Action::CategorySelected(Category::Sports));

        assert_eq!(new_state.query.category, Category::Sports);
        assert_eq!(new_state.query.search_text, "cricket");
    }

    #[test]
    fn test_stale_fetch_outcome_is_discarded() {
        let state = reduce(AppState::new(), Action::FetchStarted(2));

        let new_state = reduce(
            state,
            Action::FetchFailed {
                request_id: 1,
                message: "Error fetching news. Please try again later.".to_string(),
            },
        );

        // Outcome of request 1 arrived after request 2 was dispatched
        assert!(new_state.loading);
        assert!(new_state.error.is_none());
    }
}
