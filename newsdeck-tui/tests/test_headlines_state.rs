//! Test headline fetch lifecycle state transitions
//!
//! Verifies loading and error handling through the reducer: result set
//! replacement, stale headlines under errors, the exact user-facing
//! messages, and the detail view's detached copy.

use libnewsdeck::{Article, Source};
use newsdeck_tui::app::{reduce, Action, AppState};

const GENERIC_ERROR: &str = "Error fetching news. Please try again later.";
const UPGRADE_ERROR: &str = "Upgrade Required: Please use a secure connection (HTTPS).";

fn article(title: &str) -> Article {
    Article {
        source: Source {
            id: None,
            name: "NDTV".to_string(),
        },
        author: None,
        title: title.to_string(),
        description: None,
        url: format!("https://example.com/{title}"),
        url_to_image: None,
        published_at: None,
    }
}

fn articles(titles: &[&str]) -> Vec<Article> {
    titles.iter().map(|t| article(t)).collect()
}

/// Test that dispatching a fetch flips the loading flag
#[test]
fn test_fetch_started_sets_loading() {
    let state = AppState::new();
    assert!(!state.loading);

    let state = reduce(state, Action::FetchStarted(1));

    assert!(state.loading);
    assert_eq!(state.latest_request, 1);
}

/// Test that a successful fetch replaces the whole result set in order
#[test]
fn test_success_replaces_headlines_in_provider_order() {
    let state = reduce(AppState::new(), Action::FetchStarted(1));

    let state = reduce(
        state,
        Action::FetchSucceeded {
            request_id: 1,
            articles: articles(&["first", "second", "third"]),
        },
    );

    let titles: Vec<&str> = state.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

/// Test that a second fetch fully replaces the first result set
#[test]
fn test_success_discards_previous_result_set() {
    let state = reduce(AppState::new(), Action::FetchStarted(1));
    let state = reduce(
        state,
        Action::FetchSucceeded {
            request_id: 1,
            articles: articles(&["old"]),
        },
    );

    let state = reduce(state, Action::FetchStarted(2));
    let state = reduce(
        state,
        Action::FetchSucceeded {
            request_id: 2,
            articles: articles(&["new-a", "new-b"]),
        },
    );

    let titles: Vec<&str> = state.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["new-a", "new-b"]);
}

/// Test that success clears a previous error message
#[test]
fn test_success_clears_previous_error() {
    let state = reduce(AppState::new(), Action::FetchStarted(1));
    let state = reduce(
        state,
        Action::FetchFailed {
            request_id: 1,
            message: GENERIC_ERROR.to_string(),
        },
    );
    assert!(state.error.is_some());

    let state = reduce(state, Action::FetchStarted(2));
    let state = reduce(
        state,
        Action::FetchSucceeded {
            request_id: 2,
            articles: articles(&["fresh"]),
        },
    );

    assert!(state.error.is_none());
}

/// Test that an empty result set is a success, not an error
#[test]
fn test_empty_success_clears_list_without_error() {
    let mut state = reduce(AppState::new(), Action::FetchStarted(1));
    state.articles = articles(&["stale-a", "stale-b"]);
    state.cursor = 1;

    let state = reduce(
        state,
        Action::FetchSucceeded {
            request_id: 1,
            articles: vec![],
        },
    );

    assert!(state.articles.is_empty());
    assert_eq!(state.cursor, 0);
    assert!(state.error.is_none());
    assert!(!state.loading);
}

/// Test the message shown when the provider demands HTTPS
#[test]
fn test_upgrade_required_message() {
    let state = reduce(AppState::new(), Action::FetchStarted(1));

    let state = reduce(
        state,
        Action::FetchFailed {
            request_id: 1,
            message: UPGRADE_ERROR.to_string(),
        },
    );

    assert_eq!(
        state.error.as_deref(),
        Some("Upgrade Required: Please use a secure connection (HTTPS).")
    );
    assert!(!state.loading);
}

/// Test the message shown for every other failure
#[test]
fn test_generic_failure_message() {
    let state = reduce(AppState::new(), Action::FetchStarted(1));

    let state = reduce(
        state,
        Action::FetchFailed {
            request_id: 1,
            message: GENERIC_ERROR.to_string(),
        },
    );

    assert_eq!(
        state.error.as_deref(),
        Some("Error fetching news. Please try again later.")
    );
}

/// Test that a failed fetch leaves stale headlines on screen
#[test]
fn test_failure_keeps_stale_headlines() {
    let state = reduce(AppState::new(), Action::FetchStarted(1));
    let state = reduce(
        state,
        Action::FetchSucceeded {
            request_id: 1,
            articles: articles(&["keep-a", "keep-b"]),
        },
    );

    let state = reduce(state, Action::FetchStarted(2));
    let state = reduce(
        state,
        Action::FetchFailed {
            request_id: 2,
            message: GENERIC_ERROR.to_string(),
        },
    );

    // Error shown, but the previous result set is untouched.
    let titles: Vec<&str> = state.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["keep-a", "keep-b"]);
    assert_eq!(state.error.as_deref(), Some(GENERIC_ERROR));
    assert!(!state.loading);
}

/// Test cursor clamping when the result set shrinks
#[test]
fn test_cursor_clamped_when_list_shrinks() {
    let mut state = reduce(AppState::new(), Action::FetchStarted(1));
    state.articles = articles(&["a", "b", "c", "d", "e"]);
    state.cursor = 4;

    let state = reduce(
        state,
        Action::FetchSucceeded {
            request_id: 1,
            articles: articles(&["x", "y"]),
        },
    );

    assert_eq!(state.cursor, 1);
    assert_eq!(state.current_article().map(|a| a.title.as_str()), Some("y"));
}

/// Test cursor position survives when the new set is large enough
#[test]
fn test_cursor_kept_when_list_is_long_enough() {
    let mut state = reduce(AppState::new(), Action::FetchStarted(1));
    state.articles = articles(&["a", "b", "c"]);
    state.cursor = 1;

    let state = reduce(
        state,
        Action::FetchSucceeded {
            request_id: 1,
            articles: articles(&["x", "y", "z"]),
        },
    );

    assert_eq!(state.cursor, 1);
}

/// Test that an open detail view is a detached copy
#[test]
fn test_detail_survives_list_replacement() {
    let mut state = AppState::new();
    state.articles = articles(&["original"]);
    let state = reduce(state, Action::OpenDetail);

    let state = reduce(state, Action::FetchStarted(1));
    let state = reduce(
        state,
        Action::FetchSucceeded {
            request_id: 1,
            articles: articles(&["replacement"]),
        },
    );

    // The overlay still shows the article it was opened on.
    assert_eq!(
        state.detail.as_ref().map(|a| a.title.as_str()),
        Some("original")
    );
    assert_eq!(state.articles[0].title, "replacement");
}

/// Test that closing the detail view never touches the result set
#[test]
fn test_closing_detail_keeps_list() {
    let mut state = AppState::new();
    state.articles = articles(&["a", "b"]);
    state.cursor = 1;
    let state = reduce(state, Action::OpenDetail);

    let state = reduce(state, Action::CloseDetail);

    assert!(state.detail.is_none());
    assert_eq!(state.articles.len(), 2);
    assert_eq!(state.cursor, 1);
}

/// Test that closing an already closed detail view is a no-op
#[test]
fn test_close_detail_when_closed_is_noop() {
    let state = AppState::new();

    let new_state = reduce(state, Action::CloseDetail);

    assert!(new_state.detail.is_none());
    assert!(!new_state.should_quit);
}
