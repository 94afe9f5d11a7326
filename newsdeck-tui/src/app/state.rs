//! Application state
//!
//! Single state container for the whole application. All transitions
//! happen through the reducer (see `reducer.rs`).

use libnewsdeck::{Article, Query};

/// Which part of the UI owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys drive the headline list and tabs.
    #[default]
    Browse,
    /// Keys edit the search text.
    Search,
}

/// Color scheme selection. The palette itself lives in `ui::theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Root application state
///
/// This is the single source of truth for the entire application.
/// State transitions are pure functions that return new state values.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// What is being asked of the provider (search text + category tab).
    pub query: Query,

    /// Current result set, in provider order. Kept as-is when a fetch
    /// fails so stale headlines stay visible under the error message.
    pub articles: Vec<Article>,

    /// A request is in flight.
    pub loading: bool,

    /// User-facing message from the last failed fetch. Cleared by the
    /// next successful one.
    pub error: Option<String>,

    /// Cursor position in the headline list.
    pub cursor: usize,

    /// Article shown in the detail view. A detached copy: replacing the
    /// result set underneath does not close or change an open detail
    /// view, and closing it never touches the result set.
    pub detail: Option<Article>,

    /// Current color scheme.
    pub theme: ThemeMode,

    /// Keyboard focus.
    pub input_mode: InputMode,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Highest request id dispatched so far. Outcomes carrying any other
    /// id are stale and must not touch the result set.
    pub latest_request: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            query: Query::default(),
            articles: Vec::new(),
            loading: false,
            error: None,
            cursor: 0,
            detail: None,
            theme: ThemeMode::default(),
            input_mode: InputMode::default(),
            help_visible: false,
            latest_request: 0,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The headline under the cursor, if any.
    pub fn current_article(&self) -> Option<&Article> {
        self.articles.get(self.cursor)
    }

    /// Is the detail view open?
    pub fn detail_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Is the search box focused?
    pub fn searching(&self) -> bool {
        self.input_mode == InputMode::Search
    }

    /// Link to open for the `o` key: the detail view's article when open,
    /// otherwise the headline under the cursor.
    pub fn link_to_open(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .map(|a| a.url.as_str())
            .or_else(|| self.current_article().map(|a| a.url.as_str()))
    }
}
