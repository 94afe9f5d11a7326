//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! everything that can happen to the application state.

use crossterm::event::KeyEvent;
use libnewsdeck::{Article, Category};

/// Actions that trigger state transitions
///
/// Actions are plain data describing what happened. The reducer
/// (see `reducer.rs`) applies them to state; the event loop performs any
/// side effects they imply (issuing fetches, opening the browser).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Application ===
    /// Quit the application
    Quit,

    /// Toggle help overlay
    ToggleHelp,

    /// Switch between light and dark theme
    ToggleTheme,

    // === Search ===
    /// Move focus into the search box
    EnterSearch,

    /// Move focus back to the headline list
    LeaveSearch,

    /// Search text edited (full new value)
    SearchChanged(String),

    /// Explicit search trigger; refetches even when the text is unchanged
    SearchSubmitted,

    // === Categories ===
    /// Category tab selected
    CategorySelected(Category),

    // === Headline list ===
    /// Move the cursor to the next headline (wraps)
    CursorNext,

    /// Move the cursor to the previous headline (wraps)
    CursorPrev,

    /// Open the detail view for the headline under the cursor
    OpenDetail,

    /// Close the detail view
    CloseDetail,

    /// Open the current article's link in the system browser
    OpenInBrowser,

    // === Fetch lifecycle ===
    /// A request was dispatched with this id
    FetchStarted(u64),

    /// A request finished with articles
    FetchSucceeded {
        request_id: u64,
        articles: Vec<Article>,
    },

    /// A request failed with a user-facing message
    FetchFailed { request_id: u64, message: String },
}
