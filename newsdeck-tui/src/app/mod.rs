//! Application module
//!
//! Contains the core application architecture:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//!
//! Side effects (fetch dispatch, opening the browser) live in the event
//! loop, keyed off the same actions the reducer consumes.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::{action_for_key, reduce, triggers_fetch};
pub use state::{AppState, InputMode, ThemeMode};
