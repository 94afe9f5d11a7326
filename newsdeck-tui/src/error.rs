//! Error types for newsdeck-tui
//!
//! Wraps core library errors and terminal/IO errors so the event loop
//! has one error type to propagate.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Core library error
    #[error("News error: {0}")]
    News(#[from] libnewsdeck::NewsdeckError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Async runtime error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
