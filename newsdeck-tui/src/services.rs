//! Service layer adapter for the TUI
//!
//! Bridges the async fetcher to the synchronous event loop. Each dispatch
//! spawns one request on a tokio runtime; the outcome comes back over a
//! crossbeam channel tagged with a monotonically increasing request id.
//! The reducer uses those ids to discard responses that were overtaken by
//! a newer request, so typing fast can never leave older results on
//! screen.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{unbounded, Receiver, Sender};
use libnewsdeck::{Article, Fetcher, Query};
use tracing::{debug, warn};

use crate::app::Action;
use crate::error::{Result, TuiError};

/// Outcome of one dispatched request
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The request finished with a page of articles.
    Loaded {
        request_id: u64,
        articles: Vec<Article>,
    },
    /// The request failed; `message` is ready for display.
    Failed { request_id: u64, message: String },
}

impl FetchOutcome {
    /// Convert into the action the reducer consumes.
    pub fn into_action(self) -> Action {
        match self {
            FetchOutcome::Loaded {
                request_id,
                articles,
            } => Action::FetchSucceeded {
                request_id,
                articles,
            },
            FetchOutcome::Failed {
                request_id,
                message,
            } => Action::FetchFailed {
                request_id,
                message,
            },
        }
    }

    pub fn request_id(&self) -> u64 {
        match self {
            FetchOutcome::Loaded { request_id, .. } => *request_id,
            FetchOutcome::Failed { request_id, .. } => *request_id,
        }
    }
}

/// Handle for issuing headline requests without blocking the UI
///
/// Owns a tokio runtime; every request runs there and reports back over
/// the channel returned by [`FetchService::new`]. There is no
/// cancellation: superseded requests run to completion and their
/// outcomes are discarded by id in the reducer.
pub struct FetchService {
    fetcher: Fetcher,
    runtime: tokio::runtime::Runtime,
    next_id: AtomicU64,
    tx: Sender<FetchOutcome>,
}

impl FetchService {
    /// Create the service and the channel the event loop drains.
    pub fn new(fetcher: Fetcher) -> Result<(Self, Receiver<FetchOutcome>)> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| TuiError::Runtime(format!("Failed to create async runtime: {e}")))?;

        let (tx, rx) = unbounded();

        Ok((
            Self {
                fetcher,
                runtime,
                next_id: AtomicU64::new(0),
                tx,
            },
            rx,
        ))
    }

    /// Dispatch one request for the given query.
    ///
    /// Returns immediately with the request id; ids start at 1 and only
    /// ever grow.
    pub fn dispatch(&self, query: Query) -> u64 {
        let request_id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let fetcher = self.fetcher.clone();
        let tx = self.tx.clone();

        debug!(request_id, search = %query.search_text, "dispatching fetch");

        self.runtime.spawn(async move {
            let outcome = match fetcher.fetch_headlines(&query).await {
                Ok(articles) => FetchOutcome::Loaded {
                    request_id,
                    articles,
                },
                Err(e) => {
                    warn!(request_id, error = %e, "fetch failed");
                    FetchOutcome::Failed {
                        request_id,
                        message: e.user_message().to_string(),
                    }
                }
            };

            // Receiver gone means the app is shutting down.
            let _ = tx.send(outcome);
        });

        request_id
    }
}
