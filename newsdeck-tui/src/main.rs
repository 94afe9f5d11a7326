//! newsdeck - terminal browser for top news headlines
//!
//! Search, category tabs, article details and a light/dark theme in an
//! SSH-friendly terminal interface. Headlines come from the configured
//! provider endpoint; the API key is supplied via the config file or the
//! NEWSDECK_API_KEY environment variable.

use crossbeam_channel::Receiver;
use libnewsdeck::{logging, Config, Fetcher};
use newsdeck_tui::{
    app::{
        action_for_key,
        event::{EventHandler, TuiEvent},
        reduce, triggers_fetch, Action, AppState,
    },
    error::Result,
    services::{FetchOutcome, FetchService},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

fn main() -> anyhow::Result<()> {
    // Configuration and the credential come first: a missing API key
    // should fail with a readable message, not a corrupted screen.
    let config = Config::load()?;

    if let Some(path) = logging::init_logging(&config)? {
        tracing::info!(path = %path.display(), "logging to file");
    }

    let fetcher = Fetcher::from_config(&config)?;
    let (services, outcomes) = FetchService::new(fetcher)?;

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &config, &services, &outcomes);

    restore_terminal(terminal)?;

    Ok(result?)
}

fn run_app(
    terminal: &mut Tui,
    config: &Config,
    services: &FetchService,
    outcomes: &Receiver<FetchOutcome>,
) -> Result<()> {
    let mut state = AppState::new();

    // First page load happens immediately on startup.
    let request_id = services.dispatch(state.query.clone());
    state = reduce(state, Action::FetchStarted(request_id));

    let event_handler = EventHandler::new(config.tick_rate_ms);

    // Main event loop
    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let tui_event = event_handler.next()?;

        let action = match tui_event {
            TuiEvent::Key(key) => match action_for_key(&state, key) {
                Some(action) => action,
                // Unbound key; ticks still flow so outcomes keep draining.
                None => continue,
            },
            other => other.into(),
        };

        let query_before = state.query.clone();

        // Update state through the reducer
        state = reduce(state, action.clone());

        // Apply any fetch outcomes that arrived since the last frame.
        while let Ok(outcome) = outcomes.try_recv() {
            state = reduce(state, outcome.into_action());
        }

        // Perform side effects based on the action
        if action == Action::OpenInBrowser {
            if let Some(url) = state.link_to_open() {
                let _ = open::that(url);
            }
        }

        if triggers_fetch(&action, &query_before, &state.query) {
            let request_id = services.dispatch(state.query.clone());
            state = reduce(state, Action::FetchStarted(request_id));
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
