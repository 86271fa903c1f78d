use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::{FetchController, present, render_plain};
use crate::sources::{Endpoint, fetch_interactions, http_client};
use crate::state::{AppState, FetchState};

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod event_loop;

use background::{Channels, spawn_event_thread, spawn_tick_worker};
use event_loop::{mount, run_event_loop};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the history TUI end-to-end.
///
/// Inputs:
/// - `endpoint`: Interaction-history endpoint derived from the configured base URL
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Builds the HTTP client before touching the terminal so startup errors
///   print normally.
/// - Mounts the view once (one fetch), spawns the input thread and tick
///   worker, then drives the event loop until the user quits.
/// - Fetch failures never end the program; they are shown in the view.
/// - The terminal is restored even when the loop fails.
pub async fn run(endpoint: Endpoint) -> Result<()> {
    let client = http_client()?;
    setup_terminal()?;
    let result = run_tui(&client, &endpoint).await;
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    result
}

/// Body of [`run`] between terminal setup and restore.
async fn run_tui(client: &reqwest::Client, endpoint: &Endpoint) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    let mut app = AppState::new(endpoint.to_string());
    let mut channels = Channels::new();

    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    spawn_tick_worker(channels.tick_tx.clone());

    mount(&mut app, &channels, client, endpoint);
    let result = run_event_loop(&mut terminal, &mut app, &mut channels, client, endpoint).await;

    tracing::debug!("[Runtime] Main loop exited");
    app.controller.teardown();
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);
    result?;
    Ok(())
}

/// What: Fetch once and print the history as plain text.
///
/// Inputs:
/// - `endpoint`: Interaction-history endpoint
///
/// Output:
/// - `Ok(true)` when the history loaded, `Ok(false)` when the fetch failed
///   (the error line has been printed either way)
///
/// # Errors
/// - Returns `Err` only when the HTTP client cannot be built
pub async fn run_print(endpoint: Endpoint) -> Result<bool> {
    let client = http_client()?;
    let (text, loaded) = render_once(&client, &endpoint).await;
    print!("{text}");
    Ok(loaded)
}

/// What: Run one activation to completion and render it as plain text.
///
/// Inputs:
/// - `client`: HTTP client
/// - `endpoint`: Interaction-history endpoint
///
/// Output:
/// - Rendered text and whether the history loaded
///
/// Details:
/// - Goes through the same controller and view mapping as the TUI, so the
///   text is the error line or the table, never both.
pub async fn render_once(client: &reqwest::Client, endpoint: &Endpoint) -> (String, bool) {
    let mut controller = FetchController::new();
    let activation = controller.activate();
    let outcome = fetch_interactions(client, endpoint).await;
    controller.complete(activation, outcome);
    let loaded = !matches!(controller.state(), FetchState::Errored(_));
    (render_plain(&present(controller.state())), loaded)
}
