use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::events::{EventOutcome, handle_event};
use crate::logic::spawn_fetch;
use crate::sources::Endpoint;
use crate::state::AppState;
use crate::ui::ui;

use super::background::Channels;

/// What: Mount the view: start an activation and issue its single fetch.
///
/// Inputs:
/// - `app`: View state
/// - `channels`: Runtime channels (fetch outcome sender)
/// - `client`: Shared HTTP client
/// - `endpoint`: Interaction-history endpoint
///
/// Details:
/// - Any previous activation is torn down first, so its late outcome is discarded.
pub fn mount(
    app: &mut AppState,
    channels: &Channels,
    client: &reqwest::Client,
    endpoint: &Endpoint,
) {
    let activation = app.activate();
    spawn_fetch(
        activation,
        client.clone(),
        endpoint.clone(),
        channels.history_tx.clone(),
    );
}

/// What: Process one channel message.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels
/// - `client`, `endpoint`: Needed to remount on reload
///
/// Output:
/// - `true` if the event loop should exit
///
/// Details:
/// - Fetch outcomes go through the activation check in `AppState::apply_outcome`.
/// - Ticks only advance the spinner; no fetch is ever issued from a redraw.
async fn process_channel_messages(
    app: &mut AppState,
    channels: &mut Channels,
    client: &reqwest::Client,
    endpoint: &Endpoint,
) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            match handle_event(&ev, app) {
                EventOutcome::Quit => true,
                EventOutcome::Reload => {
                    tracing::info!("reload requested");
                    mount(app, channels, client, endpoint);
                    false
                }
                EventOutcome::Continue => false,
            }
        }
        Some((activation, outcome)) = channels.history_rx.recv() => {
            if !app.apply_outcome(activation, outcome) {
                tracing::debug!(generation = activation.generation(), "fetch outcome not applied");
            }
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            app.tick();
            false
        }
        else => true
    }
}

/// What: Run the main event loop, rendering and processing channel messages.
///
/// Inputs:
/// - `terminal`: Terminal to draw into
/// - `app`: Application state
/// - `channels`: Communication channels
/// - `client`, `endpoint`: Fetch dependencies for reloads
///
/// Output:
/// - `Ok(())` when the user quits
///
/// # Errors
/// - Returns `Err` when drawing to the terminal fails
pub async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
    channels: &mut Channels,
    client: &reqwest::Client,
    endpoint: &Endpoint,
) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;
        if process_channel_messages(app, channels, client, endpoint).await {
            break;
        }
    }
    Ok(())
}
