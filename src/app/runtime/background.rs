use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::{sync::mpsc, time::Duration};

use crate::logic::{Activation, FetchOutcome};

/// Interval between spinner ticks.
const TICK_INTERVAL_MS: u64 = 200;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used between the main event
///   loop, the terminal input thread, the tick worker and fetch tasks.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Fetch outcomes tagged with their activation.
    pub history_tx: mpsc::UnboundedSender<(Activation, FetchOutcome)>,
    /// Receiving side of `history_tx`.
    pub history_rx: mpsc::UnboundedReceiver<(Activation, FetchOutcome)>,
    /// Spinner ticks.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving side of `tick_tx`.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels used for runtime communication.
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (history_tx, history_rx) = mpsc::unbounded_channel::<(Activation, FetchOutcome)>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            history_tx,
            history_rx,
            tick_tx,
            tick_rx,
        }
    }
}

/// What: Spawn the tick worker that drives the loading indicator.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events
///
/// Details:
/// - Sends a tick every 200ms until the receiver is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the blocking thread that reads terminal events.
///
/// Inputs:
/// - `event_tx`: Channel sender for terminal events
/// - `event_thread_cancelled`: Flag checked between polls
///
/// Details:
/// - Polls with a 50ms timeout so the thread notices cancellation promptly.
/// - Exits when the flag is set or the receiver is dropped.
pub fn spawn_event_thread(
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    std::thread::spawn(move || {
        while !event_thread_cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "ignoring transient terminal read error");
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "terminal poll error");
                }
            }
        }
    });
}
