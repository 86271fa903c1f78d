//! Fetch lifecycle controller for the interaction-history view.

use tokio::sync::mpsc;

use crate::sources::{Endpoint, FetchError, fetch_interactions};
use crate::state::{FetchState, InteractionRecord};

/// Ticket identifying one activation (mount) of the history view.
///
/// Outcomes carry the ticket of the activation that issued them so that a
/// response arriving after a reload or teardown can be recognised as stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Activation(u64);

impl Activation {
    /// Monotonic generation number of this activation.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Outcome of the single remote read issued by an activation.
pub type FetchOutcome = Result<Vec<InteractionRecord>, FetchError>;

/// Owns the [`FetchState`] of one view and guards its transitions.
///
/// Allowed transitions within an activation are `Pending -> Loaded` and
/// `Pending -> Errored`; only [`FetchController::activate`] resets to
/// `Pending`.
#[derive(Debug, Default)]
pub struct FetchController {
    /// Generation handed out by the last `activate` call.
    generation: u64,
    /// Ticket of the live activation; `None` before the first mount and after teardown.
    current: Option<Activation>,
    /// Lifecycle state shown by the view.
    state: FetchState,
}

impl FetchController {
    /// Create a controller that has not been activated yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Start a new activation of the view.
    ///
    /// Inputs:
    /// - None
    ///
    /// Output:
    /// - Ticket to hand to the fetch task issued for this activation
    ///
    /// Details:
    /// - Resets the state to `Pending`, dropping any previous record set wholesale.
    /// - Any earlier ticket becomes stale; its outcome will be discarded.
    pub fn activate(&mut self) -> Activation {
        self.generation = self.generation.wrapping_add(1);
        let activation = Activation(self.generation);
        self.current = Some(activation);
        self.state = FetchState::Pending;
        tracing::debug!(generation = activation.0, "history view activated");
        activation
    }

    /// What: Tear the current activation down.
    ///
    /// Details:
    /// - Outcomes for the torn-down activation are discarded from now on.
    /// - The visible state is left untouched; the owner discards it with the view.
    pub fn teardown(&mut self) {
        if let Some(activation) = self.current.take() {
            tracing::debug!(generation = activation.0, "history view torn down");
        }
    }

    /// What: Apply the outcome of a fetch if its activation is still current.
    ///
    /// Inputs:
    /// - `activation`: Ticket the fetch was issued with
    /// - `outcome`: Records on success, categorized failure otherwise
    ///
    /// Output:
    /// - `true` when the state transitioned; `false` when the outcome was discarded
    ///
    /// Details:
    /// - Stale tickets (superseded or torn down) never mutate state.
    /// - A second outcome for the same activation is ignored since both
    ///   `Loaded` and `Errored` are terminal.
    pub fn complete(&mut self, activation: Activation, outcome: FetchOutcome) -> bool {
        if self.current != Some(activation) {
            tracing::debug!(
                generation = activation.0,
                current = ?self.current.map(Activation::generation),
                "discarding stale fetch outcome"
            );
            return false;
        }
        if !self.state.is_pending() {
            tracing::warn!(
                generation = activation.0,
                "ignoring duplicate fetch outcome for settled activation"
            );
            return false;
        }
        self.state = match outcome {
            Ok(records) => {
                tracing::info!(count = records.len(), "interaction history loaded");
                FetchState::Loaded(records)
            }
            Err(err) => {
                tracing::warn!(error = %err, "interaction history fetch failed");
                FetchState::Errored(err.user_message())
            }
        };
        true
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    /// Ticket of the live activation, if any.
    #[must_use]
    pub const fn current(&self) -> Option<Activation> {
        self.current
    }
}

/// What: Issue the single remote read of an activation in the background.
///
/// Inputs:
/// - `activation`: Ticket of the activation issuing the read
/// - `client`: Shared HTTP client
/// - `endpoint`: Interaction-history endpoint
/// - `outcome_tx`: Channel back to the view's event loop
///
/// Output:
/// - None (spawns a tokio task)
///
/// Details:
/// - Exactly one GET per call; no retries, no timeout.
/// - The outcome is tagged with `activation`; the receiver decides whether it
///   is still current. A closed channel (view gone) drops the outcome.
pub fn spawn_fetch(
    activation: Activation,
    client: reqwest::Client,
    endpoint: Endpoint,
    outcome_tx: mpsc::UnboundedSender<(Activation, FetchOutcome)>,
) {
    tracing::info!(generation = activation.0, url = %endpoint, "fetching interaction history");
    tokio::spawn(async move {
        let outcome = fetch_interactions(&client, &endpoint).await;
        if outcome_tx.send((activation, outcome)).is_err() {
            tracing::debug!(
                generation = activation.0,
                "history view gone; dropping fetch outcome"
            );
        }
    });
}
