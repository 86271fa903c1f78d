//! Event handling layer for the history TUI.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::AppState;

/// What the runtime should do after an event was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Keep running; redraw.
    Continue,
    /// Remount the view: tear down the activation and fetch again.
    Reload,
    /// Leave the application.
    Quit,
}

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: View state
///
/// Output:
/// - The action the runtime must take
///
/// Details:
/// - Only key presses are handled; releases, repeats, mouse and resize events
///   just trigger a redraw.
/// - Navigation and the detail toggle never issue a fetch.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> EventOutcome {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(*ke, app),
        _ => EventOutcome::Continue,
    }
}

/// Key handling for [`handle_event`].
fn handle_key(ke: KeyEvent, app: &mut AppState) -> EventOutcome {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return EventOutcome::Quit;
    }
    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return EventOutcome::Quit,
        KeyCode::Char('r') | KeyCode::F(5) => return EventOutcome::Reload,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter | KeyCode::Char('d') => app.toggle_details(),
        _ => {}
    }
    EventOutcome::Continue
}
