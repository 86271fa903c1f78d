//! Whole-screen rendering of the history view through the public API.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use tds_history::logic::present::{ERROR_PREFIX, LOADING_TEXT};
use tds_history::sources::FetchError;
use tds_history::state::{AppState, InteractionRecord};
use tds_history::ui::{PAGE_TITLE, history::SECTION_TITLE, ui};

fn screen(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw(app: &mut AppState) -> String {
    let backend = TestBackend::new(120, 24);
    let mut term = Terminal::new(backend).expect("terminal");
    term.draw(|f| ui(f, app)).expect("draw");
    screen(term.backend().buffer())
}

fn record(id: i64, text: &str, sentiment: &str) -> InteractionRecord {
    InteractionRecord {
        id,
        original_text: text.into(),
        sentiment: sentiment.into(),
        summary: None,
        suggested_response: None,
        created_at: "2024-01-01T10:00:00Z".into(),
    }
}

/// What: A freshly mounted view shows only the loading indicator.
#[test]
fn mounted_view_shows_loading_only() {
    let mut app = AppState::new("http://api.test/api/v1/interactions");
    app.activate();
    let text = draw(&mut app);
    assert!(text.contains(PAGE_TITLE));
    assert!(text.contains(SECTION_TITLE));
    assert!(text.contains(LOADING_TEXT));
    assert!(!text.contains(ERROR_PREFIX));
    assert!(!text.contains("Texto Original"));
}

/// What: A failed fetch shows the error banner and no table.
#[test]
fn failed_fetch_shows_banner_only() {
    let mut app = AppState::new("http://api.test/api/v1/interactions");
    let a = app.activate();
    assert!(app.apply_outcome(a, Err(FetchError::Protocol { status: 503 })));
    let text = draw(&mut app);
    assert!(text.contains(ERROR_PREFIX));
    assert!(text.contains("503"));
    assert!(!text.contains(LOADING_TEXT));
    assert!(!text.contains("Texto Original"));
}

/// What: Loaded records render as table rows in payload order.
///
/// Inputs:
/// - Two records, the second arriving last in the payload
///
/// Output:
/// - Headings present, first row above second, badges labelled
#[test]
fn loaded_records_render_in_order() {
    let mut app = AppState::new("http://api.test/api/v1/interactions");
    let a = app.activate();
    let records = vec![
        record(1, "ótimo produto", "Positivo"),
        record(2, "entrega atrasada", "Negativo"),
    ];
    assert!(app.apply_outcome(a, Ok(records)));
    let text = draw(&mut app);
    for heading in ["ID", "Texto Original", "Sentimento", "Data"] {
        assert!(text.contains(heading), "missing heading {heading}");
    }
    let first = text.find("ótimo produto").expect("first row");
    let second = text.find("entrega atrasada").expect("second row");
    assert!(first < second);
    assert!(text.contains("Positivo"));
    assert!(text.contains("Negativo"));
    assert!(!text.contains(LOADING_TEXT));
    assert!(!text.contains(ERROR_PREFIX));
}

/// What: An outcome for a torn-down activation never reaches the screen.
#[test]
fn stale_outcome_after_reload_is_not_rendered() {
    let mut app = AppState::new("http://api.test/api/v1/interactions");
    let old = app.activate();
    app.activate();
    assert!(!app.apply_outcome(old, Ok(vec![record(7, "antigo", "Positivo")])));
    let text = draw(&mut app);
    assert!(text.contains(LOADING_TEXT));
    assert!(!text.contains("antigo"));
}
