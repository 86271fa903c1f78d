//! Terminal rendering of the history view.
//!
//! Layout: header (title and endpoint), the history body, and a footer with
//! key hints. The body shows exactly one of spinner, error banner or table,
//! chosen by [`crate::logic::present`].

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

/// Selected-record detail pane.
pub mod details;
/// History body: spinner, error banner or table.
pub mod history;

/// Page title shown in the header.
pub const PAGE_TITLE: &str = "Painel de Gestão - TDS Platform";
/// Key hints shown in the footer.
const FOOTER_HINTS: &str = "↑/↓ j/k mover  g/G início/fim  d detalhes  r recarregar  q sair";

/// What: Render one frame of the whole application.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: View state (selection is updated by the stateful table widget)
///
/// Details:
/// - Rendering is a function of `app`; it never triggers I/O.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            PAGE_TITLE,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.endpoint_label.clone(),
            Style::default().fg(th.overlay1),
        )),
    ])
    .style(Style::default().bg(th.base));
    f.render_widget(header, chunks[0]);

    history::render_history(f, app, chunks[1]);

    let footer = Paragraph::new(Span::styled(FOOTER_HINTS, Style::default().fg(th.subtext0)))
        .style(Style::default().bg(th.base));
    f.render_widget(footer, chunks[2]);
}
