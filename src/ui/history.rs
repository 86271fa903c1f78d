use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::logic::present::{COLUMN_HEADINGS, ERROR_PREFIX, LOADING_TEXT};
use crate::logic::{HistoryView, RowView, present};
use crate::state::AppState;
use crate::theme::{Theme, theme};

/// Section heading of the history body.
pub const SECTION_TITLE: &str = "Histórico de Análises";
/// Hint shown under the error banner.
const RETRY_HINT: &str = "Pressione r para tentar novamente.";

/// What: Render the history body for the current fetch state.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: View state
/// - `area`: Body rectangle
///
/// Details:
/// - Exactly one of loading indicator, error banner or table is drawn.
/// - With the detail pane enabled and rows present, the table takes the left 60%.
pub fn render_history(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let view = present(app.fetch_state());
    let title = match &view {
        HistoryView::Table { rows } => format!("{SECTION_TITLE} ({})", rows.len()),
        HistoryView::Loading | HistoryView::Error { .. } => SECTION_TITLE.to_string(),
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.base));

    match view {
        HistoryView::Loading => {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", app.spinner_glyph()),
                    Style::default().fg(th.sapphire),
                ),
                Span::styled(LOADING_TEXT, Style::default().fg(th.text)),
            ]);
            let p = Paragraph::new(line)
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(p, area);
        }
        HistoryView::Error { message } => {
            let lines = vec![
                Line::from(Span::styled(
                    format!("{ERROR_PREFIX}: {message}"),
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(RETRY_HINT, Style::default().fg(th.subtext0))),
            ];
            let p = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(block);
            f.render_widget(p, area);
        }
        HistoryView::Table { rows } => {
            let (table_area, details_area) = if app.show_details && !rows.is_empty() {
                let cols = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(area);
                (cols[0], Some(cols[1]))
            } else {
                (area, None)
            };
            let table = history_table(&rows, &th).block(block);
            f.render_stateful_widget(table, table_area, &mut app.table_state);
            if let Some(details_area) = details_area {
                super::details::render_details(f, app, details_area);
            }
        }
    }
}

/// What: Build the table widget for a set of rows.
///
/// Inputs:
/// - `rows`: Rows in payload order
/// - `th`: Palette
///
/// Output:
/// - Table with `ID | Texto Original | Sentimento | Data` columns
///
/// Details:
/// - Long text is clipped by the column width only; line breaks render as spaces.
fn history_table<'a>(rows: &'a [RowView], th: &Theme) -> Table<'a> {
    let header = Row::new(COLUMN_HEADINGS.map(|h| {
        Cell::from(Span::styled(
            h,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
    }))
    .bottom_margin(1);

    let body: Vec<Row> = rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(Span::styled(r.id.to_string(), Style::default().fg(th.subtext0))),
                Cell::from(Span::styled(
                    r.original_text.lines().collect::<Vec<_>>().join(" "),
                    Style::default().fg(th.text),
                )),
                Cell::from(sentiment_badge(r, th)),
                Cell::from(Span::styled(r.created_at.clone(), Style::default().fg(th.overlay1))),
            ])
        })
        .collect();

    Table::new(
        body,
        [
            Constraint::Length(6),
            Constraint::Min(20),
            Constraint::Length(18),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .style(Style::default().fg(th.text).bg(th.base))
    .row_highlight_style(
        Style::default()
            .fg(th.lavender)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ")
}

/// What: Colored badge span for a row's sentiment.
///
/// Output:
/// - ` label ` on the variant's color with dark text
pub(crate) fn sentiment_badge(row: &RowView, th: &Theme) -> Span<'static> {
    Span::styled(
        format!(" {} ", row.sentiment_label),
        Style::default()
            .fg(th.crust)
            .bg(th.badge_color(row.variant))
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::FetchError;
    use crate::state::InteractionRecord;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

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

    fn record(id: i64, text: &str, sentiment: &str) -> InteractionRecord {
        InteractionRecord {
            id,
            original_text: text.into(),
            sentiment: sentiment.into(),
            summary: Some("resumo".into()),
            suggested_response: Some("obrigado".into()),
            created_at: "2024-01-01T10:00:00Z".into(),
        }
    }

    fn draw(app: &mut AppState) -> Buffer {
        let backend = TestBackend::new(100, 16);
        let mut term = Terminal::new(backend).expect("Failed to create terminal for test");
        term.draw(|f| {
            let area = f.area();
            render_history(f, app, area);
        })
        .expect("Failed to render history");
        term.backend().buffer().clone()
    }

    /// What: Pending shows only the loading indicator.
    ///
    /// Inputs:
    /// - Freshly activated state
    ///
    /// Output:
    /// - Loading text present, no headings and no error prefix
    #[test]
    fn pending_renders_spinner_only() {
        let mut app = AppState::default();
        app.activate();
        let text = screen(&draw(&mut app));
        assert!(text.contains(LOADING_TEXT));
        assert!(!text.contains("Texto Original"));
        assert!(!text.contains(ERROR_PREFIX));
    }

    #[test]
    fn errored_renders_banner_only() {
        let mut app = AppState::default();
        let a = app.activate();
        app.apply_outcome(a, Err(FetchError::Transport(String::new())));
        let text = screen(&draw(&mut app));
        assert!(text.contains("Erro ao buscar histórico: failed to fetch data"));
        assert!(!text.contains("Texto Original"));
        assert!(!text.contains(LOADING_TEXT));
    }

    /// What: Loaded state shows rows in order with colored badges.
    ///
    /// Inputs:
    /// - Two records, positive then negative
    ///
    /// Output:
    /// - Both texts on screen, first above second, badge cells use green/red
    #[test]
    fn loaded_renders_rows_with_badges() {
        let mut app = AppState::default();
        let a = app.activate();
        app.apply_outcome(
            a,
            Ok(vec![
                record(1, "ótimo produto", "Positivo"),
                record(2, "péssimo atendimento", "Negativo"),
            ]),
        );
        let buf = draw(&mut app);
        let text = screen(&buf);
        assert!(text.contains("Histórico de Análises (2)"));
        assert!(text.contains("Texto Original"));
        let first = text.find("ótimo produto").expect("first row");
        let second = text.find("péssimo atendimento").expect("second row");
        assert!(first < second);
        assert!(!text.contains(LOADING_TEXT));

        let th = theme();
        let bgs: Vec<_> = buf.content().iter().map(|c| c.bg).collect();
        assert!(bgs.contains(&th.green));
        assert!(bgs.contains(&th.red));
    }

    /// What: The selected row is drawn in the selection color, others are not.
    ///
    /// Inputs:
    /// - Two records; the first is selected on load
    ///
    /// Output:
    /// - First row has lavender cells, second row has none
    #[test]
    fn selected_row_uses_selection_color() {
        let mut app = AppState::default();
        let a = app.activate();
        app.apply_outcome(
            a,
            Ok(vec![
                record(1, "ótimo produto", "Positivo"),
                record(2, "péssimo atendimento", "Negativo"),
            ]),
        );
        let buf = draw(&mut app);
        let th = theme();
        let row_of = |needle: &str| {
            (0..buf.area.height)
                .find(|&y| {
                    (0..buf.area.width)
                        .map(|x| buf[(x, y)].symbol())
                        .collect::<String>()
                        .contains(needle)
                })
                .expect("row on screen")
        };
        let has_lavender =
            |y: u16| (0..buf.area.width).any(|x| buf[(x, y)].fg == th.lavender);
        assert!(has_lavender(row_of("ótimo produto")));
        assert!(!has_lavender(row_of("péssimo atendimento")));
    }

    #[test]
    fn empty_history_renders_empty_table() {
        let mut app = AppState::default();
        let a = app.activate();
        app.apply_outcome(a, Ok(Vec::new()));
        let text = screen(&draw(&mut app));
        assert!(text.contains("Histórico de Análises (0)"));
        assert!(text.contains("Sentimento"));
        assert!(!text.contains(LOADING_TEXT));
        assert!(!text.contains(ERROR_PREFIX));
    }

    /// What: Detail pane shows full fields of the selected record.
    #[test]
    fn details_pane_shows_summary_and_reply() {
        let mut app = AppState::default();
        let a = app.activate();
        app.apply_outcome(a, Ok(vec![record(5, "entrega rápida", "Positivo")]));
        app.toggle_details();
        let text = screen(&draw(&mut app));
        assert!(text.contains("resumo"));
        assert!(text.contains("obrigado"));
    }
}
