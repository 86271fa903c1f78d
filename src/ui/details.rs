use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use chrono::Local;

use crate::logic::present::{COLUMN_HEADINGS, row_view};
use crate::state::AppState;
use crate::theme::theme;

/// Text shown for absent optional fields.
const MISSING: &str = "—";

/// What: Render the full fields of the selected record.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: View state (reads the selection)
/// - `area`: Pane rectangle
///
/// Details:
/// - Text wraps inside the pane; nothing is cut from the original text.
/// - Renders an empty bordered pane when nothing is selected.
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let heading = |s: &'static str| {
        Line::from(Span::styled(
            s,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
    };
    let body = |s: &str| Line::from(Span::styled(s.to_string(), Style::default().fg(th.text)));

    let mut lines: Vec<Line> = Vec::new();
    if let Some(rec) = app.selected_record() {
        let row = row_view(rec, &Local);
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", COLUMN_HEADINGS[0]), Style::default().fg(th.overlay1)),
            Span::styled(row.id.to_string(), Style::default().fg(th.text)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", COLUMN_HEADINGS[2]), Style::default().fg(th.overlay1)),
            super::history::sentiment_badge(&row, &th),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", COLUMN_HEADINGS[3]), Style::default().fg(th.overlay1)),
            Span::styled(row.created_at.clone(), Style::default().fg(th.text)),
        ]));
        lines.push(Line::from(""));
        lines.push(heading("Texto Original"));
        lines.extend(row.original_text.lines().map(body));
        lines.push(Line::from(""));
        lines.push(heading("Resumo"));
        lines.extend(rec.summary.as_deref().unwrap_or(MISSING).lines().map(body));
        lines.push(Line::from(""));
        lines.push(heading("Resposta Sugerida"));
        lines.extend(
            rec.suggested_response
                .as_deref()
                .unwrap_or(MISSING)
                .lines()
                .map(body),
        );
    }

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled("Detalhes", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InteractionRecord;
    use ratatui::{Terminal, backend::TestBackend};

    fn rows_of(app: &AppState) -> Vec<String> {
        let backend = TestBackend::new(60, 20);
        let mut term = Terminal::new(backend).expect("Failed to create terminal for test");
        term.draw(|f| {
            let area = f.area();
            render_details(f, app, area);
        })
        .expect("Failed to render details");
        let buf = term.backend().buffer();
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn row_index(rows: &[String], needle: &str) -> usize {
        rows.iter()
            .position(|r| r.contains(needle))
            .expect("text on screen")
    }

    /// What: Multi-line fields keep their line breaks in the pane.
    ///
    /// Inputs:
    /// - Summary and reply with two lines each
    ///
    /// Output:
    /// - Each line on its own screen row, in order
    #[test]
    fn multi_line_fields_render_on_separate_rows() {
        let mut app = AppState::default();
        let a = app.activate();
        app.apply_outcome(
            a,
            Ok(vec![InteractionRecord {
                id: 3,
                original_text: "produto chegou".into(),
                sentiment: "Positivo".into(),
                summary: Some("linha um\nlinha dois".into()),
                suggested_response: Some("obrigado\nvolte sempre".into()),
                created_at: "2024-01-01T10:00:00Z".into(),
            }]),
        );
        let rows = rows_of(&app);
        let first = row_index(&rows, "linha um");
        let second = row_index(&rows, "linha dois");
        assert_eq!(second, first + 1);
        assert!(!rows.iter().any(|r| r.contains("linha umlinha")));
        assert_eq!(row_index(&rows, "volte sempre"), row_index(&rows, "obrigado") + 1);
        assert!(rows.iter().any(|r| r.contains("Positivo")));
    }

    #[test]
    fn missing_fields_show_placeholder_and_empty_selection_draws_nothing() {
        let mut app = AppState::default();
        let a = app.activate();
        app.apply_outcome(
            a,
            Ok(vec![InteractionRecord {
                id: 4,
                original_text: "sem resumo".into(),
                sentiment: String::new(),
                summary: None,
                suggested_response: None,
                created_at: String::new(),
            }]),
        );
        let rows = rows_of(&app);
        assert_eq!(rows.iter().filter(|r| r.contains(MISSING)).count(), 2);
        assert!(rows.iter().any(|r| r.contains("Não classificado")));

        let empty = AppState::default();
        let rows = rows_of(&empty);
        assert!(!rows.iter().any(|r| r.contains("Resumo")));
    }
}
