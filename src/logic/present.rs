//! Mapping from [`FetchState`] to a renderable view model.
//!
//! Both the terminal UI and the `--print` output consume [`HistoryView`], so
//! every frontend shows exactly one of spinner, error banner or table.

use std::fmt::Write;

use chrono::{Local, TimeZone};
use unicode_width::UnicodeWidthStr;

use super::sentiment::{SentimentVariant, sentiment_variant};
use super::timestamp::format_timestamp_in;
use crate::state::{FetchState, InteractionRecord};

/// Text of the loading indicator.
pub const LOADING_TEXT: &str = "Carregando histórico do banco de dados...";
/// Prefix of the error banner.
pub const ERROR_PREFIX: &str = "Erro ao buscar histórico";
/// Table column headings, in display order.
pub const COLUMN_HEADINGS: [&str; 4] = ["ID", "Texto Original", "Sentimento", "Data"];
/// Line shown below the header when the history is empty.
pub const EMPTY_TABLE_TEXT: &str = "(nenhuma interação registrada)";

/// One table row ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    /// Record identifier.
    pub id: i64,
    /// Full original text.
    pub original_text: String,
    /// Badge variant derived from the sentiment.
    pub variant: SentimentVariant,
    /// Badge text.
    pub sentiment_label: String,
    /// Timestamp formatted for the viewer, or the invalid-date placeholder.
    pub created_at: String,
}

/// What the history view shows for a given state. Exactly one variant at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryView {
    /// Loading indicator.
    Loading,
    /// Error banner.
    Error {
        /// Diagnostic to show.
        message: String,
    },
    /// Table with one row per record, in payload order.
    Table {
        /// Rows in display order.
        rows: Vec<RowView>,
    },
}

/// What: Map a fetch state to its view using the local time zone.
///
/// Inputs:
/// - `state`: Current lifecycle state
///
/// Output:
/// - The single view to render
#[must_use]
pub fn present(state: &FetchState) -> HistoryView {
    present_in(state, &Local)
}

/// What: Map a fetch state to its view, formatting dates in `tz`.
///
/// Inputs:
/// - `state`: Current lifecycle state
/// - `tz`: Display time zone for the `Data` column
///
/// Output:
/// - `Loading`, `Error` or `Table`; pure function of its inputs
#[must_use]
pub fn present_in<Tz>(state: &FetchState, tz: &Tz) -> HistoryView
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match state {
        FetchState::Pending => HistoryView::Loading,
        FetchState::Errored(message) => HistoryView::Error {
            message: message.clone(),
        },
        FetchState::Loaded(records) => HistoryView::Table {
            rows: records.iter().map(|r| row_view(r, tz)).collect(),
        },
    }
}

/// Build the display row of one record.
pub(crate) fn row_view<Tz>(record: &InteractionRecord, tz: &Tz) -> RowView
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    RowView {
        id: record.id,
        original_text: record.original_text.clone(),
        variant: sentiment_variant(&record.sentiment),
        sentiment_label: SentimentVariant::label(&record.sentiment).to_string(),
        created_at: format_timestamp_in(&record.created_at, tz),
    }
}

/// What: Render a view as plain text for non-interactive output.
///
/// Inputs:
/// - `view`: View produced by [`present`]
///
/// Output:
/// - Newline-terminated text: the loading line, the error line, or an aligned table
///
/// Details:
/// - Original text is printed in full; line breaks inside it are shown as spaces.
/// - Columns are padded by display width so accented text lines up.
#[must_use]
pub fn render_plain(view: &HistoryView) -> String {
    match view {
        HistoryView::Loading => format!("{LOADING_TEXT}\n"),
        HistoryView::Error { message } => format!("{ERROR_PREFIX}: {message}\n"),
        HistoryView::Table { rows } => render_plain_table(rows),
    }
}

/// Aligned text table for [`render_plain`].
fn render_plain_table(rows: &[RowView]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                single_line(&r.original_text),
                r.sentiment_label.clone(),
                r.created_at.clone(),
            ]
        })
        .collect();
    let mut widths = COLUMN_HEADINGS.map(|h| h.width());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &COLUMN_HEADINGS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    if cells.is_empty() {
        let _ = writeln!(out, "{EMPTY_TABLE_TEXT}");
    }
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

/// Append one padded table line; the last column is not padded.
fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let last = cells.len() - 1;
    for (i, (cell, w)) in cells.iter().zip(widths).enumerate() {
        out.push_str(cell);
        if i < last {
            out.push_str(&" ".repeat(w.saturating_sub(cell.width())));
            out.push_str(" | ");
        }
    }
    out.push('\n');
}

/// Collapse line breaks so a record fits on one output line.
fn single_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}
