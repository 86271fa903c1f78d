//! View logic: fetch lifecycle and display mapping.

pub mod fetch;
pub mod present;
pub mod sentiment;
pub mod timestamp;

pub use fetch::{Activation, FetchController, FetchOutcome, spawn_fetch};
pub use present::{HistoryView, RowView, present, present_in, render_plain};
pub use sentiment::{SentimentVariant, sentiment_variant};
pub use timestamp::{INVALID_DATE, format_timestamp, format_timestamp_in};
