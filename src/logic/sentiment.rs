//! Sentiment-to-badge mapping.

/// Badge label shown when the service left the sentiment empty.
pub const UNCLASSIFIED_LABEL: &str = "Não classificado";

/// Display variant derived from a record's sentiment value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentimentVariant {
    /// `Positivo`.
    Success,
    /// `Negativo`.
    Danger,
    /// Anything else, including empty and unknown values.
    Neutral,
}

impl SentimentVariant {
    /// What: Text shown inside the badge.
    ///
    /// Inputs:
    /// - `raw`: Sentiment value as received
    ///
    /// Output:
    /// - The raw value, or [`UNCLASSIFIED_LABEL`] when it is blank
    #[must_use]
    pub fn label(raw: &str) -> &str {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            UNCLASSIFIED_LABEL
        } else {
            trimmed
        }
    }
}

/// What: Map a sentiment value to its display variant.
///
/// Inputs:
/// - `sentiment`: Any string, including empty
///
/// Output:
/// - `Success` for `Positivo`, `Danger` for `Negativo`, `Neutral` otherwise
///
/// Details:
/// - Total: never fails. Matching is exact and case-sensitive.
#[must_use]
pub fn sentiment_variant(sentiment: &str) -> SentimentVariant {
    match sentiment {
        "Positivo" => SentimentVariant::Success,
        "Negativo" => SentimentVariant::Danger,
        _ => SentimentVariant::Neutral,
    }
}
