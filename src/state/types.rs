//! Core value types used by the history view state.

use serde::{Deserialize, Deserializer};

/// One recorded text-analysis interaction as returned by the history endpoint.
///
/// Deserialization is permissive: `sentiment` and `created_at` fall back to an
/// empty string when missing or `null`, `summary` and `suggested_response` are
/// optional, and unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InteractionRecord {
    /// Stable identifier; used as the row identity.
    pub id: i64,
    /// Text that was analyzed. Never truncated in data.
    pub original_text: String,
    /// Categorical sentiment (`Positivo`, `Negativo`, anything else is unclassified).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sentiment: String,
    /// Short summary produced by the analysis service.
    #[serde(default)]
    pub summary: Option<String>,
    /// Reply suggestion produced by the analysis service.
    #[serde(default)]
    pub suggested_response: Option<String>,
    /// Serialized creation timestamp (ISO-8601-like).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

/// What: Deserialize an optional string, mapping `null` to an empty string.
///
/// Inputs:
/// - `de`: Serde deserializer positioned at the field value
///
/// Output:
/// - The string value, or `""` when the JSON value is `null`
fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Lifecycle of the single remote read owned by one view activation.
///
/// `Loaded` and `Errored` are terminal for an activation; only a new
/// activation brings the state back to `Pending`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Request issued (or about to be); nothing to show yet.
    #[default]
    Pending,
    /// Records in the order the service returned them.
    Loaded(Vec<InteractionRecord>),
    /// Human-readable failure description.
    Errored(String),
}

impl FetchState {
    /// Whether the fetch is still in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Loaded records, or an empty slice in any other state.
    #[must_use]
    pub fn records(&self) -> &[InteractionRecord] {
        match self {
            Self::Loaded(records) => records,
            Self::Pending | Self::Errored(_) => &[],
        }
    }
}
