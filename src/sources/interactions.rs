//! Interaction-history endpoint: URL derivation, HTTP retrieval and payload mapping.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, info, warn};

use crate::state::InteractionRecord;

/// Resource path of the read endpoint relative to the configured base URL.
pub const INTERACTIONS_PATH: &str = "/api/v1/interactions";

/// Message used when a failure carries no description of its own.
pub const FETCH_FAILED: &str = "failed to fetch data";

/// Why the single history read failed.
///
/// The view does not branch on the category; it only shows
/// [`FetchError::user_message`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request could not complete (connect, DNS, reading the body).
    #[error("transport failure: {0}")]
    Transport(String),
    /// A response arrived with a non-success status.
    #[error("server responded with HTTP {status}")]
    Protocol {
        /// Numeric HTTP status code.
        status: u16,
    },
    /// The body is not a list of interaction records.
    #[error("unexpected response payload: {0}")]
    Shape(String),
}

impl FetchError {
    /// What: Short human-readable description for the error banner.
    ///
    /// Output:
    /// - The transport's own message when it has one, [`FETCH_FAILED`] when it
    ///   is blank, and the `Display` text for the other categories.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(msg) if msg.trim().is_empty() => FETCH_FAILED.to_string(),
            Self::Transport(msg) => msg.clone(),
            Self::Protocol { .. } | Self::Shape(_) => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Configuration error for an unusable base URL.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// The value is empty after trimming.
    #[error("base URL is empty")]
    Empty,
    /// The value does not parse as an absolute URL.
    #[error("invalid base URL {url:?}: {reason}")]
    Invalid {
        /// Offending input.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The URL uses a scheme other than http/https.
    #[error("unsupported URL scheme {0:?} (expected http or https)")]
    Scheme(String),
    /// The base URL carries a query string or fragment.
    #[error("base URL {0:?} must not carry a query string or fragment")]
    Parameterized(String),
}

/// Fully-qualified location of the interaction-history read endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Parsed `<base>/api/v1/interactions` URL.
    url: reqwest::Url,
}

impl Endpoint {
    /// What: Derive the endpoint from an injected base URL.
    ///
    /// Inputs:
    /// - `base_url`: Service root such as `https://api.example.com` (a trailing `/` is fine)
    ///
    /// Output:
    /// - `Ok(Endpoint)` pointing at `<base>/api/v1/interactions`
    ///
    /// # Errors
    /// - [`EndpointError::Empty`] for a blank value
    /// - [`EndpointError::Invalid`] when the value is not an absolute URL
    /// - [`EndpointError::Scheme`] for anything but `http`/`https`
    /// - [`EndpointError::Parameterized`] when the base has a query or fragment
    pub fn from_base_url(base_url: &str) -> Result<Self, EndpointError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(EndpointError::Empty);
        }
        let mut url = reqwest::Url::parse(trimmed).map_err(|e| EndpointError::Invalid {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(EndpointError::Scheme(url.scheme().to_string()));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(EndpointError::Parameterized(trimmed.to_string()));
        }
        let path = format!("{}{INTERACTIONS_PATH}", url.path().trim_end_matches('/'));
        url.set_path(&path);
        Ok(Self { url })
    }

    /// The endpoint URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// What: Build the HTTP client shared by all activations.
///
/// Output:
/// - `Ok(Client)` sending `Accept: application/json` and a versioned user agent
///
/// # Errors
/// - Returns `Err` when the TLS backend cannot be initialised
///
/// Details:
/// - No request timeout is configured; a hung request keeps the view pending.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    reqwest::Client::builder()
        .user_agent(concat!("tds-history/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
}

/// What: Issue the unparameterized GET and map the response into records.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `endpoint`: Resolved interaction-history endpoint
///
/// Output:
/// - `Ok(records)` in the order returned by the service; `Err` otherwise
///
/// # Errors
/// - [`FetchError::Transport`] when the request or body read fails
/// - [`FetchError::Protocol`] for non-success statuses
/// - [`FetchError::Shape`] when the body is not a list of records
pub async fn fetch_interactions(
    client: &reqwest::Client,
    endpoint: &Endpoint,
) -> Result<Vec<InteractionRecord>, FetchError> {
    debug!(url = %endpoint, "requesting interaction history");
    let response = client.get(endpoint.as_str()).send().await.map_err(|e| {
        warn!(error = %e, url = %endpoint, "interaction history request failed");
        FetchError::from(e)
    })?;
    let status = response.status();
    let body = response.text().await?;
    info!(status = status.as_u16(), bytes = body.len(), "received interaction history");
    parse_interactions(status, &body)
}

/// What: Map an HTTP status and body into records or a failure category.
///
/// Inputs:
/// - `status`: Response status
/// - `body`: Raw response body
///
/// Output:
/// - `Ok(records)` for a success status whose body is a JSON array of records
///
/// # Errors
/// - [`FetchError::Protocol`] for any non-2xx status, regardless of the body
/// - [`FetchError::Shape`] for objects, `null`, malformed JSON or mistyped fields
pub fn parse_interactions(
    status: StatusCode,
    body: &str,
) -> Result<Vec<InteractionRecord>, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Protocol {
            status: status.as_u16(),
        });
    }
    serde_json::from_str::<Vec<InteractionRecord>>(body).map_err(|e| FetchError::Shape(e.to_string()))
}
