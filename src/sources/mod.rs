//! Remote data retrieval for the history view.

mod interactions;

pub use interactions::{
    Endpoint, EndpointError, FETCH_FAILED, FetchError, INTERACTIONS_PATH, fetch_interactions,
    http_client, parse_interactions,
};
