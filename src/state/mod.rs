//! View state: record and lifecycle types plus the per-view `AppState`.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{FetchState, InteractionRecord};
