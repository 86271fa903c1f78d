//! Palette, settings and config paths.
//!
//! Public re-exports keep the `crate::theme::*` API flat.

/// Path resolution for config directories.
mod paths;
/// Settings file parsing and base URL resolution.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{BASE_URL_ENV, ConfigError, load_settings, parse_settings, resolve_endpoint};
pub use types::{Settings, Theme};

/// Active color palette.
#[must_use]
pub const fn theme() -> Theme {
    types::DEFAULT_THEME
}
