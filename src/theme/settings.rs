use std::fs;
use std::path::{Path, PathBuf};

use super::paths::resolve_settings_config_path;
use super::types::Settings;
use crate::sources::{Endpoint, EndpointError};
use crate::util::config::{parse_key_value, skip_comment_or_empty, strip_inline_comment};

/// Environment variable consulted when no `--base-url` flag is given.
pub const BASE_URL_ENV: &str = "TDS_HISTORY_BASE_URL";

/// Failure to assemble a usable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// No source provided a base URL.
    #[error(
        "no base URL configured: pass --base-url, set TDS_HISTORY_BASE_URL, or add `base_url = ...` to settings.conf"
    )]
    MissingBaseUrl,
    /// The configured base URL is unusable.
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content in `key = value` form
///
/// Output:
/// - Populated [`Settings`]
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`, so
///   `base-url` and `baseUrl` style spellings are accepted as `base_url`/`baseurl`.
/// - Unknown keys are logged and ignored. A later `base_url` wins.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = parse_key_value(line) else {
            tracing::warn!(line, "ignoring settings line without '='");
            continue;
        };
        let key = raw_key.to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(&raw_val);
        match key.as_str() {
            "base_url" | "baseurl" => {
                settings.base_url = (!val.is_empty()).then(|| val.to_string());
            }
            other => tracing::warn!(key = other, "ignoring unknown settings key"),
        }
    }
    settings
}

/// What: Load settings from an explicit path or the default locations.
///
/// Inputs:
/// - `explicit`: Path passed with `--config`, if any
///
/// Output:
/// - Parsed settings; defaults when no file exists at the default locations
///
/// # Errors
/// - [`ConfigError::Read`] when the chosen file cannot be read (an explicit
///   path that does not exist is an error)
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match resolve_settings_config_path() {
            Some(p) => p,
            None => {
                tracing::debug!("no settings file found; using defaults");
                return Ok(Settings::default());
            }
        },
    };
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(parse_settings(&content))
}

/// What: Pick the base URL by precedence and derive the endpoint.
///
/// Inputs:
/// - `cli`: `--base-url` value
/// - `env`: Value of [`BASE_URL_ENV`]
/// - `settings`: Settings loaded from file
///
/// Output:
/// - Endpoint built from the first non-blank source (CLI, then env, then file)
///
/// # Errors
/// - [`ConfigError::MissingBaseUrl`] when no source is set
/// - [`ConfigError::Endpoint`] when the chosen value is not a valid http(s) URL
pub fn resolve_endpoint(
    cli: Option<&str>,
    env: Option<&str>,
    settings: &Settings,
) -> Result<Endpoint, ConfigError> {
    let candidates = [
        ("cli", cli),
        ("env", env),
        ("settings", settings.base_url.as_deref()),
    ];
    let (origin, base_url) = candidates
        .into_iter()
        .find_map(|(origin, v)| v.filter(|s| !s.trim().is_empty()).map(|s| (origin, s)))
        .ok_or(ConfigError::MissingBaseUrl)?;
    let endpoint = Endpoint::from_base_url(base_url)?;
    tracing::info!(origin, url = %endpoint, "resolved interaction history endpoint");
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: `base_url` is read with comments and spacing variations.
    ///
    /// Inputs:
    /// - Content with comments, an unknown key, and an inline comment
    ///
    /// Output:
    /// - `base_url` set to the URL without the comment
    #[test]
    fn parses_base_url_and_ignores_noise() {
        let content = "\
# TDS history settings
; legacy comment
theme = dark
Base-URL = https://api.example.com/  # production
";
        let s = parse_settings(content);
        assert_eq!(s.base_url.as_deref(), Some("https://api.example.com/"));
    }

    #[test]
    fn url_double_slash_is_not_a_comment() {
        let s = parse_settings("base_url = http://localhost:8000");
        assert_eq!(s.base_url.as_deref(), Some("http://localhost:8000"));
        let s = parse_settings("baseUrl=http://h:1");
        assert_eq!(s.base_url.as_deref(), Some("http://h:1"));
    }

    #[test]
    fn empty_value_leaves_base_url_unset() {
        assert_eq!(parse_settings("base_url =").base_url, None);
        assert_eq!(parse_settings("").base_url, None);
    }

    /// What: CLI beats env, env beats file; blanks are skipped.
    #[test]
    fn endpoint_precedence() {
        let file = Settings {
            base_url: Some("http://file".into()),
        };
        let e = resolve_endpoint(Some("http://cli"), Some("http://env"), &file).expect("cli");
        assert_eq!(e.as_str(), "http://cli/api/v1/interactions");
        let e = resolve_endpoint(None, Some("http://env"), &file).expect("env");
        assert_eq!(e.as_str(), "http://env/api/v1/interactions");
        let e = resolve_endpoint(Some(" "), Some(""), &file).expect("file");
        assert_eq!(e.as_str(), "http://file/api/v1/interactions");
    }

    #[test]
    fn missing_or_invalid_base_url_is_an_error() {
        let err = resolve_endpoint(None, None, &Settings::default()).expect_err("missing");
        assert!(matches!(err, ConfigError::MissingBaseUrl));
        let err = resolve_endpoint(Some("ftp://x"), None, &Settings::default()).expect_err("ftp");
        assert!(matches!(err, ConfigError::Endpoint(EndpointError::Scheme(_))));
    }

    /// What: Settings load from an explicit file; a missing explicit file errors.
    #[test]
    fn load_settings_from_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        fs::write(&path, "base_url = https://tds.example\n").expect("write settings");
        let s = load_settings(Some(&path)).expect("load");
        assert_eq!(s.base_url.as_deref(), Some("https://tds.example"));

        let missing = dir.path().join("absent.conf");
        let err = load_settings(Some(&missing)).expect_err("missing file");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
