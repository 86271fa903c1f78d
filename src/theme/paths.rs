use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the config base directories.
const APP_DIR: &str = "tds-history";
/// Settings file name.
const SETTINGS_FILE: &str = "settings.conf";

/// What: List candidate settings paths in priority order.
///
/// Inputs:
/// - `home`: Value of `$HOME`, if set
/// - `xdg_config`: Value of `$XDG_CONFIG_HOME`, if set
///
/// Output:
/// - `$HOME/.config/tds-history/settings.conf` first, then the XDG location
fn settings_candidates(home: Option<&str>, xdg_config: Option<&str>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.filter(|h| !h.trim().is_empty()) {
        candidates.push(Path::new(h).join(".config").join(APP_DIR).join(SETTINGS_FILE));
    }
    if let Some(xdg) = xdg_config.filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(xdg).join(APP_DIR).join(SETTINGS_FILE));
    }
    candidates
}

/// Determine the settings file path, searching in priority order.
/// Returns `None` when no candidate exists on disk.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    settings_candidates(home.as_deref(), xdg_config.as_deref())
        .into_iter()
        .find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/tds-history`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory for the application (ensured to exist).
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/tds-history/logs" (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
