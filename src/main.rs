//! tds-history binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use tds_history::{app, args, theme};

struct HistoryTimer;

impl tracing_subscriber::fmt::time::FormatTime for HistoryTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, writing to `~/.config/tds-history/logs/tds-history.log`.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("tds-history.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(HistoryTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(HistoryTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));
    tracing::info!(print = args.print, "tds-history starting");

    let endpoint = match theme::load_settings(args.config.as_deref()).and_then(|settings| {
        let env_url = std::env::var(theme::BASE_URL_ENV).ok();
        theme::resolve_endpoint(args.base_url.as_deref(), env_url.as_deref(), &settings)
    }) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            tracing::error!(error = %err, "configuration error");
            eprintln!("tds-history: {err}");
            return ExitCode::from(2);
        }
    };

    let code = if args.print {
        match app::run_print(endpoint).await {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(err) => {
                tracing::error!(error = ?err, "Application error");
                eprintln!("tds-history: {err}");
                ExitCode::FAILURE
            }
        }
    } else {
        match app::run(endpoint).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!(error = ?err, "Application error");
                eprintln!("tds-history: {err}");
                ExitCode::FAILURE
            }
        }
    };
    tracing::info!("tds-history exited");
    code
}
