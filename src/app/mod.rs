//! Application runtime: terminal lifecycle, background workers and event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{render_once, run, run_print};
