//! Tracing/logging initialization.
//!
//! Logs always go to stderr; stdout carries tables and NDJSON events.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Overrides every other source of the log filter.
pub const LOG_ENV: &str = "PANTRY_LOG";

/// Filter directive from, in order: `PANTRY_LOG`, the `-v` count, config.
pub fn filter_directive(env: Option<&str>, verbose: u8, configured: Verbosity) -> String {
    if let Some(directive) = env.map(str::trim).filter(|d| !d.is_empty()) {
        return directive.to_string();
    }
    let level = match verbose {
        0 => configured.log_level(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("pantry={}", level)
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8, configured: Verbosity, ansi: bool) {
    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env.as_deref(), verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("pantry=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}
