//! Diagnostic logging
//!
//! Logs go to stderr so they never interleave with command output on stdout.
//! `OAM_ECS_LOG` takes an `EnvFilter` directive and wins over `-v`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "OAM_ECS_LOG";

/// Default directive for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "oam_ecs=info,warn",
        2 => "oam_ecs=debug,info",
        _ => "trace",
    }
}

fn env_filter(verbose: u8, directive: Option<String>) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_tracing(verbose: u8, color: bool) {
    let filter = env_filter(verbose, std::env::var(LOG_ENV).ok());

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(verbose >= 2);

    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::registry().with(filter).with(layer),
    );
}
