//! Diagnostic logging
//!
//! stdout belongs to the preview pane, so events go to stderr only, and the default filter
//! is `off`. Set `FZF_PREVIEW_LOG` (EnvFilter syntax, e.g. `debug`) to see why a preview
//! came out blank. `RUST_LOG` is intentionally ignored so a global setting in the user's
//! shell cannot leak into the pane.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directives
pub const LOG_ENV_VAR: &str = "FZF_PREVIEW_LOG";

const DEFAULT_FILTER: &str = "off";

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber
///
/// Returns an error when a subscriber is already installed. Callers ignore it.
pub fn init_tracing() -> Result<()> {
    let directives = std::env::var(LOG_ENV_VAR).ok();

    tracing_subscriber::registry()
        .with(build_filter(directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
