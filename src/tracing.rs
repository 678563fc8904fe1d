//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing for an embedding application. Safe to call multiple times.
///
/// Respects `RUST_LOG` when set. Output goes to stderr so stdout stays free
/// for whatever surface embeds the search subsystem.
pub fn init() {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if is_test { "debug" } else { "info" }));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .compact();

        if let Err(e) = builder.try_init() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
