use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter applied when `RUST_LOG` is not set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "expense_ledger=error";

/// Initializes the global tracing subscriber, writing to stderr so reports on stdout stay clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        // Another subscriber may already be installed when embedded; keep it.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
