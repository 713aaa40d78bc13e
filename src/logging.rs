//! Diagnostic logging to stderr.
//!
//! Operator-facing output goes through `ui::messages`; this layer is for
//! debugging the store and the opener. Quiet (`warn`) unless the config
//! `log_level` or `RUST_LOG` asks for more:
//! ```bash
//! RUST_LOG=convtrack=debug convtrack add ...
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Initialize logging with the given default level.
///
/// Only the first call takes effect. `RUST_LOG` wins over `level`.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        // A global subscriber may already be set (e.g. by an embedding test harness).
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
