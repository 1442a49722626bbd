//! Tracing subscriber setup for the binaries.

use tokio::sync::mpsc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::tracing_layer::{DiagnosticEvent, DiagnosticLayer};

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. With `json`, events are
/// written as one JSON object per line. When `diagnostics` is given, WARN and
/// ERROR events are also forwarded to that channel.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(
    default_level: &str,
    json: bool,
    diagnostics: Option<mpsc::UnboundedSender<DiagnosticEvent>>,
) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(diagnostics.map(DiagnosticLayer::new))
        .try_init()
        .is_ok()
}
