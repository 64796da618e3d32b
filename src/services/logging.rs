//! Tracing subscriber setup
//!
//! Console output only. `RUST_LOG` overrides the default filter; JSON lines
//! are used when the config asks for them (log shippers, containers).

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "cinegram=info,teloxide=warn";

/// Install the global tracing subscriber. Call once, before anything logs.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
