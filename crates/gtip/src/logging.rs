#![forbid(unsafe_code)]

//! Optional log output for hosts without their own subscriber.
//!
//! Filter directives come from `GTIP_LOG` (e.g. `GTIP_LOG=gtip=debug`).
//! Defaults to `warn` when the variable is unset or invalid.
//!
//! ```ignore
//! let file = std::fs::File::create("/tmp/gtip.log")?;
//! gtip::logging::init_with_writer(std::sync::Mutex::new(file))?;
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable holding filter directives.
pub const ENV_VAR: &str = "GTIP_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a global subscriber writing to stderr.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<(), TryInitError> {
    init_with_writer(std::io::stderr)
}

/// Install a global subscriber writing to `writer`.
///
/// Terminal editors should pass a file here; stderr usually shares the
/// screen.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init_with_writer<W>(writer: W) -> Result<(), TryInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer),
        )
        .try_init()
}

