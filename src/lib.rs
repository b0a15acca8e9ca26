//! Administrative helpers for the application's `users` table.
//!
//! The two binaries in `src/bin` are thin wrappers around [`reset`] and
//! [`check`]; everything they share (configuration, the single database
//! connection, bcrypt hashing and console reporting) lives here.

pub mod check;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod password;
pub mod report;
pub mod reset;

pub use config::Config;
pub use error::AdminError;

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn";

/**
 * Install the global tracing subscriber.
 *
 * Diagnostics go to stderr so stdout only carries the human-readable report.
 * Calling this twice is harmless; the second install is ignored.
 */
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
