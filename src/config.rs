//! Connection settings, read once at startup.

use std::env;

use crate::error::AdminError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// `load_dotenv` should be called first if a `.env` file is expected.
    /// An empty `DATABASE_URL` counts as missing.
    pub fn from_env() -> Result<Self, AdminError> {
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AdminError::Config("DATABASE_URL must be set (environment or .env file)".into()))?;

        Ok(Config { database_url })
    }
}

/// Load variables from a `.env` file in the working directory, if one exists.
///
/// A missing file is fine; an unreadable or malformed one is returned so the
/// caller can warn once logging is up.
pub fn load_dotenv() -> Result<(), dotenv::Error> {
    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Serialises tests that mutate `DATABASE_URL`.
#[cfg(test)]
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Run `f` with `DATABASE_URL` set to `value` (or unset), restoring the
/// previous value afterwards.
#[cfg(test)]
pub(crate) fn with_database_url<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let saved = env::var("DATABASE_URL").ok();
    match value {
        Some(v) => env::set_var("DATABASE_URL", v),
        None => env::remove_var("DATABASE_URL"),
    }
    let out = f();
    match saved {
        Some(v) => env::set_var("DATABASE_URL", v),
        None => env::remove_var("DATABASE_URL"),
    }
    out
}
