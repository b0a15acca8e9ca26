//! `test_password`: check a password against the stored hash and make sure
//! the local bcrypt setup can hash and verify it again.

use std::io::Write;

use sqlx::PgConnection;

use crate::cli::TestArgs;
use crate::config::Config;
use crate::db;
use crate::error::AdminError;
use crate::password::{hash_password_with_cost, verify_password, BCRYPT_COST};
use crate::report;

/// Outcome of a password check. A mismatch is a result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub stored_matches: bool,
    pub fresh_hash_matches: bool,
}

pub async fn run<W: Write>(args: &TestArgs, out: &mut W) -> Result<CheckReport, AdminError> {
    let config = Config::from_env()?;
    check_password(&config, args.email(), args.password(), out).await
}

pub async fn check_password<W: Write>(
    config: &Config,
    email: &str,
    password: &str,
    out: &mut W,
) -> Result<CheckReport, AdminError> {
    let mut conn = db::connect(config).await?;
    let outcome = fetch_and_check(&mut conn, email, password, out).await;
    db::close(conn).await;
    outcome
}

async fn fetch_and_check<W: Write>(
    conn: &mut PgConnection,
    email: &str,
    password: &str,
    out: &mut W,
) -> Result<CheckReport, AdminError> {
    report::connected(out)?;

    let stored = db::find_password_hash(conn, email)
        .await?
        .ok_or_else(|| AdminError::UserNotFound {
            email: email.to_string(),
        })?;

    diagnose(stored.password.as_deref(), password, BCRYPT_COST, out)
}

/**
 * Verify `password` against `stored_hash`, then hash it afresh at `cost` and
 * verify that too.
 *
 * Each line is written as soon as it is known, so a malformed stored hash
 * still shows its prefix and length before the error comes back.
 */
pub fn diagnose<W: Write>(
    stored_hash: Option<&str>,
    password: &str,
    cost: u32,
    out: &mut W,
) -> Result<CheckReport, AdminError> {
    report::stored_hash(out, stored_hash)?;

    let stored_matches = match stored_hash {
        Some(hash) => verify_password(password, hash)?,
        None => false,
    };
    report::stored_verification(out, password, stored_matches)?;

    let fresh = hash_password_with_cost(password, cost)?;
    report::fresh_hash(out, password, &fresh)?;

    let fresh_hash_matches = verify_password(password, &fresh)?;
    report::fresh_verification(out, fresh_hash_matches)?;

    Ok(CheckReport {
        stored_matches,
        fresh_hash_matches,
    })
}
