//! `reset_admin_password`: replace a user's password hash.

use std::io::Write;

use sqlx::PgConnection;

use crate::cli::ResetArgs;
use crate::config::Config;
use crate::db;
use crate::error::AdminError;
use crate::models::UpdatedUser;
use crate::password::hash_password;
use crate::report::{self, ResetReport};

/**
 * Full reset flow for parsed arguments.
 *
 * The password argument is checked before the environment is read, and the
 * environment before anything touches the network.
 */
pub async fn run<W: Write>(args: &ResetArgs, out: &mut W) -> Result<ResetReport, AdminError> {
    let new_password = args.new_password()?;
    let config = Config::from_env()?;
    reset_password(&config, args.email(), new_password, out).await
}

/// Hash `new_password` and store it for `email`, clearing the
/// generated-password flag.
pub async fn reset_password<W: Write>(
    config: &Config,
    email: &str,
    new_password: &str,
    out: &mut W,
) -> Result<ResetReport, AdminError> {
    let password_hash = hash_password(new_password)?;

    let mut conn = db::connect(config).await?;
    let outcome = apply(&mut conn, email, &password_hash, out).await;
    db::close(conn).await;

    let user = outcome?;
    tracing::info!(user_id = %user.id, "Password reset");
    Ok(ResetReport {
        user,
        new_password: new_password.to_string(),
    })
}

async fn apply<W: Write>(
    conn: &mut PgConnection,
    email: &str,
    password_hash: &str,
    out: &mut W,
) -> Result<UpdatedUser, AdminError> {
    report::connected(out)?;
    db::update_password(conn, email, password_hash)
        .await?
        .ok_or_else(|| AdminError::UserNotFound {
            email: email.to_string(),
        })
}
