//! The single database connection each tool opens, and the queries it runs.

use sqlx::{Connection, PgConnection};

use crate::config::Config;
use crate::error::AdminError;
use crate::models::{StoredPassword, UpdatedUser};

/// Open one connection to the database named in `config`.
///
/// Failures are logged once, by the caller's error report.
pub async fn connect(config: &Config) -> Result<PgConnection, AdminError> {
    let conn = PgConnection::connect(&config.database_url).await?;
    tracing::debug!("Database connection established");
    Ok(conn)
}

/// Close the connection. Takes ownership so it can only happen once.
///
/// A failed graceful close is logged but not reported: the operation's own
/// result is what the caller cares about, and the socket is dropped anyway.
pub async fn close(conn: PgConnection) {
    match conn.close().await {
        Ok(()) => tracing::debug!("Database connection closed"),
        Err(e) => tracing::warn!("Error while closing database connection: {e}"),
    }
}

/// Store a new password hash for `email` and clear the generated-password flag.
///
/// Returns `None` when no user has that email; nothing is changed in that case.
pub async fn update_password(
    conn: &mut PgConnection,
    email: &str,
    password_hash: &str,
) -> Result<Option<UpdatedUser>, sqlx::Error> {
    let user = sqlx::query_as::<_, UpdatedUser>(
        r#"
        UPDATE users
        SET password = $1,
            has_generated_password = false,
            updated_at = NOW()
        WHERE email = $2
        RETURNING id::text AS id, email, name, role::text AS role
        "#,
    )
    .bind(password_hash)
    .bind(email)
    .fetch_optional(conn)
    .await?;

    tracing::debug!(found = user.is_some(), "Password update executed");
    Ok(user)
}

/// Fetch the stored password hash for `email`.
///
/// The outer `None` means no such user; an inner `None` means the user has no
/// password set.
pub async fn find_password_hash(
    conn: &mut PgConnection,
    email: &str,
) -> Result<Option<StoredPassword>, sqlx::Error> {
    sqlx::query_as::<_, StoredPassword>("SELECT password FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(conn)
        .await
}
