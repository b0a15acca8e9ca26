//! Rows read back from the `users` table.

/// Identity of a user whose password was just reset.
///
/// `id` and `role` are selected through a `::text` cast so the tools work with
/// integer or uuid keys and with a text or enum role column. `name` and `role`
/// may be NULL; the update has already been applied by the time the row is
/// decoded, so decoding must not fail on them.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UpdatedUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// The `password` column of a single user. NULL means no password is set.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StoredPassword {
    pub password: Option<String>,
}
