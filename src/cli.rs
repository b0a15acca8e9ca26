//! Positional arguments for both tools.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::AdminError;

/// Account the tools act on when no email is given.
pub const DEFAULT_EMAIL: &str = "admin@example.com";

/// Password `test_password` checks when none is given.
pub const DEFAULT_TEST_PASSWORD: &str = "changeme123";

pub const RESET_USAGE: &str = "\
Usage: reset_admin_password [email] [new_password]
Example: reset_admin_password admin@example.com mynewpassword123";

/// Reset a user's password hash and clear the generated-password flag.
#[derive(Debug, Parser)]
#[command(name = "reset_admin_password", version)]
pub struct ResetArgs {
    /// Email of the user to update
    #[arg(allow_hyphen_values = true)]
    pub email: Option<String>,

    /// New plaintext password (required)
    #[arg(allow_hyphen_values = true)]
    pub new_password: Option<String>,

    /// Anything after the password is ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl ResetArgs {
    pub fn email(&self) -> &str {
        non_empty(&self.email).unwrap_or(DEFAULT_EMAIL)
    }

    /// The new password, or a usage error when it was not supplied.
    pub fn new_password(&self) -> Result<&str, AdminError> {
        non_empty(&self.new_password).ok_or_else(|| AdminError::Usage(RESET_USAGE.to_string()))
    }
}

/// Check a password against the hash stored for a user.
#[derive(Debug, Parser)]
#[command(name = "test_password", version)]
pub struct TestArgs {
    /// Email of the user to check
    #[arg(allow_hyphen_values = true)]
    pub email: Option<String>,

    /// Plaintext password to verify
    #[arg(allow_hyphen_values = true)]
    pub password: Option<String>,

    /// Anything after the password is ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl TestArgs {
    pub fn email(&self) -> &str {
        non_empty(&self.email).unwrap_or(DEFAULT_EMAIL)
    }

    pub fn password(&self) -> &str {
        non_empty(&self.password).unwrap_or(DEFAULT_TEST_PASSWORD)
    }
}

// An empty argument counts as omitted.
fn non_empty(arg: &Option<String>) -> Option<&str> {
    arg.as_deref().filter(|s| !s.is_empty())
}

/// Parse `argv` into `T`.
///
/// Help and version output is printed here and comes back as `Ok(None)`.
/// Any other parse failure becomes [`AdminError::Usage`], so it exits with
/// the same status as every other failure.
pub fn parse_from<T, I, S>(argv: I) -> Result<Option<T>, AdminError>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    match T::try_parse_from(argv) {
        Ok(args) => Ok(Some(args)),
        Err(err) => parse_failure(err).map(|()| None),
    }
}

fn parse_failure(err: clap::Error) -> Result<(), AdminError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print()?;
            Ok(())
        }
        _ => Err(AdminError::Usage(err.to_string().trim_end().to_string())),
    }
}
