//! Console output for both tools.
//!
//! Status lines go to the writer handed in by the caller (stdout in the
//! binaries, a buffer in tests). Errors go to stderr via [`print_error`].

use std::fmt;
use std::io::{self, Write};

use crate::error::AdminError;
use crate::models::UpdatedUser;
use crate::password::hash_preview;

pub fn connected<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Connected to database")
}

/// Prefix and length of the stored hash, enough to spot a truncated or
/// non-bcrypt value without printing the whole thing.
pub fn stored_hash<W: Write>(out: &mut W, hash: Option<&str>) -> io::Result<()> {
    match hash {
        Some(hash) => {
            writeln!(out, "Stored password hash: {}...", hash_preview(hash))?;
            // bytes; a well-formed bcrypt hash is ASCII, so this is also its character count
            writeln!(out, "Hash length: {}", hash.len())
        }
        None => {
            writeln!(out, "Stored password hash: (none)")?;
            writeln!(out, "Hash length: 0")
        }
    }
}

pub fn stored_verification<W: Write>(out: &mut W, password: &str, matches: bool) -> io::Result<()> {
    writeln!(out, "\nChecking password \"{password}\": {}", verdict(matches))
}

pub fn fresh_hash<W: Write>(out: &mut W, password: &str, hash: &str) -> io::Result<()> {
    writeln!(out, "\nNew hash for \"{password}\": {}...", hash_preview(hash))
}

pub fn fresh_verification<W: Write>(out: &mut W, matches: bool) -> io::Result<()> {
    writeln!(out, "Checking new hash: {}", verdict(matches))
}

fn verdict(matches: bool) -> &'static str {
    if matches {
        "✅ MATCH"
    } else {
        "❌ NO MATCH"
    }
}

/// Result of a successful password reset.
#[derive(Debug, Clone)]
pub struct ResetReport {
    pub user: UpdatedUser,
    pub new_password: String,
}

impl fmt::Display for ResetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n✅ Password updated successfully!")?;
        writeln!(f, "ID: {}", self.user.id)?;
        writeln!(f, "Email: {}", self.user.email)?;
        writeln!(f, "Name: {}", self.user.name.as_deref().unwrap_or("-"))?;
        writeln!(f, "Role: {}", self.user.role.as_deref().unwrap_or("-"))?;
        write!(f, "\nNew password: {}", self.new_password)
    }
}

/// Report a failure on stderr. Infrastructure failures are also logged with
/// their full debug representation.
pub fn print_error(err: &AdminError) {
    if err.is_infrastructure() {
        tracing::error!(error = ?err, "Operation failed");
    }
    eprintln!("{}", error_message(err));
}

fn error_message(err: &AdminError) -> String {
    match err {
        AdminError::Usage(usage) => usage.clone(),
        AdminError::UserNotFound { email } => format!("User with email {email} not found"),
        other => format!("❌ Error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn stored_hash_shows_prefix_and_length() {
        let hash = "$2b$12$KIXQJ1aZ0gW6o8m5c1Qe7uYvS0n2d3f4g5h6j7k8l9m0n1o2p3q4r";
        let text = render(|out| stored_hash(out, Some(hash)));
        assert_eq!(
            text,
            format!("Stored password hash: $2b$12$KIXQJ1aZ0gW6o...\nHash length: {}\n", hash.len())
        );
    }

    #[test]
    fn missing_stored_hash_is_reported_as_none() {
        let text = render(|out| stored_hash(out, None));
        assert!(text.contains("(none)"));
        assert!(text.contains("Hash length: 0"));
    }

    #[test]
    fn verification_lines_show_verdict() {
        assert!(render(|out| stored_verification(out, "pw", true)).contains("✅ MATCH"));
        assert!(render(|out| stored_verification(out, "pw", false)).contains("❌ NO MATCH"));
        assert_eq!(
            render(|out| fresh_verification(out, true)),
            "Checking new hash: ✅ MATCH\n"
        );
    }

    #[test]
    fn reset_report_lists_user_fields_and_password() {
        let report = ResetReport {
            user: UpdatedUser {
                id: "42".into(),
                email: "user@example.com".into(),
                name: Some("Jane Admin".into()),
                role: Some("admin".into()),
            },
            new_password: "NewPass123".into(),
        };
        let text = report.to_string();
        assert!(text.contains("ID: 42"));
        assert!(text.contains("Email: user@example.com"));
        assert!(text.contains("Name: Jane Admin"));
        assert!(text.contains("Role: admin"));
        assert!(text.ends_with("New password: NewPass123"));
    }

    #[test]
    fn reset_report_handles_missing_name() {
        let report = ResetReport {
            user: UpdatedUser {
                id: "7".into(),
                email: "x@example.com".into(),
                name: None,
                role: Some("user".into()),
            },
            new_password: "pw".into(),
        };
        assert!(report.to_string().contains("Name: -"));
    }

    #[test]
    fn reset_report_handles_missing_role() {
        let report = ResetReport {
            user: UpdatedUser {
                id: "8".into(),
                email: "norole@example.com".into(),
                name: Some("No Role".into()),
                role: None,
            },
            new_password: "pw".into(),
        };
        let text = report.to_string();
        assert!(text.contains("Role: -"));
        assert!(text.contains("Email: norole@example.com"));
    }

    #[test]
    fn error_messages_distinguish_not_found_and_usage() {
        let not_found = AdminError::UserNotFound { email: "ghost@example.com".into() };
        assert_eq!(error_message(&not_found), "User with email ghost@example.com not found");

        let usage = AdminError::Usage("Usage: x".into());
        assert_eq!(error_message(&usage), "Usage: x");

        let config = AdminError::Config("DATABASE_URL must be set".into());
        assert!(error_message(&config).contains("DATABASE_URL must be set"));
    }
}
