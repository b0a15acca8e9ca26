//! Check a password against the hash stored for a user, then hash it again
//! to confirm the bcrypt setup round-trips.
//! Usage: cargo run --bin test_password -- [email] [password]

use std::process::ExitCode;

use user_admin::cli::{self, TestArgs};
use user_admin::{check, config, report};

#[tokio::main]
async fn main() -> ExitCode {
    let env_file = config::load_dotenv();
    user_admin::init_tracing();
    if let Err(e) = env_file {
        tracing::warn!("Failed to read .env file: {e}");
    }

    let args = match cli::parse_from::<TestArgs, _, _>(std::env::args_os()) {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            report::print_error(&e);
            return ExitCode::from(e.exit_code());
        }
    };
    let mut stdout = std::io::stdout();

    match check::run(&args, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report::print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
