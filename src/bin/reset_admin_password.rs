//! Reset a user's password and clear the generated-password flag.
//! Usage: cargo run --bin reset_admin_password -- [email] <new_password>

use std::process::ExitCode;

use user_admin::cli::{self, ResetArgs};
use user_admin::{config, report, reset};

#[tokio::main]
async fn main() -> ExitCode {
    let env_file = config::load_dotenv();
    user_admin::init_tracing();
    if let Err(e) = env_file {
        tracing::warn!("Failed to read .env file: {e}");
    }

    let args = match cli::parse_from::<ResetArgs, _, _>(std::env::args_os()) {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            report::print_error(&e);
            return ExitCode::from(e.exit_code());
        }
    };
    let mut stdout = std::io::stdout();

    match reset::run(&args, &mut stdout).await {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report::print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
