//! Sync-with-uv CLI - keep pre-commit hooks in sync with uv.lock
//!
//! Entry point for the sync-with-uv command-line application.

use clap::Parser;

use sync_with_uv::cli::output::display_error;
use sync_with_uv::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level().into()),
        )
        .init();

    // Run the sync and map the outcome onto the pre-commit hook contract:
    // exit 0 when nothing changed, non-zero when files were rewritten or a
    // fatal error occurred.
    match cli.run() {
        Ok(changed) => {
            if changed {
                std::process::exit(1);
            }
        }
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
