//! litellm-preflight CLI entry point.

use clap::Parser;

use litellm_preflight::cli::{self, Cli};
use litellm_preflight::infrastructure::logging::LoggerImpl;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(err) => cli::handle_error(&err, cli.json),
    };

    if let Err(err) = LoggerImpl::init(&settings.logging) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    match cli::execute(&cli, &settings).await {
        Ok(code) => std::process::exit(code),
        Err(err) => cli::handle_error(&err, cli.json),
    }
}
