//! Command-line interface
//!
//! Argument parsing, report rendering and the entry point used by `main`.

pub mod display;
pub mod output;
pub mod report;
pub mod types;

use anyhow::Result;
use serde_json::json;

pub use output::{output, render, CommandOutput};
pub use types::Cli;

use crate::application::Preflight;
use crate::infrastructure::config::Settings;
use crate::infrastructure::providers::{HttpProbeClient, HttpProbeClientConfig};

/// Run the preflight checks and print the report
///
/// # Returns
/// * `Ok(exit_code)` - 0 when no issues were found, 1 otherwise
/// * `Err(anyhow::Error)` - setup failed before any check could run
pub async fn execute(cli: &Cli, settings: &Settings) -> Result<i32> {
    let client = HttpProbeClient::new(HttpProbeClientConfig::from(&settings.probe))?;
    let report = Preflight::new(client).run(&cli.options()).await;

    output(&report, cli.json);
    Ok(report.exit_code())
}

/// Print a fatal error and exit with status 1
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = json!({ "passed": false, "error": format!("{err:#}") });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{}", display::failure(&format!("Error: {err:#}")));
    }
    std::process::exit(1)
}
