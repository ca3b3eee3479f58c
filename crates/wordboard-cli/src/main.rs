use std::process::ExitCode;

use clap::Parser;
use wordboard_cli::Cli;
use wordboard_core::errors::ErrorCode;
use wordboard_core::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.log_json {
        logging::init_json_tracing();
    } else {
        logging::init_tracing();
    }

    let mut stdout = std::io::stdout().lock();
    match wordboard_cli::run(cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", e.coded_string());
            ExitCode::from(e.exit_code())
        }
    }
}
