pub mod cli;
pub mod color;
pub mod platform;
pub mod probe;
pub mod utils;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    utils::log::init(cli.probe.verbose);

    let stdout = std::io::stdout();
    match platform::report_native(cli.probe.category, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("probe failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(probe::exit_code_for(&e))
        }
    }
}
