//! moviedex CLI
//!
//! Interactive console catalog for a small movie collection: list, search,
//! filter, summarize, add, and export to CSV.

mod cli_types;
mod commands;
mod display;
mod error;
mod logging;
mod menu;
mod session;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

use commands::config::{
    run_config_clear_export_dir, run_config_path, run_config_set_export_dir, run_config_show,
};
use commands::interactive::run_interactive;

/// Emit an empty info-level line.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("moviedex: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = moviedex_catalog::settings::settings_path();

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => run_interactive(cli.export_dir, &settings),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                run_config_show(cli.export_dir, &settings);
                Ok(())
            }
            ConfigAction::Path => {
                run_config_path(&settings);
                Ok(())
            }
            ConfigAction::SetExportDir { dir } => run_config_set_export_dir(&settings, &dir),
            ConfigAction::ClearExportDir => run_config_clear_export_dir(&settings),
        },
    }
}
