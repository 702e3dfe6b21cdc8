//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "moviedex")]
#[command(about = "Browse, search, and export a small movie catalog", long_about = None)]
pub(crate) struct Cli {
    /// Directory CSV exports are written to (overrides settings.toml)
    #[arg(long, global = true)]
    pub export_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal log output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to the interactive session
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Start the interactive catalog menu
    Session,

    /// Manage moviedex settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved export directory
    Show,

    /// Print the settings file path
    Path,

    /// Save the default export directory
    SetExportDir {
        /// Directory CSV files are written to
        dir: PathBuf,
    },

    /// Remove the saved export directory
    ClearExportDir,
}
