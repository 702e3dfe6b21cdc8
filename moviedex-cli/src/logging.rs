//! Logger setup for the CLI.
//!
//! Log records go to stderr (or `--logfile`) so they never interleave with
//! the interactive session on stdout. `RUST_LOG` is read first; the
//! `--quiet`/`--verbose` flags then set the level for the moviedex crates.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;

use crate::CliError;

const OWN_MODULES: [&str; 2] = ["moviedex", "moviedex_catalog"];

/// Level applied to the moviedex crates for the given flags.
pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = level_for(quiet, verbose);

    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    for module in OWN_MODULES {
        builder.filter_module(module, level);
    }

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format_timestamp(None).format_target(false);
    }

    if let Some(path) = logfile {
        let file = File::create(path)?;
        builder
            .write_style(env_logger::WriteStyle::Never)
            .target(env_logger::Target::Pipe(Box::new(
                strip_ansi_escapes::Writer::new(file),
            )));
    }

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_levels() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false), LevelFilter::Warn);
        assert_eq!(level_for(false, true), LevelFilter::Debug);
        // verbose wins over quiet
        assert_eq!(level_for(true, true), LevelFilter::Debug);
    }
}
