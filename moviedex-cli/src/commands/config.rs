use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use moviedex_catalog::settings::{load_settings_string, resolve_export_dir, save_export_dir};

use crate::CliError;

/// Show the settings file and the export directory a session would use.
pub(crate) fn run_config_show(export_dir: Option<PathBuf>, settings: &Path) {
    log::info!(
        "{}",
        "moviedex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if settings.exists() {
        log::info!(
            "  Settings file: {} {}",
            settings.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            settings.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let resolved = resolve_export_dir(export_dir, settings);
    log::info!(
        "  Export directory: {}",
        resolved.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    if let Some(contents) = load_settings_string(settings) {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("    {}", line);
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path(settings: &Path) {
    println!("{}", settings.display());
}

pub(crate) fn run_config_set_export_dir(settings: &Path, dir: &Path) -> Result<(), CliError> {
    save_export_dir(settings, Some(dir))?;
    log::info!(
        "{} Export directory set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        dir.display(),
    );
    Ok(())
}

pub(crate) fn run_config_clear_export_dir(settings: &Path) -> Result<(), CliError> {
    save_export_dir(settings, None)?;
    log::info!(
        "{} Export directory cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
