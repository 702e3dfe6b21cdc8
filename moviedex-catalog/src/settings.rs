//! Export settings (export directory, config file location).
//!
//! The settings file is `~/.config/moviedex/settings.toml` (or the platform
//! equivalent). Only the `[export]` table is read; other tables are preserved
//! when the file is updated.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CatalogError;

/// Canonical path to the settings file: `<config_dir>/moviedex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("moviedex").join("settings.toml")
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    export: ExportSettings,
}

/// The `[export]` table of `settings.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportSettings {
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Read the `[export]` table from `path`.
///
/// A missing file yields the defaults; an unreadable or malformed file is an
/// error.
pub fn load_export_settings(path: &Path) -> Result<ExportSettings, CatalogError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ExportSettings::default());
        }
        Err(e) => return Err(CatalogError::io(path, e)),
    };
    let file: SettingsFile = toml::from_str(&contents)
        .map_err(|e| CatalogError::settings(format!("{}: {e}", path.display())))?;
    Ok(file.export)
}

/// Resolve the export directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `export.directory` in the settings file at `settings`
/// 3. The user's documents directory
/// 4. The user's home directory
/// 5. Current working directory
pub fn resolve_export_dir(cli_override: Option<PathBuf>, settings: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        log::debug!("Export directory from command line: {}", p.display());
        return p;
    }
    match load_export_settings(settings) {
        Ok(ExportSettings {
            directory: Some(dir),
        }) if !dir.as_os_str().is_empty() => {
            log::debug!("Export directory from {}: {}", settings.display(), dir.display());
            return dir;
        }
        Ok(_) => {}
        Err(e) => log::warn!("Ignoring settings file: {e}"),
    }
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Save (or clear) `export.directory` in the settings file at `settings`.
///
/// Uses `toml::Value` for a surgical update so unrelated tables are kept.
/// A file that exists but cannot be read or parsed is left untouched and
/// reported as an error.
pub fn save_export_dir(settings: &Path, dir: Option<&Path>) -> Result<(), CatalogError> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents
            .parse::<toml::Value>()
            .map_err(|e| CatalogError::settings(format!("{}: {e}", settings.display())))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(CatalogError::io(settings, e)),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| CatalogError::settings("settings.toml root is not a table"))?;
    let export = table
        .entry("export")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let export_table = export
        .as_table_mut()
        .ok_or_else(|| CatalogError::settings("[export] is not a table"))?;

    match dir {
        Some(d) => {
            export_table.insert(
                "directory".to_string(),
                toml::Value::String(d.to_string_lossy().into_owned()),
            );
        }
        None => {
            export_table.remove("directory");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }
    let serialized =
        toml::to_string_pretty(&doc).map_err(|e| CatalogError::settings(e.to_string()))?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized).map_err(|e| CatalogError::io(&tmp, e))?;
    std::fs::rename(&tmp, settings).map_err(|e| CatalogError::io(settings, e))?;

    Ok(())
}

/// Load the settings file as a pretty-printed TOML string for display.
pub fn load_settings_string(settings: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
