//! CSV rendering and file export.
//!
//! The format is deliberately minimal: a `Title,Year,Rating,Genre` header,
//! one line per movie, `\n` line endings. Commas inside titles are replaced
//! with semicolons and nothing is quoted, so embedded quotes or newlines are
//! written through unchanged.

use std::borrow::Cow;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::CatalogError;
use crate::store::MovieStore;
use crate::types::Movie;

/// File name used when the user leaves the export prompt blank.
pub const DEFAULT_EXPORT_FILENAME: &str = "movies.csv";

const HEADER: [&str; 4] = ["Title", "Year", "Rating", "Genre"];

#[derive(Serialize)]
struct CsvRow<'a> {
    title: Cow<'a, str>,
    year: i32,
    rating: String,
    genre: &'a str,
}

impl<'a> From<&'a Movie> for CsvRow<'a> {
    fn from(movie: &'a Movie) -> Self {
        let title = if movie.title.contains(',') {
            Cow::Owned(movie.title.replace(',', ";"))
        } else {
            Cow::Borrowed(movie.title.as_str())
        };
        Self {
            title,
            year: movie.year,
            rating: movie.rating_label(),
            genre: &movie.genre,
        }
    }
}

/// Render the whole store as CSV text.
pub fn to_csv(store: &MovieStore) -> Result<String, CatalogError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for movie in store {
        writer.serialize(CsvRow::from(movie))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::Csv(e.into_error().into()))?;
    // Every field came from a `String`, so the buffer is valid UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// The file name to export to: `input` trimmed, or the default when blank.
pub fn export_filename(input: &str) -> &str {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_EXPORT_FILENAME
    } else {
        trimmed
    }
}

/// Write the store as CSV to `dir/filename` and return the written path.
///
/// `filename` must be a single path component; a blank name falls back to
/// [`DEFAULT_EXPORT_FILENAME`]. The directory is created if missing and the
/// file is replaced atomically through a temporary sibling.
pub fn save_csv(store: &MovieStore, dir: &Path, filename: &str) -> Result<PathBuf, CatalogError> {
    let filename = export_filename(filename);
    let mut components = Path::new(filename).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        return Err(CatalogError::InvalidFilename(filename.to_string()));
    }

    let content = to_csv(store)?;

    fs::create_dir_all(dir).map_err(|e| CatalogError::io(dir, e))?;
    let path = dir.join(filename);
    let tmp = dir.join(format!(".{filename}.tmp"));

    fs::write(&tmp, content).map_err(|e| CatalogError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, &path) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            log::debug!("Could not remove {}: {cleanup}", tmp.display());
        }
        return Err(CatalogError::io(&path, e));
    }

    log::info!("Exported {} movies to {}", store.len(), path.display());
    Ok(path)
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
