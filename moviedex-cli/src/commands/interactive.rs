use std::io;
use std::path::{Path, PathBuf};

use moviedex_catalog::MovieStore;
use moviedex_catalog::settings::resolve_export_dir;

use crate::CliError;
use crate::session::Session;

/// Run the interactive menu on stdin/stdout with the seeded catalog.
pub(crate) fn run_interactive(
    export_dir: Option<PathBuf>,
    settings: &Path,
) -> Result<(), CliError> {
    let export_dir = resolve_export_dir(export_dir, settings);
    let store = MovieStore::seeded();
    log::debug!("Loaded {} seed movies", store.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, export_dir, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}
