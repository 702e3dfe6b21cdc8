//! Movie catalog data model, in-memory store, queries, and CSV export.
//!
//! This crate holds everything the `moviedex` CLI needs that is not terminal
//! I/O: the [`Movie`] record, the ordered [`MovieStore`] with its query and
//! aggregation helpers, CSV rendering and file export, and resolution of the
//! export directory from `settings.toml`.

pub mod error;
pub mod export;
pub mod seed;
pub mod settings;
pub mod store;
pub mod types;

pub use error::CatalogError;
pub use export::{DEFAULT_EXPORT_FILENAME, save_csv, to_csv};
pub use seed::seed_movies;
pub use store::{MovieStore, genre_is};
pub use types::{Decade, Movie};
