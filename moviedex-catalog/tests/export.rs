use std::fs;

use moviedex_catalog::{CatalogError, Movie, MovieStore, save_csv};
use tempfile::TempDir;

#[test]
fn save_csv_writes_file_and_returns_path() {
    let tmp = TempDir::new().unwrap();
    let store = MovieStore::seeded();

    let path = save_csv(&store, tmp.path(), "films.csv").unwrap();

    assert_eq!(path, tmp.path().join("films.csv"));
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), store.len() + 1);
    assert!(written.starts_with("Title,Year,Rating,Genre\n"));
    assert!(written.contains("Pulp Fiction,1994,8.9,Crime\n"));
}

#[test]
fn save_csv_defaults_blank_filename() {
    let tmp = TempDir::new().unwrap();
    let path = save_csv(&MovieStore::seeded(), tmp.path(), "  ").unwrap();
    assert_eq!(path.file_name().unwrap(), "movies.csv");
    assert!(path.exists());
}

#[test]
fn save_csv_creates_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("nested").join("exports");
    let path = save_csv(&MovieStore::new(), &dir, "empty.csv").unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "Title,Year,Rating,Genre\n");
}

#[test]
fn save_csv_overwrites_and_leaves_no_temp_file() {
    let tmp = TempDir::new().unwrap();
    let mut store = MovieStore::new();
    save_csv(&store, tmp.path(), "out.csv").unwrap();

    store.add_movie(Movie::new("Alien", 1979, 8.5, "Horror"));
    let path = save_csv(&store, tmp.path(), "out.csv").unwrap();

    assert!(fs::read_to_string(&path).unwrap().contains("Alien,1979,8.5,Horror"));
    let names: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, ["out.csv"]);
}

#[test]
fn save_csv_rejects_path_like_filenames() {
    let tmp = TempDir::new().unwrap();
    let store = MovieStore::seeded();
    for name in ["../escape.csv", "sub/dir.csv", ".."] {
        let err = save_csv(&store, tmp.path(), name).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFilename(_)), "{name}");
    }
}

#[test]
fn save_csv_reports_io_failure() {
    let tmp = TempDir::new().unwrap();
    // A regular file where the directory should be.
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, "x").unwrap();

    let err = save_csv(&MovieStore::seeded(), &blocker, "movies.csv").unwrap_err();
    match err {
        CatalogError::Io { path, .. } => assert!(path.starts_with(&blocker)),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn save_csv_failed_rename_removes_temp_file() {
    let tmp = TempDir::new().unwrap();
    // A non-empty directory in place of the target file makes the rename fail.
    let target = tmp.path().join("taken.csv");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep"), "x").unwrap();

    let err = save_csv(&MovieStore::seeded(), tmp.path(), "taken.csv").unwrap_err();
    match err {
        CatalogError::Io { path, .. } => assert_eq!(path, target),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(!tmp.path().join(".taken.csv.tmp").exists());
    assert!(target.join("keep").exists());
}
