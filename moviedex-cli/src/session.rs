//! The interactive menu loop.
//!
//! A [`Session`] owns the movie store and reads one line per prompt from any
//! `BufRead`, rendering to any `Write`. It runs until the user picks Quit or
//! the input is exhausted.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use moviedex_catalog::types::{parse_rating, parse_year};
use moviedex_catalog::{CatalogError, Movie, MovieStore, genre_is, save_csv, to_csv};

use crate::display;
use crate::menu::MenuChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    Running,
    Stopped,
}

pub(crate) struct Session<R, W> {
    store: MovieStore,
    export_dir: PathBuf,
    input: R,
    out: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(store: MovieStore, export_dir: PathBuf, input: R, out: W) -> Self {
        Self {
            store,
            export_dir,
            input,
            out,
            state: SessionState::Running,
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &MovieStore {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    /// Loop until the session stops.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        log::debug!(
            "Session started with {} movies, exporting to {}",
            self.store.len(),
            self.export_dir.display()
        );
        while self.state == SessionState::Running {
            self.step()?;
        }
        self.out.flush()?;
        log::debug!("Session stopped with {} movies", self.store.len());
        Ok(())
    }

    /// Show the menu, read one choice, and act on it.
    pub(crate) fn step(&mut self) -> io::Result<()> {
        display::menu(&mut self.out)?;
        let Some(line) = self.read_line()? else {
            writeln!(self.out)?;
            self.state = SessionState::Stopped;
            return Ok(());
        };
        writeln!(self.out)?;

        match MenuChoice::parse(&line) {
            Some(choice) => {
                log::debug!("Menu choice: {choice:?}");
                self.dispatch(choice)
            }
            None => {
                log::debug!("Unrecognized menu input {line:?}");
                display::notice(&mut self.out, "Unrecognized choice, please try again.")
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::ListAll => {
                display::heading(&mut self.out, "All movies")?;
                display::movies(&mut self.out, &self.store)
            }
            MenuChoice::Search => self.search(),
            MenuChoice::FilterByGenre => self.filter_by_genre(),
            MenuChoice::Statistics => display::statistics(&mut self.out, &self.store),
            MenuChoice::AddMovie => self.add_movie(),
            MenuChoice::PreviewCsv => self.preview_csv(),
            MenuChoice::ExportCsv => self.export_csv(),
            MenuChoice::Quit => {
                writeln!(self.out, "Bye!")?;
                self.state = SessionState::Stopped;
                Ok(())
            }
        }
    }

    fn search(&mut self) -> io::Result<()> {
        let title = self.prompt("Title to search: ")?.unwrap_or_default();
        match self.store.find_by_title(&title) {
            Some(movie) => display::movie(&mut self.out, movie),
            None => display::notice(&mut self.out, "Movie not found."),
        }
    }

    fn filter_by_genre(&mut self) -> io::Result<()> {
        display::genres(&mut self.out, &self.store.unique_genres())?;
        let genre = self.prompt("Which genre? ")?.unwrap_or_default();
        let matches = self.store.filter(genre_is(&genre));
        if matches.is_empty() {
            display::notice(&mut self.out, "Nothing found.")
        } else {
            display::movies(&mut self.out, matches)
        }
    }

    /// Prompt for each field; year and rating are asked again until they
    /// parse. End of input abandons the add without touching the store.
    fn add_movie(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Title: ")? else {
            return self.add_cancelled();
        };
        let Some(year) = self.prompt_parsed("Year: ", parse_year)? else {
            return self.add_cancelled();
        };
        let Some(rating) = self.prompt_parsed("Rating: ", parse_rating)? else {
            return self.add_cancelled();
        };
        let Some(genre) = self.prompt("Genre: ")? else {
            return self.add_cancelled();
        };

        self.store.add_movie(Movie::new(title, year, rating, genre));
        display::success(&mut self.out, "Movie added.")
    }

    fn add_cancelled(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        display::notice(&mut self.out, "Add cancelled, no movie was saved.")
    }

    fn preview_csv(&mut self) -> io::Result<()> {
        display::heading(&mut self.out, "CSV preview")?;
        match to_csv(&self.store) {
            Ok(csv) => write!(self.out, "{csv}"),
            Err(e) => display::failure(&mut self.out, e),
        }
    }

    fn export_csv(&mut self) -> io::Result<()> {
        let filename = self
            .prompt("File name (default movies.csv): ")?
            .unwrap_or_default();
        match save_csv(&self.store, &self.export_dir, &filename) {
            Ok(path) => display::success(&mut self.out, format!("Saved to {}", path.display())),
            Err(e) => {
                log::error!("Export failed: {e}");
                display::failure(&mut self.out, format!("Could not save the file: {e}"))
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.read_line()
    }

    fn prompt_parsed<T>(
        &mut self,
        label: &str,
        parse: fn(&str) -> Result<T, CatalogError>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => display::notice(&mut self.out, format!("{e}, please try again."))?,
            }
        }
    }

    /// Read one line without its terminator; `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.out.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                log::debug!("Replacing invalid UTF-8 in input line");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Some(line))
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
