//! The in-memory record store and its query functions.
//!
//! [`MovieStore`] is an ordered, append-only list. Every query borrows the
//! store and returns references in store order, so results never outlive or
//! reorder the records they came from.

use std::collections::{BTreeMap, BTreeSet};

use crate::seed::seed_movies;
use crate::types::{Decade, Movie};

/// Ordered collection of movies held for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the built-in seed list.
    pub fn seeded() -> Self {
        Self::from(seed_movies())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    /// Append a movie to the end of the store.
    pub fn add_movie(&mut self, movie: Movie) {
        log::debug!("Adding movie {:?} ({})", movie.title, movie.year);
        self.movies.push(movie);
    }

    /// First movie whose title equals `title`, ignoring case.
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        let needle = title.to_lowercase();
        self.movies
            .iter()
            .find(|m| m.title.to_lowercase() == needle)
    }

    /// All movies matching `predicate`, in store order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&Movie>
    where
        P: Fn(&Movie) -> bool,
    {
        self.movies.iter().filter(|m| predicate(*m)).collect()
    }

    /// Distinct genre labels, sorted.
    pub fn unique_genres(&self) -> BTreeSet<String> {
        self.movies.iter().map(|m| m.genre.clone()).collect()
    }

    /// Mean rating, or `0.0` when the store is empty.
    pub fn average_rating(&self) -> f64 {
        if self.movies.is_empty() {
            return 0.0;
        }
        let total: f64 = self.movies.iter().map(|m| m.rating).sum();
        total / self.movies.len() as f64
    }

    /// Highest-rated movie. Ties go to the earliest entry.
    pub fn best_movie(&self) -> Option<&Movie> {
        // Iterator::max_by would keep the last of equal elements.
        self.movies.iter().reduce(|best, m| {
            if m.rating > best.rating { m } else { best }
        })
    }

    /// Movies bucketed by decade, buckets in chronological order.
    pub fn group_by_decade(&self) -> BTreeMap<Decade, Vec<&Movie>> {
        let mut buckets: BTreeMap<Decade, Vec<&Movie>> = BTreeMap::new();
        for movie in &self.movies {
            buckets.entry(movie.decade()).or_default().push(movie);
        }
        buckets
    }
}

impl From<Vec<Movie>> for MovieStore {
    fn from(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}

impl FromIterator<Movie> for MovieStore {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        Self {
            movies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MovieStore {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

/// Predicate matching movies whose genre equals `genre` exactly.
pub fn genre_is(genre: &str) -> impl Fn(&Movie) -> bool + '_ {
    move |m| m.genre == genre
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
