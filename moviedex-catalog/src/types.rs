//! Data model types for the movie catalog.

use std::fmt;

use crate::error::CatalogError;

// ── Movie ───────────────────────────────────────────────────────────────────

/// A single catalog record.
///
/// Values are accepted as given: the rating is nominally 0–10 but nothing
/// enforces it, and the genre is a free-form label. Titles are not unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub genre: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        year: i32,
        rating: f64,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            genre: genre.into(),
        }
    }

    /// The decade bucket this movie falls into.
    pub fn decade(&self) -> Decade {
        Decade::of_year(self.year)
    }

    /// Rating rendered with at least one decimal place (`9.0`, `8.85`).
    pub fn rating_label(&self) -> String {
        format_rating(self.rating)
    }
}

/// Parse a release year typed by a user.
pub fn parse_year(input: &str) -> Result<i32, CatalogError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| CatalogError::invalid_year(input.trim()))
}

/// Parse a rating typed by a user.
pub fn parse_rating(input: &str) -> Result<f64, CatalogError> {
    match input.trim().parse::<f64>() {
        Ok(r) if r.is_finite() => Ok(r),
        _ => Err(CatalogError::invalid_rating(input.trim())),
    }
}

/// Render a rating so whole numbers keep a trailing `.0`.
pub fn format_rating(rating: f64) -> String {
    if rating.is_finite() && rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        rating.to_string()
    }
}

// ── Decade ──────────────────────────────────────────────────────────────────

/// A decade bucket, identified by its first year (`1990` for the 1990s).
///
/// Ordered chronologically and displayed as `"<year>s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decade(i32);

impl Decade {
    /// Bucket for `year`: `(year / 10) * 10`, truncating toward zero.
    ///
    /// Years -9 through 9 share the `0s` bucket. The product never exceeds
    /// `year` in magnitude, so it cannot overflow.
    pub fn of_year(year: i32) -> Self {
        Self((year / 10) * 10)
    }

    pub fn start_year(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
