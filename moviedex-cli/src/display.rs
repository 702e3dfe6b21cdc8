//! Text rendering for the interactive session.
//!
//! Everything writes to a caller-supplied `Write` so the session can be
//! driven against in-memory buffers.

use std::collections::BTreeSet;
use std::io::{self, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use moviedex_catalog::{Movie, MovieStore};

use crate::menu::MenuChoice;

const SEPARATOR: &str = "---------------------------------";

pub(crate) fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "=== Movie Manager ===".if_supports_color(Stdout, |t| t.bold()),
    )?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    write!(out, "Your choice: ")
}

pub(crate) fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(
        out,
        "--- {} ---",
        title.if_supports_color(Stdout, |t| t.bold()),
    )
}

pub(crate) fn movie(out: &mut impl Write, movie: &Movie) -> io::Result<()> {
    writeln!(
        out,
        "🎬 {} ({}) - {}",
        movie.title.if_supports_color(Stdout, |t| t.bold()),
        movie.year,
        movie.genre.if_supports_color(Stdout, |t| t.cyan()),
    )?;
    writeln!(out, "⭐ Rating: {}/10", movie.rating_label())?;
    writeln!(out, "{SEPARATOR}")
}

pub(crate) fn movies<'a>(
    out: &mut impl Write,
    movies: impl IntoIterator<Item = &'a Movie>,
) -> io::Result<()> {
    for m in movies {
        movie(out, m)?;
    }
    Ok(())
}

pub(crate) fn genres(out: &mut impl Write, genres: &BTreeSet<String>) -> io::Result<()> {
    let list: Vec<&str> = genres.iter().map(String::as_str).collect();
    writeln!(out, "Genres: {}", list.join(", "))
}

pub(crate) fn statistics(out: &mut impl Write, store: &MovieStore) -> io::Result<()> {
    heading(out, "Statistics")?;
    writeln!(out, "Total: {}", store.len())?;
    writeln!(out, "Average rating: {:.2}", store.average_rating())?;
    if let Some(best) = store.best_movie() {
        writeln!(
            out,
            "Best: {} ({}/10)",
            best.title.if_supports_color(Stdout, |t| t.green()),
            best.rating_label(),
        )?;
    }
    writeln!(out, "By decade:")?;
    for (decade, bucket) in store.group_by_decade() {
        let noun = if bucket.len() == 1 { "movie" } else { "movies" };
        writeln!(out, "  {decade}: {} {noun}", bucket.len())?;
    }
    Ok(())
}

/// A non-fatal problem shown inline in the session.
pub(crate) fn notice(out: &mut impl Write, msg: impl std::fmt::Display) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        msg.to_string().if_supports_color(Stdout, |t| t.yellow()),
    )
}

pub(crate) fn success(out: &mut impl Write, msg: impl std::fmt::Display) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        msg,
    )
}

pub(crate) fn failure(out: &mut impl Write, msg: impl std::fmt::Display) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        msg,
    )
}
