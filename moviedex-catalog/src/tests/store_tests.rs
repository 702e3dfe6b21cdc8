use super::*;

fn titles(movies: &[&Movie]) -> Vec<String> {
    movies.iter().map(|m| m.title.clone()).collect()
}

#[test]
fn average_of_empty_store_is_zero() {
    assert_eq!(MovieStore::new().average_rating(), 0.0);
}

#[test]
fn average_of_seed_data() {
    let store = MovieStore::seeded();
    let expected = (8.8 + 9.0 + 8.6 + 8.6 + 8.4 + 8.4 + 8.4 + 8.5 + 8.9 + 8.8) / 10.0;
    assert!((store.average_rating() - expected).abs() < 1e-9);
}

#[test]
fn find_by_title_ignores_case() {
    let store = MovieStore::seeded();
    let found = store.find_by_title("inception").unwrap();
    assert_eq!(found.title, "Inception");
    assert_eq!(found.year, 2010);

    assert!(store.find_by_title("THE DARK KNIGHT").is_some());
}

#[test]
fn find_by_title_requires_exact_match() {
    let store = MovieStore::seeded();
    assert!(store.find_by_title("Incep").is_none());
    assert!(store.find_by_title(" Inception").is_none());
    assert!(store.find_by_title("").is_none());
}

#[test]
fn find_by_title_returns_first_duplicate() {
    let mut store = MovieStore::new();
    store.add_movie(Movie::new("Solaris", 1972, 8.0, "Sci-Fi"));
    store.add_movie(Movie::new("Solaris", 2002, 6.2, "Drama"));
    assert_eq!(store.find_by_title("solaris").unwrap().year, 1972);
}

#[test]
fn filter_preserves_store_order() {
    let store = MovieStore::seeded();
    let dramas = store.filter(genre_is("Drama"));
    assert_eq!(titles(&dramas), ["Parasite", "Joker", "Forrest Gump"]);

    let recent = store.filter(|m| m.year >= 2017);
    assert_eq!(
        titles(&recent),
        ["Parasite", "Avengers: Endgame", "Joker", "Coco"]
    );
}

#[test]
fn filter_with_no_match_is_empty() {
    let store = MovieStore::seeded();
    assert!(store.filter(genre_is("Western")).is_empty());
    // genre matching is exact
    assert!(store.filter(genre_is("drama")).is_empty());
}

#[test]
fn unique_genres_are_deduplicated() {
    let store = MovieStore::seeded();
    let genres: Vec<_> = store.unique_genres().into_iter().collect();
    assert_eq!(genres, ["Action", "Animation", "Crime", "Drama", "Sci-Fi"]);
    assert!(MovieStore::new().unique_genres().is_empty());
}

#[test]
fn best_movie_on_seed_data() {
    let store = MovieStore::seeded();
    let best = store.best_movie().unwrap();
    assert_eq!(best.title, "The Dark Knight");
    assert_eq!(best.rating, 9.0);
}

#[test]
fn best_movie_prefers_first_on_tie() {
    let store: MovieStore = [
        Movie::new("A", 2000, 7.0, "X"),
        Movie::new("B", 2001, 9.5, "X"),
        Movie::new("C", 2002, 9.5, "X"),
    ]
    .into_iter()
    .collect();
    assert_eq!(store.best_movie().unwrap().title, "B");
}

#[test]
fn best_movie_of_empty_store_is_none() {
    assert!(MovieStore::new().best_movie().is_none());
}

#[test]
fn group_by_decade_buckets_and_orders() {
    let store = MovieStore::seeded();
    let groups = store.group_by_decade();

    let keys: Vec<String> = groups.keys().map(|d| d.to_string()).collect();
    assert_eq!(keys, ["1990s", "2000s", "2010s"]);

    let nineties = &groups[&Decade::of_year(1994)];
    assert_eq!(
        titles(nineties),
        ["The Lion King", "Pulp Fiction", "Forrest Gump"]
    );
    assert_eq!(groups[&Decade::of_year(2014)].len(), 6);
    assert_eq!(groups[&Decade::of_year(2008)].len(), 1);
}

#[test]
fn add_movie_appends_and_is_findable() {
    let mut store = MovieStore::seeded();
    let before = store.len();

    store.add_movie(Movie::new("Dune", 2021, 8.0, "Sci-Fi"));

    assert_eq!(store.len(), before + 1);
    assert_eq!(store.movies().last().unwrap().title, "Dune");
    assert_eq!(store.find_by_title("dune").unwrap().year, 2021);
    assert!(store.group_by_decade().contains_key(&Decade::of_year(2020)));
}
