use crate::types::Movie;

/// The catalog a fresh session starts with.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new("Inception", 2010, 8.8, "Sci-Fi"),
        Movie::new("The Dark Knight", 2008, 9.0, "Action"),
        Movie::new("Interstellar", 2014, 8.6, "Sci-Fi"),
        Movie::new("Parasite", 2019, 8.6, "Drama"),
        Movie::new("Avengers: Endgame", 2019, 8.4, "Action"),
        Movie::new("Joker", 2019, 8.4, "Drama"),
        Movie::new("Coco", 2017, 8.4, "Animation"),
        Movie::new("The Lion King", 1994, 8.5, "Animation"),
        Movie::new("Pulp Fiction", 1994, 8.9, "Crime"),
        Movie::new("Forrest Gump", 1994, 8.8, "Drama"),
    ]
}
