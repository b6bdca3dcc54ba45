//! The genre allow-list.

/// Canonical set of genres a movie record may carry, in display order.
pub const ALLOWED_GENRES: [&str; 6] = [
    "Animation",
    "Family",
    "Action",
    "Comedy",
    "Drama",
    "Sci-Fi",
];

/// Returns true if the genre is a member of the allow-list.
///
/// Matching is exact and case-sensitive.
pub fn is_allowed_genre(genre: &str) -> bool {
    ALLOWED_GENRES.contains(&genre)
}

/// A fresh copy of the allow-list.
///
/// Callers may reorder or extend the returned vector freely; the
/// canonical set is never affected.
pub fn allowed_genres() -> Vec<String> {
    ALLOWED_GENRES.iter().map(|genre| genre.to_string()).collect()
}
