//! Search filtering over the accumulated movie list.

use crate::catalog::Movie;

/// A movie as listed in the grid.
///
/// `key` is the movie's position in the unfiltered list. It stays the same
/// while the query changes, so per-tile presentation state (hover) follows
/// the movie rather than the slot it happens to occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedMovie<'a> {
    pub key: usize,
    pub movie: &'a Movie,
}

/// Case-insensitive substring filter. Preserves order; an empty query keeps everything.
pub fn filter_movies<'a>(movies: &'a [Movie], query: &str) -> Vec<ListedMovie<'a>> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .enumerate()
        .filter(|(_, movie)| movie.name.to_lowercase().contains(&needle))
        .map(|(key, movie)| ListedMovie { key, movie })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::movie;

    fn names<'a>(listed: &[ListedMovie<'a>]) -> Vec<&'a str> {
        listed.iter().map(|l| l.movie.name.as_str()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let movies = vec![movie("Dune"), movie("Her")];
        assert_eq!(names(&filter_movies(&movies, "he")), vec!["Her"]);
        assert_eq!(names(&filter_movies(&movies, "UN")), vec!["Dune"]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let movies = vec![movie("Dune"), movie("Her")];
        assert!(filter_movies(&movies, "zz").is_empty());
    }

    #[test]
    fn test_empty_query_keeps_all_in_order() {
        let movies = vec![movie("B"), movie("A"), movie("C")];
        assert_eq!(names(&filter_movies(&movies, "")), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_keys_are_unfiltered_positions() {
        let movies = vec![movie("Alien"), movie("Brazil"), movie("Aliens")];
        let listed = filter_movies(&movies, "alien");
        let keys: Vec<usize> = listed.iter().map(|l| l.key).collect();
        assert_eq!(keys, vec![0, 2]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let movies = vec![movie("Heat"), movie("Her"), movie("Dune"), movie("Shelter")];
        let once: Vec<Movie> = filter_movies(&movies, "HE")
            .into_iter()
            .map(|l| l.movie.clone())
            .collect();
        let twice: Vec<Movie> = filter_movies(&once, "HE")
            .into_iter()
            .map(|l| l.movie.clone())
            .collect();
        assert_eq!(once, twice);
        assert_eq!(
            once.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            vec!["Heat", "Her", "Shelter"]
        );
    }

    #[test]
    fn test_duplicate_names_are_both_listed() {
        let movies = vec![movie("Solaris"), movie("Solaris")];
        let listed = filter_movies(&movies, "sol");
        assert_eq!(listed.len(), 2);
        assert_ne!(listed[0].key, listed[1].key);
    }
}
