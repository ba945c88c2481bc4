//! Title matching between TMDB and Rotten Tomatoes
//!
//! A candidate matches when its title equals the resolved title ignoring
//! case and its release year occurs inside the resolved release date.
//! The first matching candidate wins, later ones are never inspected.

use crate::types::{ResolvedTitle, SearchCandidate};

/// Returns the first candidate matching the resolved title
pub fn match_candidate<'a>(
    resolved: &ResolvedTitle,
    candidates: &'a [SearchCandidate],
) -> Option<&'a SearchCandidate> {
    let release_date = resolved.release_date.as_deref()?;
    let title = resolved.title.to_lowercase();

    candidates.iter().find(|candidate| {
        let year_matches = candidate
            .release_year
            .as_deref()
            .is_some_and(|year| !year.is_empty() && release_date.contains(year));

        year_matches && candidate.title.to_lowercase() == title
    })
}
