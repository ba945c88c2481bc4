//! URL helper functions for TMDB and Rotten Tomatoes
//!
//! Provides functions for building search, videos and lookup URLs.
//! Every builder takes the base URL so tests can point at a mock server.

/// Default Rotten Tomatoes site root
pub const RT_BASE_URL: &str = "https://www.rottentomatoes.com";

/// Default TMDB API root
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Builds the search URL for a given query
///
/// URL encodes the query and constructs the search URL.
///
/// # Example
/// ```
/// use tomato_core::url::{build_search_url, RT_BASE_URL};
/// let url = build_search_url(RT_BASE_URL, "the dark knight");
/// assert_eq!(url, "https://www.rottentomatoes.com/search?search=the%20dark%20knight");
/// ```
pub fn build_search_url(base: &str, query: &str) -> String {
    let encoded = urlencoding::encode(query);
    format!("{}/search?search={}", base.trim_end_matches('/'), encoded)
}

/// Builds the videos page URL for a media page link
///
/// Site-relative links (`/m/inception`) are resolved against `base`,
/// absolute links are kept as they are.
///
/// # Example
/// ```
/// use tomato_core::url::{build_videos_url, RT_BASE_URL};
/// let url = build_videos_url(RT_BASE_URL, "https://www.rottentomatoes.com/m/inception");
/// assert_eq!(url, "https://www.rottentomatoes.com/m/inception/videos");
/// ```
pub fn build_videos_url(base: &str, link: &str) -> String {
    format!("{}/videos", absolutize(base, link))
}

/// Builds the TMDB "find by IMDb id" URL
///
/// # Example
/// ```
/// use tomato_core::url::{build_find_url, TMDB_BASE_URL};
/// let url = build_find_url(TMDB_BASE_URL, "tt1375666");
/// assert_eq!(url, "https://api.themoviedb.org/3/find/tt1375666?external_source=imdb_id");
/// ```
pub fn build_find_url(base: &str, external_id: &str) -> String {
    format!(
        "{}/find/{}?external_source=imdb_id",
        base.trim_end_matches('/'),
        urlencoding::encode(external_id)
    )
}

fn absolutize(base: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_string();
    }

    let base = base.trim_end_matches('/');
    if link.starts_with('/') {
        format!("{}{}", base, link)
    } else {
        format!("{}/{}", base, link)
    }
}
