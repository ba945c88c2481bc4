//! Search results parser for Rotten Tomatoes
//!
//! Parses HTML from the search page and extracts media rows.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{Result, TomatoError};
use crate::types::SearchCandidate;

const ROW_SELECTOR: &str = r#"search-page-media-row[data-qa="data-row"]"#;
const TITLE_SELECTOR: &str = r#"a[data-qa="info-name"]"#;
const LINK_SELECTOR: &str = r#"a[data-qa="thumbnail-link"][href]"#;
const IMAGE_SELECTOR: &str = "img[src]";

struct RowSelectors {
    title: Selector,
    link: Selector,
    image: Selector,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| TomatoError::ParseError(format!("Invalid selector {}: {:?}", css, e)))
}

/// Parses search results HTML and returns the media rows in page order
///
/// # Arguments
/// * `html` - Raw HTML string from the search page
///
/// # Returns
/// Vector of `SearchCandidate` structs, empty if the page has no media rows.
/// Rows without a title anchor or a link anchor are skipped.
///
/// # Errors
/// Returns `ParseError` only if a selector fails to compile
pub fn parse_search_results(html: &str) -> Result<Vec<SearchCandidate>> {
    let document = Html::parse_document(html);

    let row_selector = selector(ROW_SELECTOR)?;
    let selectors = RowSelectors {
        title: selector(TITLE_SELECTOR)?,
        link: selector(LINK_SELECTOR)?,
        image: selector(IMAGE_SELECTOR)?,
    };

    let mut results = Vec::new();

    for (index, row) in document.select(&row_selector).enumerate() {
        match parse_media_row(&row, &selectors) {
            Some(candidate) => results.push(candidate),
            None => debug!(index, "Skipping search row without title or link"),
        }
    }

    Ok(results)
}

/// Parses a single media row element
///
/// # Returns
/// `Some(SearchCandidate)` if the row has both anchors, `None` otherwise
fn parse_media_row(row: &ElementRef, selectors: &RowSelectors) -> Option<SearchCandidate> {
    let title = row
        .select(&selectors.title)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())?;

    let link = row
        .select(&selectors.link)
        .next()
        .and_then(|el| el.value().attr("href"))?
        .to_string();

    let image_src = row
        .select(&selectors.image)
        .next()
        .and_then(|el| el.value().attr("src"))
        .unwrap_or_default()
        .to_string();

    let attrs = row.value();

    Some(SearchCandidate {
        title,
        link,
        image_src,
        cast: parse_cast(attrs.attr("cast")),
        release_year: attrs.attr("release-year").map(str::to_string),
        tomatometer_score: attrs.attr("tomatometer-score").map(str::to_string),
        tomatometer_certified: attrs.attr("tomatometer-is-certified") == Some("true"),
    })
}

/// Splits the comma separated cast attribute
fn parse_cast(cast: Option<&str>) -> Vec<String> {
    cast.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|actor| !actor.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
