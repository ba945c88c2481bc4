//! Core data types for the trailer lookup
//!
//! Contains the request, upstream and response structures used throughout the library.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PipelineError;

/// Media kinds accepted by the add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "series" => Ok(Self::Series),
            _ => Err(PipelineError::InvalidMediaType),
        }
    }
}

/// A validated metadata request
///
/// `media_id` always starts with `tt` and carries no extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRequest {
    pub media_type: MediaType,
    pub media_id: String,
}

impl MediaRequest {
    /// Validate raw path segments into a request
    ///
    /// The media type is checked first, so an unsupported type wins over
    /// a malformed id. Anything from the first `.` of the id on is dropped
    /// (`tt1375666.json` becomes `tt1375666`).
    ///
    /// # Errors
    /// - `InvalidMediaType` if the type is neither `movie` nor `series`
    /// - `InvalidMediaId` if the stripped id does not start with `tt`
    pub fn parse(media_type: &str, media_id: &str) -> Result<Self, PipelineError> {
        let media_type: MediaType = media_type.parse()?;

        let media_id = strip_extension(media_id);
        if !media_id.starts_with("tt") {
            return Err(PipelineError::InvalidMediaId);
        }

        Ok(Self {
            media_type,
            media_id: media_id.to_string(),
        })
    }
}

/// Drops everything from the first `.` on
pub fn strip_extension(media_id: &str) -> &str {
    media_id.split('.').next().unwrap_or(media_id)
}

/// Title data resolved from the metadata API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTitle {
    /// TMDB numeric id
    pub internal_id: u64,

    /// Canonical title (e.g., "Inception")
    pub title: String,

    /// Release date as reported upstream (e.g., "2010-07-16")
    pub release_date: Option<String>,
}

/// A media row from the Rotten Tomatoes search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub title: String,

    /// Page link, absolute or site-relative
    pub link: String,

    pub image_src: String,

    pub cast: Vec<String>,

    /// Release year as printed by the site (e.g., "2010")
    pub release_year: Option<String>,

    pub tomatometer_score: Option<String>,

    pub tomatometer_certified: bool,
}

/// One entry of the embedded videos payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoDescriptor {
    pub video_type: String,

    /// Video file URL
    pub file: String,

    /// Label shown by the site, used as the provider name
    pub title: String,

    pub thumbnail: String,
}

impl VideoDescriptor {
    pub const TRAILER: &'static str = "TRAILER";

    /// Reads one payload entry
    ///
    /// Returns `None` for anything that is not a JSON object. Missing or
    /// non-string fields become empty strings.
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let field = |name: &str| {
            entry
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Some(Self {
            video_type: field("videoType"),
            file: field("file"),
            title: field("title"),
            thumbnail: field("thumbnail"),
        })
    }

    pub fn is_trailer(&self) -> bool {
        self.video_type == Self::TRAILER
    }

    /// A trailer with a file to play
    pub fn is_playable_trailer(&self) -> bool {
        self.is_trailer() && !self.file.is_empty()
    }
}

/// Normalized trailer entry returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerLink {
    #[serde(rename = "trailers")]
    pub trailer_url: String,
    pub provider: String,
    pub thumbnail: String,
}

impl From<VideoDescriptor> for TrailerLink {
    fn from(video: VideoDescriptor) -> Self {
        Self {
            trailer_url: video.file,
            provider: video.title,
            thumbnail: video.thumbnail,
        }
    }
}

/// Successful lookup payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub name: String,
    pub links: Vec<TrailerLink>,
}

/// Wire envelope: `{"meta": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEnvelope {
    pub meta: MetaResponse,
}

impl From<MetaResponse> for MetaEnvelope {
    fn from(meta: MetaResponse) -> Self {
        Self { meta }
    }
}
