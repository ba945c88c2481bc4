//! TMDB metadata resolver
//!
//! Resolves IMDb ids through the `/find` endpoint. Only `movie_results`
//! is consulted and the first entry wins.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::client::TomatoClient;
use crate::error::{Result, TomatoError};
use crate::provider::MetadataResolver;
use crate::types::ResolvedTitle;
use crate::url::{TMDB_BASE_URL, build_find_url};

#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    movie_results: Vec<FindMovie>,
}

#[derive(Debug, Deserialize)]
struct FindMovie {
    id: Option<u64>,
    title: Option<String>,
    release_date: Option<String>,
}

/// Metadata resolver backed by the TMDB v3 API
#[derive(Debug, Clone)]
pub struct TmdbResolver {
    client: TomatoClient,
    api_key: String,
    base_url: String,
}

impl TmdbResolver {
    pub fn new(client: TomatoClient, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, TMDB_BASE_URL)
    }

    pub fn with_base_url(
        client: TomatoClient,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MetadataResolver for TmdbResolver {
    async fn resolve(&self, external_id: &str) -> Result<ResolvedTitle> {
        let url = build_find_url(&self.base_url, external_id);
        let response: FindResponse = self.client.get_json(&url, &self.api_key).await?;

        let not_found = || TomatoError::NotFound(format!("No TMDB movie for {}", external_id));

        let movie = response.movie_results.into_iter().next().ok_or_else(not_found)?;

        // TMDB ids start at 1; a zero id is as good as none.
        let internal_id = movie.id.filter(|id| *id != 0).ok_or_else(not_found)?;
        let title = movie.title.ok_or_else(not_found)?;

        debug!(external_id, internal_id, title = %title, "Resolved TMDB title");

        Ok(ResolvedTitle {
            internal_id,
            title,
            release_date: movie.release_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn resolver_for(server: &MockServer) -> TmdbResolver {
        TmdbResolver::with_base_url(TomatoClient::new().unwrap(), "test-key", server.uri())
    }

    #[tokio::test]
    async fn test_resolve_first_movie_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/find/tt1375666"))
            .and(query_param("external_source", "imdb_id"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "movie_results": [
                    {"id": 27205, "title": "Inception", "release_date": "2010-07-16"},
                    {"id": 1, "title": "Other", "release_date": "1999-01-01"}
                ],
                "tv_results": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resolved = resolver_for(&server).resolve("tt1375666").await.unwrap();
        assert_eq!(
            resolved,
            ResolvedTitle {
                internal_id: 27205,
                title: "Inception".to_string(),
                release_date: Some("2010-07-16".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_empty_results_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "movie_results": [],
                "tv_results": [{"id": 1399, "name": "Game of Thrones"}]
            })))
            .mount(&server)
            .await;

        let result = resolver_for(&server).resolve("tt0944947").await;
        assert!(matches!(result, Err(TomatoError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_resolve_missing_id_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "movie_results": [{"id": 0, "title": "Ghost"}]
            })))
            .mount(&server)
            .await;

        let result = resolver_for(&server).resolve("tt0000001").await;
        assert!(matches!(result, Err(TomatoError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_resolve_without_release_date() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "movie_results": [{"id": 42, "title": "Untitled Project"}]
            })))
            .mount(&server)
            .await;

        let resolved = resolver_for(&server).resolve("tt0000042").await.unwrap();
        assert_eq!(resolved.internal_id, 42);
        assert_eq!(resolved.release_date, None);
    }

    #[tokio::test]
    async fn test_resolve_unauthorized_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "status_code": 7,
                "status_message": "Invalid API key"
            })))
            .mount(&server)
            .await;

        match resolver_for(&server).resolve("tt1375666").await {
            Err(TomatoError::Status { status, .. }) => assert_eq!(status, 401),
            other => panic!("Expected Status error, got {:?}", other),
        }
    }
}
