//! HTTP client shared by the TMDB resolver and the Rotten Tomatoes scraper
//!
//! Every request carries a bounded timeout. There are no retries: any
//! failure is returned to the caller as is.

use std::time::Duration;

use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, TomatoError};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Thin wrapper over `reqwest::Client`
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct TomatoClient {
    client: reqwest::Client,
}

impl TomatoClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(TomatoError::HttpError)?;

        Ok(Self { client })
    }

    /// Fetch a page body as text
    ///
    /// # Errors
    /// - `HttpError` - Network errors, including timeouts
    /// - `Status` - Any non-success status code
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "Fetching page");

        let response = self.client.get(url).send().await?;
        let response = Self::check_status(url, response)?;

        response.text().await.map_err(TomatoError::HttpError)
    }

    /// Fetch and decode a JSON document using a bearer credential
    ///
    /// # Errors
    /// - `InvalidCredential` - The bearer token is not a valid header value
    /// - `HttpError` - Network errors or an undecodable body
    /// - `Status` - Any non-success status code
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, bearer: &str) -> Result<T> {
        debug!(url, "Fetching JSON");

        let token = HeaderValue::from_str(&format!("Bearer {}", bearer))
            .map_err(|e| TomatoError::InvalidCredential(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, token)
            .send()
            .await?;
        let response = Self::check_status(url, response)?;

        response.json::<T>().await.map_err(TomatoError::HttpError)
    }

    fn check_status(url: &str, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(TomatoError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_client_creation() {
        assert!(TomatoClient::new().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/m/heat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let client = TomatoClient::new().unwrap();
        let body = client.fetch(&format!("{}/m/heat", server.uri())).await.unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = TomatoClient::new().unwrap();
        match client.fetch(&format!("{}/m/heat", server.uri())).await {
            Err(TomatoError::Status { status, .. }) => assert_eq!(status, 503),
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = TomatoClient::with_config(ClientConfig {
            timeout_secs: 1,
            ..ClientConfig::default()
        })
        .unwrap();

        match client.fetch(&server.uri()).await {
            Err(TomatoError::HttpError(e)) => assert!(e.is_timeout()),
            other => panic!("Expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = TomatoClient::new().unwrap();
        let value: serde_json::Value = client.get_json(&server.uri(), "secret").await.unwrap();
        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn test_get_json_rejects_unsendable_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let client = TomatoClient::new().unwrap();
        let result: Result<serde_json::Value> = client.get_json(&server.uri(), "sec\nret").await;
        assert!(matches!(result, Err(TomatoError::InvalidCredential(_))));
    }
}
