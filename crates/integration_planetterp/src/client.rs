//! PlanetTerp HTTP client
//!
//! Thin client over the public PlanetTerp REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{Course, GradeSection, Professor};

/// PlanetTerp client errors
#[derive(Debug, Error)]
pub enum PlanetTerpError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The requested course or professor does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// PlanetTerp service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetTerpConfig {
    /// API base URL (default: <https://planetterp.com/api/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://planetterp.com/api/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for PlanetTerpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for the PlanetTerp API
#[async_trait]
pub trait PlanetTerpClient: Send + Sync + std::fmt::Debug {
    /// Fetch a course with its reviews
    async fn course(&self, name: &str) -> Result<Course, PlanetTerpError>;

    /// Fetch grade sections, filtered by course and/or professor
    async fn grades(
        &self,
        course: Option<&str>,
        professor: Option<&str>,
    ) -> Result<Vec<GradeSection>, PlanetTerpError>;

    /// Fetch a professor, with reviews when requested
    async fn professor(&self, name: &str, reviews: bool) -> Result<Professor, PlanetTerpError>;

    /// List course identifiers, paginated
    async fn courses(&self, limit: u32, offset: u32) -> Result<Vec<String>, PlanetTerpError>;

    /// List professor names, paginated
    async fn professors(&self, limit: u32, offset: u32) -> Result<Vec<String>, PlanetTerpError>;
}

/// HTTP implementation of the PlanetTerp client
#[derive(Debug)]
pub struct HttpPlanetTerpClient {
    client: Client,
    config: PlanetTerpConfig,
}

/// Listing-endpoint records carry more fields; only the name is needed
#[derive(Debug, Deserialize)]
struct NamedRecord {
    name: String,
}

impl HttpPlanetTerpClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: PlanetTerpConfig) -> Result<Self, PlanetTerpError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlanetTerpError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, PlanetTerpError> {
        Self::new(PlanetTerpConfig::default())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, PlanetTerpError> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        debug!(url = %url, "Fetching from PlanetTerp");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| PlanetTerpError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlanetTerpError::RateLimitExceeded);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PlanetTerpError::NotFound(format!("{endpoint} {query:?}")));
        }
        if status.is_server_error() {
            return Err(PlanetTerpError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(PlanetTerpError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| PlanetTerpError::ParseError(e.to_string()))
    }

    /// Fetch one page of a listing endpoint.
    ///
    /// Past the end of the catalog the API keeps answering HTTP 200 but with
    /// a JSON error object instead of a list; that page is reported as empty
    /// so callers can stop paging.
    async fn get_listing_page(
        &self,
        endpoint: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<String>, PlanetTerpError> {
        let body: serde_json::Value = self
            .get_json(
                endpoint,
                &[
                    ("limit", limit.to_string()),
                    ("offset", offset.to_string()),
                ],
            )
            .await?;

        let serde_json::Value::Array(items) = body else {
            debug!(endpoint, offset, "non-list page, catalog exhausted");
            return Ok(Vec::new());
        };

        items
            .into_iter()
            .map(|item| {
                serde_json::from_value::<NamedRecord>(item)
                    .map(|r| r.name)
                    .map_err(|e| PlanetTerpError::ParseError(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl PlanetTerpClient for HttpPlanetTerpClient {
    #[instrument(skip(self))]
    async fn course(&self, name: &str) -> Result<Course, PlanetTerpError> {
        self.get_json(
            "course",
            &[
                ("name", name.to_string()),
                ("reviews", "true".to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn grades(
        &self,
        course: Option<&str>,
        professor: Option<&str>,
    ) -> Result<Vec<GradeSection>, PlanetTerpError> {
        let mut query = Vec::new();
        if let Some(course) = course {
            query.push(("course", course.to_string()));
        }
        if let Some(professor) = professor {
            query.push(("professor", professor.to_string()));
        }
        self.get_json("grades", &query).await
    }

    #[instrument(skip(self))]
    async fn professor(&self, name: &str, reviews: bool) -> Result<Professor, PlanetTerpError> {
        self.get_json(
            "professor",
            &[
                ("name", name.to_string()),
                ("reviews", reviews.to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn courses(&self, limit: u32, offset: u32) -> Result<Vec<String>, PlanetTerpError> {
        self.get_listing_page("courses", limit, offset).await
    }

    #[instrument(skip(self))]
    async fn professors(&self, limit: u32, offset: u32) -> Result<Vec<String>, PlanetTerpError> {
        self.get_listing_page("professors", limit, offset).await
    }
}
