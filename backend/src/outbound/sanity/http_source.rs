//! Reqwest-backed Sanity content source.
//!
//! This adapter owns transport details only: URL construction, parameter
//! encoding, timeout and HTTP error mapping, and unwrapping the `result`
//! envelope. Shaping into typed documents happens in the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use super::dto::{QueryErrorDto, QueryResponseDto};
use crate::domain::ports::{ContentQuery, ContentSource, ContentSourceError};

const DEFAULT_USER_AGENT: &str = "coaching-site/0.1";

/// Project coordinates of the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityEndpoint {
    pub project_id: String,
    pub dataset: String,
    /// Dated API version without the `v` prefix, e.g. `2024-01-01`.
    pub api_version: String,
    /// Query the edge cache instead of the live API.
    pub use_cdn: bool,
}

impl SanityEndpoint {
    /// Query endpoint URL for this project and dataset.
    ///
    /// # Examples
    /// ```
    /// use coaching_site::outbound::sanity::SanityEndpoint;
    ///
    /// let endpoint = SanityEndpoint {
    ///     project_id: "rb1epwnp".to_owned(),
    ///     dataset: "production".to_owned(),
    ///     api_version: "2024-01-01".to_owned(),
    ///     use_cdn: false,
    /// };
    /// assert_eq!(
    ///     endpoint.query_url().expect("valid URL").as_str(),
    ///     "https://rb1epwnp.api.sanity.io/v2024-01-01/data/query/production",
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the coordinates do not form a valid URL.
    pub fn query_url(&self) -> Result<Url, url::ParseError> {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        Url::parse(&format!(
            "https://{project}.{host}.sanity.io/v{version}/data/query/{dataset}",
            project = self.project_id,
            version = self.api_version.trim_start_matches('v'),
            dataset = self.dataset,
        ))
    }
}

/// Content source issuing anonymous GET queries against one project.
pub struct SanityHttpSource {
    client: Client,
    query_url: Url,
}

impl SanityHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint URL is invalid or the reqwest
    /// client cannot be constructed.
    pub fn new(endpoint: &SanityEndpoint, timeout: Duration) -> Result<Self, ContentSourceError> {
        let query_url = endpoint
            .query_url()
            .map_err(|error| ContentSourceError::invalid_request(format!("invalid endpoint: {error}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|error| ContentSourceError::transport(error.to_string()))?;
        Ok(Self { client, query_url })
    }

    /// Base URL queries are sent to.
    pub fn query_url(&self) -> &Url {
        &self.query_url
    }
}

#[async_trait]
impl ContentSource for SanityHttpSource {
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, ContentSourceError> {
        let pairs = query_pairs(query)?;
        let response = self
            .client
            .get(self.query_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&pairs)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_result(body.as_ref())
    }
}

/// URL query pairs: the GROQ text plus each parameter as `$name=<json>`.
fn query_pairs(query: &ContentQuery) -> Result<Vec<(String, String)>, ContentSourceError> {
    let mut pairs = Vec::with_capacity(query.params.len() + 1);
    pairs.push(("query".to_owned(), query.groq.to_owned()));
    for (name, value) in &query.params {
        let encoded = serde_json::to_string(value).map_err(|error| {
            ContentSourceError::invalid_request(format!("parameter {name} not encodable: {error}"))
        })?;
        pairs.push((format!("${name}"), encoded));
    }
    Ok(pairs)
}

fn parse_result(body: &[u8]) -> Result<Value, ContentSourceError> {
    let decoded: QueryResponseDto = serde_json::from_slice(body).map_err(|error| {
        ContentSourceError::decode(format!("invalid query response JSON: {error}"))
    })?;
    Ok(decoded.result)
}

fn map_transport_error(error: reqwest::Error) -> ContentSourceError {
    if error.is_timeout() {
        ContentSourceError::timeout(error.to_string())
    } else {
        ContentSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ContentSourceError {
    let detail = serde_json::from_slice::<QueryErrorDto>(body)
        .ok()
        .and_then(|dto| dto.summary())
        .unwrap_or_else(|| body_preview(body));
    let message = if detail.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), detail)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => ContentSourceError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ContentSourceError::timeout(message)
        }
        _ if status.is_client_error() => ContentSourceError::invalid_request(message),
        _ => ContentSourceError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
