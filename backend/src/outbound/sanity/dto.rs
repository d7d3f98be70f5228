//! DTOs for decoding Sanity query API responses.

use serde::Deserialize;
use serde_json::Value;

/// Success envelope. A query matching nothing has a `null` result.
#[derive(Debug, Deserialize)]
pub(super) struct QueryResponseDto {
    #[serde(default)]
    pub(super) result: Value,
}

/// Error envelope returned alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub(super) struct QueryErrorDto {
    pub(super) error: QueryErrorDetailDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct QueryErrorDetailDto {
    #[serde(default, rename = "type")]
    pub(super) kind: Option<String>,
    #[serde(default)]
    pub(super) description: Option<String>,
}

impl QueryErrorDto {
    /// One-line summary, e.g. `queryParseError: unexpected token`.
    pub(super) fn summary(&self) -> Option<String> {
        match (&self.error.kind, &self.error.description) {
            (Some(kind), Some(description)) => Some(format!("{kind}: {description}")),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }
}
