//! Recommended resources collection.

use serde::Deserialize;

use super::media::{ImageRef, Slug};
use super::nullable::or_default;
use super::rich_text::RichText;

/// Book, article or tool recommended to clients.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub full_content: RichText,
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// External location of the resource itself.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub order: Option<f64>,
}

impl Resource {
    pub fn detail_path(&self) -> Option<String> {
        self.slug
            .as_ref()
            .filter(|slug| !slug.is_empty())
            .map(|slug| format!("/resources/{slug}"))
    }

    /// External URL, when set.
    pub fn external_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_resource() {
        let resource: Resource = serde_json::from_value(json!({
            "_id": "res-1",
            "title": "The Whole-Brain Child",
            "slug": { "current": "whole-brain-child" },
            "url": "",
            "category": "books"
        }))
        .expect("resource decodes");

        assert_eq!(resource.detail_path().as_deref(), Some("/resources/whole-brain-child"));
        assert!(resource.external_url().is_none());
    }
}
