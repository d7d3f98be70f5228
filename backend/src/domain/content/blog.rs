//! Blog posts collection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use super::media::{ImageRef, Slug};
use super::nullable::or_default;
use super::rich_text::RichText;

/// Published article.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub featured_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "or_default")]
    pub content: RichText,
    #[serde(default, deserialize_with = "publish_date")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "or_default")]
    pub is_published: bool,
}

/// Accept RFC 3339 timestamps or bare dates; anything else is unset.
fn publish_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_publish_date))
}

fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

impl BlogPost {
    pub fn detail_path(&self) -> Option<String> {
        self.slug
            .as_ref()
            .filter(|slug| !slug.is_empty())
            .map(|slug| format!("/blog/{slug}"))
    }

    /// Human-readable publish date, e.g. `March 1, 2024`.
    pub fn formatted_date(&self) -> Option<String> {
        self.published_at
            .map(|date| date.format("%B %-d, %Y").to_string())
    }
}

/// Keep published posts, newest first. Undated posts sort last.
pub(crate) fn published_newest_first(mut posts: Vec<BlogPost>) -> Vec<BlogPost> {
    posts.retain(|post| post.is_published);
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    posts
}
