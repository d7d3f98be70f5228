//! Coaching services collection.

use serde::Deserialize;

use super::media::{CallToAction, ImageRef, Slug};
use super::nullable::or_default;
use super::rich_text::RichText;

/// One coaching service offered on the site.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
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
    pub icon: Option<ImageRef>,
    #[serde(default)]
    pub cta_button: Option<ServiceButton>,
    #[serde(default)]
    pub order: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ServiceButton {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Service {
    /// Service button, when both label and link are set.
    pub fn call_to_action(&self) -> Option<CallToAction> {
        let button = self.cta_button.as_ref()?;
        CallToAction::from_parts(button.text.as_deref(), button.link.as_deref(), false)
    }

    /// Path of the detail page, when the service has a usable slug.
    pub fn detail_path(&self) -> Option<String> {
        self.slug
            .as_ref()
            .filter(|slug| !slug.is_empty())
            .map(|slug| format!("/services/{slug}"))
    }
}
