//! Home page hero singleton.

use serde::Deserialize;

use super::media::{BackgroundMedia, CallToAction, background_media};

/// Headline block shown at the top of the home page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub subheadline: Option<String>,
    #[serde(default, deserialize_with = "background_media")]
    pub background_media: Option<BackgroundMedia>,
    #[serde(default)]
    pub cta_text: Option<String>,
    #[serde(default)]
    pub cta_url: Option<String>,
}

impl HeroContent {
    /// Hero button, when both label and target are set.
    pub fn call_to_action(&self) -> Option<CallToAction> {
        CallToAction::from_parts(self.cta_text.as_deref(), self.cta_url.as_deref(), false)
    }
}
