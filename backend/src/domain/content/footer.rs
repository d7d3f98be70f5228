//! Footer content nested under the settings document.

use serde::Deserialize;

use super::nullable::or_default;

/// Footer text, social links and extra links.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    #[serde(default)]
    pub footer_text: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub copyright_text: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub additional_links: Vec<AdditionalLink>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalLink {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

impl FooterContent {
    /// Drop links the editor hid.
    pub(crate) fn retain_visible(mut self) -> Self {
        self.social_links.retain(|link| link.is_visible != Some(false));
        self.additional_links
            .retain(|link| link.is_visible != Some(false));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hidden_links_are_dropped_and_order_kept() {
        let footer: FooterContent = serde_json::from_value(json!({
            "footerText": "Supporting families",
            "socialLinks": [
                { "platform": "instagram", "url": "https://instagram.com/x", "isVisible": true },
                { "platform": "facebook", "url": "https://facebook.com/x", "isVisible": false },
                { "platform": "linkedin", "url": "https://linkedin.com/x" }
            ],
            "additionalLinks": null
        }))
        .expect("footer decodes");

        let footer = footer.retain_visible();
        let platforms: Vec<_> = footer
            .social_links
            .iter()
            .filter_map(|link| link.platform.as_deref())
            .collect();
        assert_eq!(platforms, vec!["instagram", "linkedin"]);
        assert!(footer.additional_links.is_empty());
    }
}
