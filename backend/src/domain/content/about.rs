//! About singleton with its carousel sections.

use serde::Deserialize;

use super::media::{CallToAction, ImageRef, Slug};
use super::nullable::or_default;
use super::rich_text::RichText;

/// About block on the home page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Pull quote shown beside the bio.
    #[serde(default)]
    pub highlight: Option<String>,
    /// Plain-text biography.
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "or_default")]
    pub carousel_sections: Vec<AboutSection>,
}

/// Carousel card linking to its own detail page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default, deserialize_with = "or_default")]
    pub long_description: RichText,
    #[serde(default)]
    pub cta_button: Option<SectionButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionButton {
    #[serde(default)]
    pub is_visible: Option<bool>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_external: Option<bool>,
}

impl AboutContent {
    /// Carousel section whose slug equals `slug`.
    pub fn section_by_slug(&self, slug: &str) -> Option<&AboutSection> {
        self.carousel_sections
            .iter()
            .find(|section| section.slug.as_ref().is_some_and(|s| s.as_str() == slug))
    }
}

impl AboutSection {
    pub fn detail_path(&self) -> Option<String> {
        self.slug
            .as_ref()
            .filter(|slug| !slug.is_empty())
            .map(|slug| format!("/about/{slug}"))
    }

    /// Section button, unless hidden or incomplete. `is_external` forces a
    /// new tab.
    pub fn call_to_action(&self) -> Option<CallToAction> {
        let button = self.cta_button.as_ref()?;
        if button.is_visible == Some(false) {
            return None;
        }
        CallToAction::from_parts(
            button.text.as_deref(),
            button.url.as_deref(),
            button.is_external == Some(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn about() -> AboutContent {
        serde_json::from_value(json!({
            "_id": "about",
            "highlight": "Every family deserves support",
            "carouselSections": [
                {
                    "title": "My story",
                    "slug": { "current": "my-story" },
                    "ctaButton": { "isVisible": true, "text": "Read", "url": "https://blog.example.com", "isExternal": true }
                },
                {
                    "title": "Approach",
                    "slug": { "current": "approach" },
                    "ctaButton": { "isVisible": false, "text": "Hidden", "url": "/x" }
                }
            ]
        }))
        .expect("about decodes")
    }

    #[rstest]
    #[case("my-story", Some("My story"))]
    #[case("approach", Some("Approach"))]
    #[case("missing", None)]
    fn finds_sections_by_slug(#[case] slug: &str, #[case] title: Option<&str>) {
        let content = about();
        assert_eq!(
            content
                .section_by_slug(slug)
                .and_then(|section| section.title.as_deref()),
            title
        );
    }

    #[rstest]
    fn section_buttons_respect_flags() {
        let content = about();
        let story = content.section_by_slug("my-story").expect("story present");
        let cta = story.call_to_action().expect("visible button");
        assert!(cta.open_in_new_tab);
        let approach = content.section_by_slug("approach").expect("approach present");
        assert!(approach.call_to_action().is_none());
    }
}
