//! Client testimonials collection.

use serde::Deserialize;

use super::media::ImageRef;

/// Text shown when a testimonial has no usable text field.
pub const NO_TESTIMONIAL_TEXT: &str = "No testimonial available";
/// Name shown when the client stayed anonymous.
pub const ANONYMOUS: &str = "Anonymous";

/// Client quote. `text` is the legacy single-field body.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub short_text: Option<String>,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.trim().is_empty())
}

impl Testimonial {
    /// Full body: full text, then legacy text, then short text.
    pub fn display_text(&self) -> &str {
        non_blank(self.full_text.as_ref())
            .or_else(|| non_blank(self.text.as_ref()))
            .or_else(|| non_blank(self.short_text.as_ref()))
            .unwrap_or(NO_TESTIMONIAL_TEXT)
    }

    /// Carousel body: short text, then the full body.
    pub fn preview_text(&self) -> &str {
        non_blank(self.short_text.as_ref()).unwrap_or_else(|| self.display_text())
    }

    pub fn display_name(&self) -> &str {
        non_blank(self.name.as_ref()).unwrap_or(ANONYMOUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn testimonial(short: Option<&str>, full: Option<&str>, legacy: Option<&str>) -> Testimonial {
        Testimonial {
            short_text: short.map(str::to_owned),
            full_text: full.map(str::to_owned),
            text: legacy.map(str::to_owned),
            ..Testimonial::default()
        }
    }

    #[rstest]
    #[case(testimonial(Some("s"), Some("f"), Some("t")), "f")]
    #[case(testimonial(Some("s"), None, Some("t")), "t")]
    #[case(testimonial(Some("s"), Some(""), None), "s")]
    #[case(testimonial(None, None, None), NO_TESTIMONIAL_TEXT)]
    fn display_text_fallback_order(#[case] item: Testimonial, #[case] expected: &str) {
        assert_eq!(item.display_text(), expected);
    }

    #[rstest]
    fn preview_prefers_short_text() {
        assert_eq!(testimonial(Some("s"), Some("f"), None).preview_text(), "s");
        assert_eq!(testimonial(None, Some("f"), None).preview_text(), "f");
    }

    #[rstest]
    fn missing_name_is_anonymous() {
        assert_eq!(Testimonial::default().display_name(), ANONYMOUS);
    }
}
