//! Shared value types embedded in several documents: slugs, images, media
//! and call-to-action buttons.

use serde::{Deserialize, Deserializer, Serialize};

/// URL-safe document identifier used in path routing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SlugDto")]
pub struct Slug(String);

#[derive(Deserialize)]
struct SlugDto {
    #[serde(default)]
    current: Option<String>,
}

impl From<SlugDto> for Slug {
    fn from(dto: SlugDto) -> Self {
        Self(dto.current.unwrap_or_default())
    }
}

impl Slug {
    /// Wrap a raw slug value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the slug text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the slug can be used to build a link.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dereferenced image asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ImageAsset {
    /// CDN URL; absent when the projection did not dereference the asset.
    #[serde(default)]
    pub url: Option<String>,
}

/// Image field with optional alt text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ImageRef {
    /// Referenced asset.
    #[serde(default)]
    pub asset: Option<ImageAsset>,
    /// Alternative text supplied by the editor.
    #[serde(default)]
    pub alt: Option<String>,
}

impl ImageRef {
    /// Build an image reference from a resolved URL.
    pub fn from_url(url: impl Into<String>, alt: Option<&str>) -> Self {
        Self {
            asset: Some(ImageAsset {
                url: Some(url.into()),
            }),
            alt: alt.map(str::to_owned),
        }
    }

    /// Resolved asset URL, when present and non-blank.
    pub fn url(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .and_then(|asset| asset.url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }

    /// Alt text, falling back to `fallback` when the editor left it blank.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or(fallback)
    }
}

/// Hero background: either a looping video or a still image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundMedia {
    /// Video played muted in a loop.
    Video {
        /// Video source URL.
        url: String,
    },
    /// Still image.
    Image(ImageRef),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackgroundMediaDto {
    #[serde(default)]
    media_type: Option<String>,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    image: Option<ImageRef>,
}

impl BackgroundMediaDto {
    fn into_domain(self) -> Option<BackgroundMedia> {
        match self.media_type.as_deref() {
            Some("video") => self
                .video_url
                .filter(|url| !url.trim().is_empty())
                .map(|url| BackgroundMedia::Video { url }),
            Some("image") => self
                .image
                .filter(|image| image.url().is_some())
                .map(BackgroundMedia::Image),
            _ => None,
        }
    }
}

/// Decode a background media object, treating unknown or incomplete
/// variants as absent.
pub(crate) fn background_media<'de, D>(deserializer: D) -> Result<Option<BackgroundMedia>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BackgroundMediaDto>::deserialize(deserializer)?
        .and_then(BackgroundMediaDto::into_domain))
}

/// Button rendered as a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    /// Button label.
    pub text: String,
    /// Link target.
    pub url: String,
    /// Editor asked for the link to open in a new tab.
    pub open_in_new_tab: bool,
}

impl CallToAction {
    /// Build a CTA when both label and URL are present and non-blank.
    pub fn from_parts(text: Option<&str>, url: Option<&str>, open_in_new_tab: bool) -> Option<Self> {
        let text = text.map(str::trim).filter(|value| !value.is_empty())?;
        let url = url.map(str::trim).filter(|value| !value.is_empty())?;
        Some(Self {
            text: text.to_owned(),
            url: url.to_owned(),
            open_in_new_tab,
        })
    }
}
