//! Site-wide settings singleton and values derived from it.

use serde::Deserialize;

use super::footer::FooterContent;
use super::media::ImageRef;

/// Site-wide settings document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Booking page embedded on the home page.
    #[serde(default)]
    pub calendly_url: Option<String>,
    #[serde(default)]
    pub seo_settings: Option<SeoSettings>,
    #[serde(default)]
    pub page_visibility: Option<PageVisibilitySettings>,
    #[serde(default)]
    pub footer: Option<FooterContent>,
}

/// Search engine defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettings {
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub og_image: Option<ImageRef>,
}

/// Raw visibility toggles as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageVisibilitySettings {
    #[serde(default)]
    pub show_blog_page: Option<bool>,
    #[serde(default)]
    pub show_faq_page: Option<bool>,
}

/// Whether the blog and FAQ pages are linked from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageVisibility {
    pub blog: bool,
    pub faq: bool,
}

impl PageVisibility {
    /// Permissive visibility used when a page batch falls back.
    pub const PERMISSIVE: Self = Self {
        blog: true,
        faq: true,
    };

    /// Resolve stored toggles; unset toggles hide the page.
    pub fn from_settings(settings: Option<&PageVisibilitySettings>) -> Self {
        settings.map_or_else(Self::default, |toggles| Self {
            blog: toggles.show_blog_page.unwrap_or(false),
            faq: toggles.show_faq_page.unwrap_or(false),
        })
    }
}

impl SiteSettings {
    /// Visibility derived from this document.
    pub fn visibility(&self) -> PageVisibility {
        PageVisibility::from_settings(self.page_visibility.as_ref())
    }

    /// Booking URL, when configured.
    pub fn booking_url(&self) -> Option<&str> {
        self.calendly_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

/// Slugs of the terms and privacy pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegalPageLinks {
    pub terms_slug: Option<String>,
    pub privacy_slug: Option<String>,
}

impl LegalPageLinks {
    /// Links used when the lookup fails outright.
    pub fn fallback() -> Self {
        Self {
            terms_slug: Some("terms-and-conditions".to_owned()),
            privacy_slug: Some("privacy-policy".to_owned()),
        }
    }

    /// Match candidate pages by title. Later matches win.
    pub fn from_titles<'a, I>(pages: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut links = Self::default();
        for (title, slug) in pages {
            let title = title.to_lowercase();
            if title.contains("terms") || title.contains("conditions") {
                links.terms_slug = slug.map(str::to_owned);
            }
            if title.contains("privacy") {
                links.privacy_slug = slug.map(str::to_owned);
            }
        }
        links
    }
}
