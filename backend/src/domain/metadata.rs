//! Document head metadata derived from page content.

use crate::domain::content::SiteSettings;

/// Configured name and description of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub name: String,
    pub description: String,
}

/// Open Graph object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgType {
    Website,
    Article,
}

impl OgType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// `<title>`, description and Open Graph fields of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub og_type: OgType,
    pub images: Vec<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

impl SiteIdentity {
    /// Site-wide defaults: settings SEO fields override configuration.
    ///
    /// # Examples
    /// ```
    /// use coaching_site::domain::SiteIdentity;
    ///
    /// let identity = SiteIdentity {
    ///     name: "Lydia Lockhart".to_owned(),
    ///     description: "Coaching".to_owned(),
    /// };
    /// assert_eq!(identity.site_metadata(None).title, "Lydia Lockhart");
    /// ```
    pub fn site_metadata(&self, settings: Option<&SiteSettings>) -> PageMetadata {
        let seo = settings.and_then(|settings| settings.seo_settings.as_ref());
        PageMetadata {
            title: non_blank(seo.and_then(|seo| seo.meta_title.as_deref()))
                .unwrap_or(&self.name)
                .to_owned(),
            description: non_blank(seo.and_then(|seo| seo.meta_description.as_deref()))
                .unwrap_or(&self.description)
                .to_owned(),
            og_type: OgType::Website,
            images: seo
                .and_then(|seo| seo.og_image.as_ref())
                .and_then(|image| image.url())
                .map(|url| vec![url.to_owned()])
                .unwrap_or_default(),
        }
    }

    /// Metadata for a titled section page, e.g. `Blog | Lydia Lockhart`.
    pub fn section_metadata(
        &self,
        settings: Option<&SiteSettings>,
        title: &str,
        description: &str,
    ) -> PageMetadata {
        let site = self.site_metadata(settings);
        PageMetadata {
            title: format!("{title} | {}", self.name),
            description: description.to_owned(),
            ..site
        }
    }

    /// Metadata for a single document page.
    ///
    /// The description falls back to the document title, then the site
    /// description. Images fall back to the site Open Graph image.
    pub fn document_metadata(
        &self,
        settings: Option<&SiteSettings>,
        title: Option<&str>,
        description: Option<&str>,
        image: Option<&str>,
    ) -> PageMetadata {
        let site = self.site_metadata(settings);
        let title = non_blank(title);
        PageMetadata {
            title: title.map_or_else(|| site.title.clone(), |title| format!("{title} | {}", self.name)),
            description: non_blank(description)
                .or(title)
                .map_or(site.description, str::to_owned),
            og_type: OgType::Article,
            images: non_blank(image).map_or(site.images, |url| vec![url.to_owned()]),
        }
    }

    /// Metadata for a missing document, e.g. `Page Not Found | Lydia Lockhart`.
    pub fn not_found_metadata(&self, what: &str) -> PageMetadata {
        PageMetadata {
            title: format!("{what} Not Found | {}", self.name),
            description: format!("The requested {} could not be found.", what.to_lowercase()),
            og_type: OgType::Website,
            images: Vec::new(),
        }
    }
}
