//! Page assemblers: one per route.
//!
//! Each assembler runs every content fetch its page needs concurrently and
//! treats the batch as all-or-nothing. When any fetch fails the partial
//! results are discarded and the page renders from an explicit default set.

use std::sync::Arc;

use tracing::warn;

use crate::domain::content::{
    AboutContent, AboutSection, BlogPost, FaqCategory, FooterContent, HeroContent,
    LegalPageLinks, NavigationContent, PageVisibility, Resource, Service, SiteSettings,
    StaticPage, Testimonial,
};
use crate::domain::content_service::ContentService;
use crate::domain::metadata::{PageMetadata, SiteIdentity};
use crate::domain::ports::{ContentSource, ContentSourceError};

/// Navigation, footer, footer pages and settings shared by every page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteChrome {
    pub navigation: Option<NavigationContent>,
    pub footer: Option<FooterContent>,
    pub footer_pages: Vec<StaticPage>,
    pub settings: Option<SiteSettings>,
    pub visibility: PageVisibility,
}

impl SiteChrome {
    fn assemble(
        navigation: Option<NavigationContent>,
        footer: Option<FooterContent>,
        footer_pages: Vec<StaticPage>,
        settings: Option<SiteSettings>,
    ) -> Self {
        let visibility = settings
            .as_ref()
            .map(SiteSettings::visibility)
            .unwrap_or_default();
        let navigation = navigation.map(|mut navigation| {
            navigation.apply_visibility(visibility);
            navigation
        });
        Self {
            navigation,
            footer,
            footer_pages,
            settings,
            visibility,
        }
    }

    /// Chrome used when a page batch fails: nothing fetched, every optional
    /// page linked.
    pub fn fallback() -> Self {
        Self {
            visibility: PageVisibility::PERMISSIVE,
            ..Self::default()
        }
    }
}

/// Everything rendered on the home page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeProps {
    pub chrome: SiteChrome,
    pub hero: Option<HeroContent>,
    pub about: Option<AboutContent>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub resources: Vec<Resource>,
    pub legal_links: LegalPageLinks,
    pub testimonials_background: Option<String>,
    pub contact_background: Option<String>,
}

impl HomeProps {
    pub fn fallback() -> Self {
        Self {
            chrome: SiteChrome::fallback(),
            ..Self::default()
        }
    }

    pub fn metadata(&self, identity: &SiteIdentity) -> PageMetadata {
        identity.site_metadata(self.chrome.settings.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlogIndexProps {
    pub chrome: SiteChrome,
    pub posts: Vec<BlogPost>,
}

impl BlogIndexProps {
    pub fn fallback() -> Self {
        Self {
            chrome: SiteChrome::fallback(),
            ..Self::default()
        }
    }

    pub fn metadata(&self, identity: &SiteIdentity) -> PageMetadata {
        identity.section_metadata(
            self.chrome.settings.as_ref(),
            "Blog",
            "Insights and tips for helping little minds grow and thrive.",
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FaqProps {
    pub chrome: SiteChrome,
    pub categories: Vec<FaqCategory>,
}

impl FaqProps {
    pub fn fallback() -> Self {
        Self {
            chrome: SiteChrome::fallback(),
            ..Self::default()
        }
    }

    pub fn metadata(&self, identity: &SiteIdentity) -> PageMetadata {
        identity.section_metadata(
            self.chrome.settings.as_ref(),
            "FAQ",
            "Frequently asked questions about child life coaching, family support, and our services.",
        )
    }
}

/// A slug-keyed page together with the chrome fetched alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailProps<T> {
    pub chrome: SiteChrome,
    pub document: T,
}

impl DetailProps<AboutSection> {
    pub fn metadata(&self, identity: &SiteIdentity) -> PageMetadata {
        identity.document_metadata(
            self.chrome.settings.as_ref(),
            self.document.title.as_deref(),
            self.document.short_description.as_deref(),
            self.document.image.as_ref().and_then(|image| image.url()),
        )
    }
}

impl DetailProps<BlogPost> {
    pub fn metadata(&self, identity: &SiteIdentity) -> PageMetadata {
        identity.document_metadata(
            self.chrome.settings.as_ref(),
            self.document.title.as_deref(),
            self.document.excerpt.as_deref(),
            self.document.featured_image.as_ref().and_then(|image| image.url()),
        )
    }
}

impl DetailProps<Service> {
    pub fn metadata(&self, identity: &SiteIdentity) -> PageMetadata {
        identity.document_metadata(
            self.chrome.settings.as_ref(),
            self.document.title.as_deref(),
            self.document.description.as_deref(),
            self.document.icon.as_ref().and_then(|image| image.url()),
        )
    }
}

impl DetailProps<Resource> {
    pub fn metadata(&self, identity: &SiteIdentity) -> PageMetadata {
        identity.document_metadata(
            self.chrome.settings.as_ref(),
            self.document.title.as_deref(),
            self.document.description.as_deref(),
            self.document.image.as_ref().and_then(|image| image.url()),
        )
    }
}

impl DetailProps<StaticPage> {
    pub fn metadata(&self, identity: &SiteIdentity) -> PageMetadata {
        identity.document_metadata(
            self.chrome.settings.as_ref(),
            self.document.title.as_deref(),
            self.document.meta_description.as_deref(),
            None,
        )
    }
}

/// Result of a slug-keyed page lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome<T> {
    Found(DetailProps<T>),
    /// Nothing matched the slug; the chrome still renders the 404 page.
    NotFound(SiteChrome),
}

impl<T> PageOutcome<T> {
    fn from_parts(chrome: SiteChrome, document: Option<T>) -> Self {
        match document {
            Some(document) => Self::Found(DetailProps { chrome, document }),
            None => Self::NotFound(chrome),
        }
    }

    fn fallback() -> Self {
        Self::NotFound(SiteChrome::fallback())
    }
}

fn or_fallback<T>(page: &'static str, result: Result<T, ContentSourceError>, fallback: fn() -> T) -> T {
    match result {
        Ok(props) => props,
        Err(error) => {
            warn!(page, %error, "page content batch failed; rendering defaults");
            fallback()
        }
    }
}

/// Assembles page props from the content service.
pub struct PageAssembler<S: ?Sized> {
    content: ContentService<S>,
}

impl<S: ?Sized> PageAssembler<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            content: ContentService::new(source),
        }
    }
}

impl<S> PageAssembler<S>
where
    S: ContentSource + ?Sized,
{
    async fn try_chrome(&self) -> Result<SiteChrome, ContentSourceError> {
        let (navigation, footer, footer_pages, settings) = tokio::try_join!(
            self.content.try_navigation(),
            self.content.try_footer(),
            self.content.try_footer_pages(),
            self.content.try_settings(),
        )?;
        Ok(SiteChrome::assemble(navigation, footer, footer_pages, settings))
    }

    async fn try_home(&self) -> Result<HomeProps, ContentSourceError> {
        let (
            chrome,
            hero,
            about,
            services,
            testimonials,
            resources,
            legal_links,
            testimonials_background,
            contact_background,
        ) = tokio::try_join!(
            self.try_chrome(),
            self.content.try_hero(),
            self.content.try_about(),
            self.content.try_services(),
            self.content.try_testimonials(),
            self.content.try_resources(),
            self.content.try_legal_page_links(),
            self.content.try_testimonials_background_image(),
            self.content.try_contact_background_image(),
        )?;
        Ok(HomeProps {
            chrome,
            hero,
            about,
            services,
            testimonials,
            resources,
            legal_links,
            testimonials_background,
            contact_background,
        })
    }

    pub async fn home(&self) -> HomeProps {
        or_fallback("home", self.try_home().await, HomeProps::fallback)
    }

    pub async fn blog_index(&self) -> BlogIndexProps {
        let result = tokio::try_join!(self.try_chrome(), self.content.try_blog_posts())
            .map(|(chrome, posts)| BlogIndexProps { chrome, posts });
        or_fallback("blog_index", result, BlogIndexProps::fallback)
    }

    pub async fn faq(&self) -> FaqProps {
        let result = tokio::try_join!(self.try_chrome(), self.content.try_faqs())
            .map(|(chrome, categories)| FaqProps { chrome, categories });
        or_fallback("faq", result, FaqProps::fallback)
    }

    pub async fn about_section(&self, slug: &str) -> PageOutcome<AboutSection> {
        let result = tokio::try_join!(self.try_chrome(), self.content.try_about_section(slug))
            .map(|(chrome, section)| PageOutcome::from_parts(chrome, section));
        or_fallback("about_section", result, PageOutcome::fallback)
    }

    pub async fn blog_post(&self, slug: &str) -> PageOutcome<BlogPost> {
        let result = tokio::try_join!(self.try_chrome(), self.content.try_blog_post(slug))
            .map(|(chrome, post)| PageOutcome::from_parts(chrome, post));
        or_fallback("blog_post", result, PageOutcome::fallback)
    }

    pub async fn service(&self, slug: &str) -> PageOutcome<Service> {
        let result = tokio::try_join!(self.try_chrome(), self.content.try_service_by_slug(slug))
            .map(|(chrome, service)| PageOutcome::from_parts(chrome, service));
        or_fallback("service", result, PageOutcome::fallback)
    }

    pub async fn resource(&self, slug: &str) -> PageOutcome<Resource> {
        let result = tokio::try_join!(self.try_chrome(), self.content.try_resource_by_slug(slug))
            .map(|(chrome, resource)| PageOutcome::from_parts(chrome, resource));
        or_fallback("resource", result, PageOutcome::fallback)
    }

    pub async fn static_page(&self, slug: &str) -> PageOutcome<StaticPage> {
        let result = tokio::try_join!(self.try_chrome(), self.content.try_page(slug))
            .map(|(chrome, page)| PageOutcome::from_parts(chrome, page));
        or_fallback("static_page", result, PageOutcome::fallback)
    }

    /// Chrome alone, for pages with no content of their own.
    pub async fn chrome(&self) -> SiteChrome {
        or_fallback("chrome", self.try_chrome().await, SiteChrome::fallback)
    }
}

#[cfg(test)]
#[path = "page_assembly_tests.rs"]
mod tests;
