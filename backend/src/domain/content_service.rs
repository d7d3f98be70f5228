//! Content access: one getter per content kind.
//!
//! Every getter exists in two layers. The strict `try_*` methods return
//! `Ok(None)` or an empty collection when nothing matches and `Err` when the
//! fetch itself failed. The lenient methods wrap them, log failures, and
//! return the same empty value as "not found" so a page can always render.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::content::{
    AboutContent, AboutSection, BlogPost, Faq, FaqCategory, FooterContent, HeroContent,
    LegalPageLinks, NavigationContent, PageVisibility, Resource, Service, SiteSettings,
    StaticPage, Testimonial, group_faqs, published_newest_first, sort_footer_pages,
};
use crate::domain::ports::{ContentQuery, ContentSource, ContentSourceError};
use crate::domain::queries;

#[derive(Deserialize)]
struct FooterHolder {
    #[serde(default)]
    footer: Option<FooterContent>,
}

#[derive(Deserialize)]
struct ImageUrlHolder {
    #[serde(default)]
    url: Option<String>,
}

/// Typed access to the content store.
pub struct ContentService<S: ?Sized> {
    source: Arc<S>,
}

impl<S: ?Sized> ContentService<S> {
    /// Create a service reading through `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S: ?Sized> Clone for ContentService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

fn or_fallback<T>(content: &'static str, result: Result<T, ContentSourceError>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            warn!(content, %error, "content fetch failed; rendering without it");
            fallback
        }
    }
}

fn or_empty<T: Default>(content: &'static str, result: Result<T, ContentSourceError>) -> T {
    or_fallback(content, result, T::default())
}

impl<S> ContentService<S>
where
    S: ContentSource + ?Sized,
{
    async fn run<T: DeserializeOwned>(&self, query: &ContentQuery) -> Result<T, ContentSourceError> {
        let value = self.source.fetch(query).await?;
        serde_json::from_value(value).map_err(|err| {
            ContentSourceError::decode(format!("{} projection: {err}", query.name))
        })
    }

    async fn first<T: DeserializeOwned>(
        &self,
        query: &ContentQuery,
    ) -> Result<Option<T>, ContentSourceError> {
        self.run::<Option<T>>(query).await
    }

    async fn list<T: DeserializeOwned>(&self, query: &ContentQuery) -> Result<Vec<T>, ContentSourceError> {
        Ok(self.run::<Option<Vec<T>>>(query).await?.unwrap_or_default())
    }

    pub async fn try_hero(&self) -> Result<Option<HeroContent>, ContentSourceError> {
        self.first(&queries::HERO).await
    }

    /// Navigation with deactivated menu items removed. Blog and FAQ flags
    /// are as stored; page assemblers overwrite them from settings.
    pub async fn try_navigation(&self) -> Result<Option<NavigationContent>, ContentSourceError> {
        Ok(self
            .first::<NavigationContent>(&queries::NAVIGATION)
            .await?
            .map(NavigationContent::retain_active))
    }

    /// Footer nested under the settings document, hidden links removed.
    pub async fn try_footer(&self) -> Result<Option<FooterContent>, ContentSourceError> {
        Ok(self
            .first::<FooterHolder>(&queries::FOOTER)
            .await?
            .and_then(|holder| holder.footer)
            .map(FooterContent::retain_visible))
    }

    pub async fn try_page_visibility(&self) -> Result<PageVisibility, ContentSourceError> {
        Ok(self
            .first::<SiteSettings>(&queries::PAGE_VISIBILITY)
            .await?
            .map(|settings| settings.visibility())
            .unwrap_or_default())
    }

    pub async fn try_legal_page_links(&self) -> Result<LegalPageLinks, ContentSourceError> {
        let pages = self.list::<StaticPage>(&queries::LEGAL_PAGE_LINKS).await?;
        Ok(LegalPageLinks::from_titles(pages.iter().map(|page| {
            (
                page.title.as_deref().unwrap_or_default(),
                page.slug.as_ref().map(|slug| slug.as_str()),
            )
        })))
    }

    async fn background_image(&self, query: &ContentQuery) -> Result<Option<String>, ContentSourceError> {
        Ok(self
            .first::<ImageUrlHolder>(query)
            .await?
            .and_then(|holder| holder.url)
            .filter(|url| !url.trim().is_empty()))
    }

    pub async fn try_testimonials_background_image(&self) -> Result<Option<String>, ContentSourceError> {
        self.background_image(&queries::TESTIMONIALS_BACKGROUND).await
    }

    pub async fn try_contact_background_image(&self) -> Result<Option<String>, ContentSourceError> {
        self.background_image(&queries::CONTACT_BACKGROUND).await
    }

    /// Published posts, newest first.
    pub async fn try_blog_posts(&self) -> Result<Vec<BlogPost>, ContentSourceError> {
        Ok(published_newest_first(self.list(&queries::BLOG_POSTS).await?))
    }

    pub async fn try_blog_post(&self, slug: &str) -> Result<Option<BlogPost>, ContentSourceError> {
        Ok(self
            .first::<BlogPost>(&queries::blog_post(slug))
            .await?
            .filter(|post| post.is_published))
    }

    /// Active questions grouped by category.
    pub async fn try_faqs(&self) -> Result<Vec<FaqCategory>, ContentSourceError> {
        Ok(group_faqs(self.list::<Faq>(&queries::FAQS).await?))
    }

    pub async fn try_services(&self) -> Result<Vec<Service>, ContentSourceError> {
        self.list(&queries::SERVICES).await
    }

    pub async fn try_service_by_slug(&self, slug: &str) -> Result<Option<Service>, ContentSourceError> {
        self.first(&queries::service_by_slug(slug)).await
    }

    pub async fn try_resources(&self) -> Result<Vec<Resource>, ContentSourceError> {
        self.list(&queries::RESOURCES).await
    }

    pub async fn try_resource_by_slug(&self, slug: &str) -> Result<Option<Resource>, ContentSourceError> {
        self.first(&queries::resource_by_slug(slug)).await
    }

    pub async fn try_about(&self) -> Result<Option<AboutContent>, ContentSourceError> {
        self.first(&queries::ABOUT).await
    }

    pub async fn try_about_section(&self, slug: &str) -> Result<Option<AboutSection>, ContentSourceError> {
        self.first(&queries::about_section(slug)).await
    }

    /// Testimonials, newest first.
    pub async fn try_testimonials(&self) -> Result<Vec<Testimonial>, ContentSourceError> {
        self.list(&queries::TESTIMONIALS).await
    }

    pub async fn try_page(&self, slug: &str) -> Result<Option<StaticPage>, ContentSourceError> {
        Ok(self
            .first::<StaticPage>(&queries::page(slug))
            .await?
            .filter(|page| page.is_published))
    }

    /// Published footer pages ordered by footer order, unordered pages last.
    pub async fn try_footer_pages(&self) -> Result<Vec<StaticPage>, ContentSourceError> {
        let mut pages = self.list::<StaticPage>(&queries::FOOTER_PAGES).await?;
        sort_footer_pages(&mut pages);
        Ok(pages)
    }

    pub async fn try_settings(&self) -> Result<Option<SiteSettings>, ContentSourceError> {
        self.first(&queries::SETTINGS).await
    }

    pub async fn hero(&self) -> Option<HeroContent> {
        or_empty("hero", self.try_hero().await)
    }

    pub async fn navigation(&self) -> Option<NavigationContent> {
        or_empty("navigation", self.try_navigation().await)
    }

    pub async fn footer(&self) -> Option<FooterContent> {
        or_empty("footer", self.try_footer().await)
    }

    /// Visibility; hidden when unset or unavailable.
    pub async fn page_visibility(&self) -> PageVisibility {
        or_empty("page_visibility", self.try_page_visibility().await)
    }

    /// Legal page slugs; well-known defaults when the lookup fails.
    pub async fn legal_page_links(&self) -> LegalPageLinks {
        or_fallback(
            "legal_page_links",
            self.try_legal_page_links().await,
            LegalPageLinks::fallback(),
        )
    }

    pub async fn testimonials_background_image(&self) -> Option<String> {
        or_empty(
            "testimonials_background_image",
            self.try_testimonials_background_image().await,
        )
    }

    pub async fn contact_background_image(&self) -> Option<String> {
        or_empty(
            "contact_background_image",
            self.try_contact_background_image().await,
        )
    }

    pub async fn blog_posts(&self) -> Vec<BlogPost> {
        or_empty("blog_posts", self.try_blog_posts().await)
    }

    pub async fn blog_post(&self, slug: &str) -> Option<BlogPost> {
        or_empty("blog_post", self.try_blog_post(slug).await)
    }

    pub async fn faqs(&self) -> Vec<FaqCategory> {
        or_empty("faqs", self.try_faqs().await)
    }

    pub async fn services(&self) -> Vec<Service> {
        or_empty("services", self.try_services().await)
    }

    pub async fn service_by_slug(&self, slug: &str) -> Option<Service> {
        or_empty("service_by_slug", self.try_service_by_slug(slug).await)
    }

    pub async fn resources(&self) -> Vec<Resource> {
        or_empty("resources", self.try_resources().await)
    }

    pub async fn resource_by_slug(&self, slug: &str) -> Option<Resource> {
        or_empty("resource_by_slug", self.try_resource_by_slug(slug).await)
    }

    pub async fn about(&self) -> Option<AboutContent> {
        or_empty("about", self.try_about().await)
    }

    pub async fn about_section(&self, slug: &str) -> Option<AboutSection> {
        or_empty("about_section", self.try_about_section(slug).await)
    }

    pub async fn testimonials(&self) -> Vec<Testimonial> {
        or_empty("testimonials", self.try_testimonials().await)
    }

    pub async fn page(&self, slug: &str) -> Option<StaticPage> {
        or_empty("page", self.try_page(slug).await)
    }

    pub async fn footer_pages(&self) -> Vec<StaticPage> {
        or_empty("footer_pages", self.try_footer_pages().await)
    }

    pub async fn settings(&self) -> Option<SiteSettings> {
        or_empty("settings", self.try_settings().await)
    }
}

#[cfg(test)]
#[path = "content_service_tests.rs"]
mod tests;
