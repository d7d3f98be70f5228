//! Typed content documents decoded from store projections.
//!
//! Any field may be `null` in the store. Scalars decode to `Option`, lists
//! and flags decode `null` as their default, and shaping rules (visibility
//! filters, grouping, ordering) live next to the type they apply to.

mod about;
mod blog;
mod faq;
mod footer;
mod hero;
mod media;
mod navigation;
mod nullable;
mod page;
mod resource;
pub mod rich_text;
mod service;
mod settings;
mod testimonial;

pub use about::{AboutContent, AboutSection, SectionButton};
pub use blog::BlogPost;
pub(crate) use blog::published_newest_first;
pub use faq::{DEFAULT_CATEGORY, Faq, FaqCategory, capitalize, group_faqs};
pub use footer::{AdditionalLink, FooterContent, SocialLink};
pub use hero::HeroContent;
pub use media::{BackgroundMedia, CallToAction, ImageAsset, ImageRef, Slug};
pub use navigation::{MenuItem, NavigationButton, NavigationContent};
pub use page::{StaticPage, sort_footer_pages};
pub use resource::Resource;
pub use rich_text::{Block, RichText};
pub use service::{Service, ServiceButton};
pub use settings::{LegalPageLinks, PageVisibility, PageVisibilitySettings, SeoSettings, SiteSettings};
pub use testimonial::{ANONYMOUS, NO_TESTIMONIAL_TEXT, Testimonial};
