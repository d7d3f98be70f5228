//! Full pages, one per route.

use maud::{Markup, html};

use super::{
    about_section, contact_form, document, hero, link, resources_section, rich_text,
    services_section, testimonials_section,
};
use crate::domain::content::{AboutSection, BlogPost, ImageRef, Resource, Service, StaticPage, capitalize};
use crate::domain::{BlogIndexProps, DetailProps, FaqProps, HomeProps, SiteChrome, SiteIdentity};

const CALENDLY_WIDGET_SCRIPT: &str = "https://assets.calendly.com/assets/external/widget.js";

fn image(image: Option<&ImageRef>, fallback_alt: &str, class: &str) -> Markup {
    html! {
        @if let Some(found) = image {
            @if let Some(url) = found.url() {
                img class=(class) src=(url) alt=(found.alt_or(fallback_alt));
            }
        }
    }
}

fn booking(url: &str) -> Markup {
    html! {
        section.booking id="booking" {
            h2 { "Book a Session" }
            div.calendly-inline-widget data-url=(url) style="min-width:320px;height:700px" {}
            script src=(CALENDLY_WIDGET_SCRIPT) async {}
        }
    }
}

fn back_link(href: &str, label: &str) -> Markup {
    html! { a.back-link href=(href) { "← " (label) } }
}

/// Home page: every section in order, then booking and contact.
pub fn home(props: &HomeProps, identity: &SiteIdentity) -> Markup {
    let booking_url = props
        .chrome
        .settings
        .as_ref()
        .and_then(|settings| settings.booking_url());
    let main = html! {
        (hero(props.hero.as_ref()))
        (about_section(props.about.as_ref(), &identity.name))
        (services_section(&props.services))
        (testimonials_section(&props.testimonials, props.testimonials_background.as_deref()))
        (resources_section(&props.resources))
        @if let Some(url) = booking_url {
            (booking(url))
        }
        (contact_form(props.contact_background.as_deref()))
    };
    document(
        &props.metadata(identity),
        &props.chrome,
        &identity.name,
        props.legal_links.privacy_slug.as_deref(),
        main,
    )
}

/// Blog index listing published posts newest first.
pub fn blog_index(props: &BlogIndexProps, identity: &SiteIdentity) -> Markup {
    let main = html! {
        section.blog-index {
            h1 { "Blog" }
            @if props.posts.is_empty() {
                p.empty-state { "No blog posts yet. Check back soon!" }
            } @else {
                div.card-grid {
                    @for post in &props.posts {
                        @if let Some(path) = post.detail_path() {
                            a.card href=(path) {
                                (image(post.featured_image.as_ref(), post.title.as_deref().unwrap_or_default(), "card-image"))
                                @if let Some(title) = &post.title {
                                    h2 { (title) }
                                }
                                @if let Some(date) = post.formatted_date() {
                                    time { (date) }
                                }
                                @if let Some(excerpt) = &post.excerpt {
                                    p { (excerpt) }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    document(&props.metadata(identity), &props.chrome, &identity.name, None, main)
}

pub fn blog_post(props: &DetailProps<BlogPost>, identity: &SiteIdentity) -> Markup {
    let post = &props.document;
    let main = html! {
        article.blog-post {
            (back_link("/blog", "Back to Blog"))
            @if let Some(title) = &post.title {
                h1 { (title) }
            }
            @if let Some(date) = post.formatted_date() {
                time { (date) }
            }
            (image(post.featured_image.as_ref(), post.title.as_deref().unwrap_or_default(), "featured-image"))
            div.rich-text { (rich_text::render(&post.content)) }
        }
    };
    document(&props.metadata(identity), &props.chrome, &identity.name, None, main)
}

/// FAQ page: one accordion per category.
pub fn faq(props: &FaqProps, identity: &SiteIdentity) -> Markup {
    let main = html! {
        section.faq {
            h1 { "Frequently Asked Questions" }
            @if props.categories.is_empty() {
                p.empty-state { "No FAQs available yet." }
            }
            @for category in &props.categories {
                div.faq-category {
                    h2 { (category.name) }
                    @for item in &category.faqs {
                        details.faq-item {
                            summary { (item.question.as_deref().unwrap_or_default()) }
                            div.rich-text { (rich_text::render(&item.answer)) }
                        }
                    }
                }
            }
        }
    };
    document(&props.metadata(identity), &props.chrome, &identity.name, None, main)
}

/// Detail page for one about-carousel section.
pub fn about_detail(props: &DetailProps<AboutSection>, identity: &SiteIdentity) -> Markup {
    let section = &props.document;
    let main = html! {
        article.about-detail {
            (back_link("/#about", "Back to About"))
            @if let Some(title) = &section.title {
                h1 { (title) }
            }
            (image(section.image.as_ref(), section.title.as_deref().unwrap_or_default(), "detail-image"))
            div.rich-text { (rich_text::render(&section.long_description)) }
            @if let Some(cta) = section.call_to_action() {
                (link(&cta.url, cta.open_in_new_tab, Some("button"), html! { (cta.text) }))
            }
        }
    };
    document(&props.metadata(identity), &props.chrome, &identity.name, None, main)
}

pub fn service_detail(props: &DetailProps<Service>, identity: &SiteIdentity) -> Markup {
    let service = &props.document;
    let main = html! {
        article.service-detail {
            (back_link("/#services", "Back to Services"))
            (image(service.icon.as_ref(), "", "service-icon"))
            @if let Some(title) = &service.title {
                h1 { (title) }
            }
            @if let Some(description) = &service.description {
                p.lead { (description) }
            }
            div.rich-text { (rich_text::render(&service.full_content)) }
            @if let Some(cta) = service.call_to_action() {
                (link(&cta.url, cta.open_in_new_tab, Some("button"), html! { (cta.text) }))
            }
        }
    };
    document(&props.metadata(identity), &props.chrome, &identity.name, None, main)
}

pub fn resource_detail(props: &DetailProps<Resource>, identity: &SiteIdentity) -> Markup {
    let resource = &props.document;
    let main = html! {
        article.resource-detail {
            (back_link("/#resources", "Back to Resources"))
            @if let Some(category) = &resource.category {
                span.category { (capitalize(category)) }
            }
            @if let Some(title) = &resource.title {
                h1 { (title) }
            }
            (image(resource.image.as_ref(), resource.title.as_deref().unwrap_or_default(), "detail-image"))
            @if let Some(description) = &resource.description {
                p.lead { (description) }
            }
            div.rich-text { (rich_text::render(&resource.full_content)) }
            @if let Some(url) = resource.external_url() {
                (link(url, false, Some("button"), html! { "Visit resource" }))
            }
        }
    };
    document(&props.metadata(identity), &props.chrome, &identity.name, None, main)
}

/// Editor-managed page such as the privacy policy.
pub fn static_page(props: &DetailProps<StaticPage>, identity: &SiteIdentity) -> Markup {
    let page = &props.document;
    let main = html! {
        article.static-page {
            @if let Some(title) = &page.title {
                h1 { (title) }
            }
            div.rich-text { (rich_text::render(&page.content)) }
        }
    };
    document(&props.metadata(identity), &props.chrome, &identity.name, None, main)
}

/// 404 page; `what` names the missing kind of document, e.g. `Blog Post`.
pub fn not_found(chrome: &SiteChrome, identity: &SiteIdentity, what: &str) -> Markup {
    let main = html! {
        section.not-found {
            h1 { (what) " Not Found" }
            p { "Sorry, we couldn't find what you were looking for." }
            a.button href="/" { "Return Home" }
        }
    };
    document(&identity.not_found_metadata(what), chrome, &identity.name, None, main)
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
