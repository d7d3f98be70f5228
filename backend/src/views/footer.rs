//! Site footer.

use maud::{Markup, html};

use super::{link, placeholder};
use crate::domain::content::{FooterContent, StaticPage, capitalize, sort_footer_pages};

/// Render the footer: text, social links, footer pages, extra links and
/// copyright. Footer pages are shown in footer order and do not depend on
/// the footer document being present.
pub fn site_footer(footer: Option<&FooterContent>, pages: &[StaticPage]) -> Markup {
    if footer.is_none() && pages.is_empty() {
        return html! { footer.site-footer { (placeholder("Footer")) } };
    }
    let mut pages = pages.to_vec();
    sort_footer_pages(&mut pages);

    html! {
        footer.site-footer {
            @if let Some(text) = footer.and_then(|footer| footer.footer_text.as_ref()) {
                p.footer-text { (text) }
            }
            @if let Some(footer) = footer.filter(|footer| !footer.social_links.is_empty()) {
                ul.social-links {
                    @for social in &footer.social_links {
                        @if let (Some(platform), Some(url)) = (&social.platform, &social.url) {
                            li { (link(url, true, Some("social-link"), html! { (capitalize(platform)) })) }
                        }
                    }
                }
            }
            nav.footer-links {
                @for page in &pages {
                    @if let (Some(title), Some(path)) = (&page.title, page.path()) {
                        a.footer-link href=(path) { (title) }
                    }
                }
                @if let Some(footer) = footer {
                    @for extra in &footer.additional_links {
                        @if let (Some(label), Some(url)) = (&extra.label, &extra.url) {
                            (link(url, false, Some("footer-link"), html! { (label) }))
                        }
                    }
                }
            }
            @if let Some(copyright) = footer.and_then(|footer| footer.copyright_text.as_ref()) {
                p.copyright { (copyright) }
            }
        }
    }
}
