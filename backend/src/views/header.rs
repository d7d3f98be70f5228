//! Site header with logo, menu and booking button.

use maud::{Markup, html};

use super::{link, placeholder};
use crate::domain::content::NavigationContent;

/// Render the header. Blog and FAQ links follow the navigation flags, which
/// the assembler has already aligned with the page visibility settings.
pub fn site_header(navigation: Option<&NavigationContent>, site_name: &str) -> Markup {
    let Some(navigation) = navigation else {
        return html! { header.site-header { (placeholder("Navigation")) } };
    };
    let logo = navigation.logo.as_ref().and_then(|logo| {
        logo.url()
            .map(|url| (url.to_owned(), logo.alt_or(site_name).to_owned()))
    });
    html! {
        header.site-header {
            a.brand href="/" {
                @if let Some((url, alt)) = &logo {
                    img.logo src=(url) alt=(alt);
                } @else {
                    span.brand-name { (site_name) }
                }
            }
            nav.main-nav {
                ul {
                    @for item in navigation.menu_items.iter().filter(|item| item.is_renderable()) {
                        @if let (Some(label), Some(url)) = (&item.label, &item.url) {
                            li { (link(url, item.open_in_new_tab == Some(true), Some("nav-link"), html! { (label) })) }
                        }
                    }
                    @if navigation.show_blog_link {
                        li { a.nav-link href="/blog" { "Blog" } }
                    }
                    @if navigation.show_faq_link {
                        li { a.nav-link href="/faq" { "FAQ" } }
                    }
                }
            }
            @if let Some(cta) = navigation.call_to_action() {
                (link(&cta.url, cta.open_in_new_tab, Some("button nav-cta"), html! { (cta.text) }))
            }
        }
    }
}
