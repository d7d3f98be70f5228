use maud::{Markup, html};

use super::{CARD_DESCRIPTION_LIMIT, placeholder, truncate};
use crate::domain::content::{AboutContent, AboutSection};

/// About section: highlight, bio, portrait and a card per carousel section.
pub fn about_section(content: Option<&AboutContent>, site_name: &str) -> Markup {
    let Some(content) = content else {
        return placeholder("About");
    };
    html! {
        section.about id="about" {
            div.about-intro {
                @if let Some(url) = content.image.as_ref().and_then(|image| image.url()) {
                    img.about-portrait src=(url) alt=(content.image.as_ref().map_or(site_name, |image| image.alt_or(site_name)));
                }
                div {
                    @if let Some(highlight) = &content.highlight {
                        h2.about-highlight { (highlight) }
                    }
                    @if let Some(bio) = &content.bio {
                        p.about-bio { (bio) }
                    }
                }
            }
            @if !content.carousel_sections.is_empty() {
                div.about-carousel {
                    @for section in &content.carousel_sections {
                        (section_card(section))
                    }
                }
            }
        }
    }
}

fn section_card(section: &AboutSection) -> Markup {
    let body = html! {
        @if let Some(url) = section.image.as_ref().and_then(|image| image.url()) {
            img src=(url) alt=(section.image.as_ref().map_or("", |image| image.alt_or(""))) loading="lazy";
        }
        @if let Some(title) = &section.title {
            h3 { (title) }
        }
        @if let Some(description) = &section.short_description {
            p { (truncate(description, CARD_DESCRIPTION_LIMIT)) }
        }
    };
    html! {
        @if let Some(path) = section.detail_path() {
            a.card href=(path) { (body) }
        } @else {
            div.card { (body) }
        }
    }
}
