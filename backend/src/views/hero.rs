use maud::{Markup, html};

use super::{link, placeholder};
use crate::domain::content::{BackgroundMedia, HeroContent};

/// Hero banner with optional video or image background.
pub fn hero(content: Option<&HeroContent>) -> Markup {
    let Some(content) = content else {
        return placeholder("Hero");
    };
    html! {
        section.hero id="home" {
            @match &content.background_media {
                Some(BackgroundMedia::Video { url }) => {
                    video.hero-background autoplay muted loop playsinline {
                        source src=(url) type="video/mp4";
                    }
                }
                Some(BackgroundMedia::Image(image)) => {
                    @if let Some(url) = image.url() {
                        img.hero-background src=(url) alt=(image.alt_or("Hero background"));
                    }
                }
                None => {}
            }
            div.hero-content {
                @if let Some(headline) = &content.headline {
                    h1 { (headline) }
                }
                @if let Some(subheadline) = &content.subheadline {
                    p.subheadline { (subheadline) }
                }
                @if let Some(cta) = content.call_to_action() {
                    (link(&cta.url, cta.open_in_new_tab, Some("button hero-cta"), html! { (cta.text) }))
                }
            }
        }
    }
}
