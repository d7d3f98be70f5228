//! Server-rendered HTML views.
//!
//! Components take optional data and never fail: missing content renders a
//! small placeholder so the rest of the page still works. Page functions in
//! [`pages`] compose components into full documents.

mod about;
mod contact_form;
mod cookie_banner;
mod footer;
mod header;
mod hero;
mod layout;
pub mod pages;
mod resources;
pub mod rich_text;
mod services;
mod testimonials;

use maud::{Markup, html};

use crate::domain::LinkTarget;

pub use about::about_section;
pub use contact_form::contact_form;
pub use cookie_banner::cookie_banner;
pub use footer::site_footer;
pub use header::site_header;
pub use hero::hero;
pub use layout::document;
pub use resources::resources_section;
pub use services::services_section;
pub use testimonials::testimonials_section;

/// Card descriptions longer than this are cut with `...`.
pub const CARD_DESCRIPTION_LIMIT: usize = 150;

/// Cut `text` to `limit` characters, appending `...` when shortened.
///
/// # Examples
/// ```
/// use coaching_site::views::truncate;
///
/// assert_eq!(truncate("short", 150), "short");
/// assert_eq!(truncate("abcdef", 3), "abc...");
/// ```
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut.trim_end())
}

/// Anchor whose target and `rel` follow the link classification.
pub fn link(url: &str, force_external: bool, class: Option<&str>, content: Markup) -> Markup {
    let target = LinkTarget::classify(url, force_external);
    html! {
        a href=(url) class=[class] target=[target.target()] rel=[target.rel()] { (content) }
    }
}

/// Inline `background-image` declaration for an asset URL.
///
/// Characters that would end the quoted CSS `url()` token are
/// percent-encoded.
pub fn background_style(url: &str) -> String {
    let mut encoded = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '\'' => encoded.push_str("%27"),
            '"' => encoded.push_str("%22"),
            '(' => encoded.push_str("%28"),
            ')' => encoded.push_str("%29"),
            '\\' => encoded.push_str("%5C"),
            ch if ch.is_whitespace() => encoded.push_str("%20"),
            ch => encoded.push(ch),
        }
    }
    format!("background-image: url('{encoded}')")
}

/// Placeholder shown in place of a section whose content is unavailable.
pub fn placeholder(section: &str) -> Markup {
    html! {
        div.content-unavailable {
            p { (section) " section - content not available" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/about", false, false)]
    #[case("#contact", false, false)]
    #[case("https://example.com", false, true)]
    #[case("/about", true, true)]
    fn link_attributes_follow_classification(
        #[case] url: &str,
        #[case] forced: bool,
        #[case] external: bool,
    ) {
        let html = link(url, forced, None, html! { "Go" }).into_string();
        assert_eq!(html.contains(r#"target="_blank""#), external);
        assert_eq!(html.contains(r#"rel="noopener noreferrer""#), external);
    }

    #[rstest]
    fn truncation_counts_characters() {
        let text = "é".repeat(200);
        let cut = truncate(&text, CARD_DESCRIPTION_LIMIT);
        assert_eq!(cut.chars().count(), CARD_DESCRIPTION_LIMIT + 3);
        assert!(cut.ends_with("..."));
    }

    #[rstest]
    fn text_at_the_limit_is_unchanged() {
        let text = "a".repeat(CARD_DESCRIPTION_LIMIT);
        assert_eq!(truncate(&text, CARD_DESCRIPTION_LIMIT), text);
    }

    #[rstest]
    #[case("https://cdn/bg.jpg", "background-image: url('https://cdn/bg.jpg')")]
    #[case("https://cdn/o'brien.jpg", "background-image: url('https://cdn/o%27brien.jpg')")]
    #[case("https://cdn/a (1).jpg", "background-image: url('https://cdn/a%20%281%29.jpg')")]
    fn background_urls_cannot_escape_the_css_token(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(background_style(url), expected);
    }

    #[rstest]
    fn placeholder_names_the_section() {
        assert!(placeholder("Hero").into_string().contains("Hero section - content not available"));
    }
}
