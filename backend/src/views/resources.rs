use maud::{Markup, html};

use super::{CARD_DESCRIPTION_LIMIT, link, placeholder, truncate};
use crate::domain::content::{Resource, capitalize};

/// Resource cards. A resource with an external URL links out; otherwise it
/// links to its detail page.
pub fn resources_section(resources: &[Resource]) -> Markup {
    if resources.is_empty() {
        return placeholder("Resources");
    }
    html! {
        section.resources id="resources" {
            h2 { "Resources" }
            div.card-grid {
                @for resource in resources {
                    article.card {
                        @if let Some(url) = resource.image.as_ref().and_then(|image| image.url()) {
                            img src=(url) alt=(resource.image.as_ref().map_or("", |image| image.alt_or(""))) loading="lazy";
                        }
                        @if let Some(category) = &resource.category {
                            span.category { (capitalize(category)) }
                        }
                        @if let Some(title) = &resource.title {
                            h3 { (title) }
                        }
                        @if let Some(description) = &resource.description {
                            p { (truncate(description, CARD_DESCRIPTION_LIMIT)) }
                        }
                        @if let Some(url) = resource.external_url() {
                            (link(url, false, Some("resource-link"), html! { "Visit resource" }))
                        } @else if let Some(path) = resource.detail_path() {
                            a.resource-link href=(path) { "Learn more" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn external_url_takes_precedence() {
        let resources: Vec<Resource> = serde_json::from_value(json!([
            { "title": "Book", "slug": { "current": "book" }, "url": "https://books.example.com" },
            { "title": "Guide", "slug": { "current": "guide" }, "url": "" }
        ]))
        .expect("resources decode");
        let html = resources_section(&resources).into_string();
        assert!(html.contains(r#"href="https://books.example.com" class="resource-link" target="_blank""#));
        assert!(html.contains(r#"href="/resources/guide""#));
        assert!(!html.contains("/resources/book"));
    }

    #[rstest]
    fn empty_list_renders_placeholder() {
        assert!(resources_section(&[])
            .into_string()
            .contains("Resources section - content not available"));
    }
}
