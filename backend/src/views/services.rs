use maud::{Markup, html};

use super::{CARD_DESCRIPTION_LIMIT, link, placeholder, truncate};
use crate::domain::content::Service;

/// Grid of service cards. Each card links to its detail page when it has a
/// slug and shows the service button when one is configured.
pub fn services_section(services: &[Service]) -> Markup {
    if services.is_empty() {
        return placeholder("Services");
    }
    html! {
        section.services id="services" {
            h2 { "Services" }
            div.card-grid {
                @for service in services {
                    article.card {
                        @if let Some(url) = service.icon.as_ref().and_then(|icon| icon.url()) {
                            img.service-icon src=(url) alt="" loading="lazy";
                        }
                        @if let Some(title) = &service.title {
                            h3 {
                                @if let Some(path) = service.detail_path() {
                                    a href=(path) { (title) }
                                } @else {
                                    (title)
                                }
                            }
                        }
                        @if let Some(description) = &service.description {
                            p { (truncate(description, CARD_DESCRIPTION_LIMIT)) }
                        }
                        @if let Some(cta) = service.call_to_action() {
                            (link(&cta.url, cta.open_in_new_tab, Some("button"), html! { (cta.text) }))
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
    fn renders_cards_with_detail_links() {
        let services: Vec<Service> = serde_json::from_value(json!([
            {
                "title": "Parent coaching",
                "slug": { "current": "parent-coaching" },
                "description": "Support for parents.",
                "ctaButton": { "text": "Enquire", "link": "#contact" }
            },
            { "title": "Workshops", "ctaButton": { "text": "No link" } }
        ]))
        .expect("services decode");
        let html = services_section(&services).into_string();
        assert!(html.contains(r#"href="/services/parent-coaching""#));
        assert!(html.contains("Enquire"));
        assert!(html.contains("Workshops"));
        assert!(!html.contains("No link"));
    }

    #[rstest]
    fn empty_list_renders_placeholder() {
        assert!(services_section(&[])
            .into_string()
            .contains("Services section - content not available"));
    }
}
