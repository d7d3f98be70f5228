//! Rendering tests for full pages.

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::content::{Faq, FaqCategory, LegalPageLinks, SiteSettings};

#[fixture]
fn identity() -> SiteIdentity {
    SiteIdentity {
        name: "Lydia Lockhart".to_owned(),
        description: "Child life coaching".to_owned(),
    }
}

fn post(value: serde_json::Value) -> BlogPost {
    serde_json::from_value(value).expect("post decodes")
}

#[rstest]
fn fallback_home_renders_every_placeholder(identity: SiteIdentity) {
    let html = home(&HomeProps::fallback(), &identity).into_string();
    for section in ["Hero", "About", "Services", "Testimonials", "Resources", "Navigation", "Footer"] {
        assert!(
            html.contains(&format!("{section} section - content not available")),
            "{section} placeholder missing"
        );
    }
    assert!(html.contains("<title>Lydia Lockhart</title>"));
    assert!(html.contains(r#"id="contact-form""#));
    assert!(!html.contains("calendly-inline-widget"));
}

#[rstest]
fn home_embeds_booking_and_uses_privacy_slug(identity: SiteIdentity) {
    let settings: SiteSettings = serde_json::from_value(json!({
        "calendlyUrl": "https://calendly.com/lydia"
    }))
    .expect("settings decode");
    let props = HomeProps {
        chrome: SiteChrome {
            settings: Some(settings),
            ..SiteChrome::default()
        },
        legal_links: LegalPageLinks {
            terms_slug: Some("terms".to_owned()),
            privacy_slug: Some("privacy".to_owned()),
        },
        ..HomeProps::default()
    };
    let html = home(&props, &identity).into_string();
    assert!(html.contains(r#"data-url="https://calendly.com/lydia""#));
    assert!(html.contains(r#"href="/privacy""#));
}

#[rstest]
fn empty_blog_shows_empty_state(identity: SiteIdentity) {
    let html = blog_index(&BlogIndexProps::fallback(), &identity).into_string();
    assert!(html.contains("No blog posts yet"));
    assert!(html.contains("<title>Blog | Lydia Lockhart</title>"));
}

#[rstest]
fn blog_index_links_posts(identity: SiteIdentity) {
    let props = BlogIndexProps {
        chrome: SiteChrome::fallback(),
        posts: vec![post(json!({
            "title": "Big feelings",
            "slug": { "current": "big-feelings" },
            "publishedAt": "2024-03-01T09:00:00Z",
            "isPublished": true
        }))],
    };
    let html = blog_index(&props, &identity).into_string();
    assert!(html.contains(r#"href="/blog/big-feelings""#));
    assert!(html.contains("March 1, 2024"));
}

#[rstest]
fn blog_post_renders_body_and_article_metadata(identity: SiteIdentity) {
    let props = DetailProps {
        chrome: SiteChrome::fallback(),
        document: post(json!({
            "title": "Big feelings",
            "excerpt": "Helping children name emotions",
            "content": [{ "_type": "block", "children": [{ "text": "Body text" }] }]
        })),
    };
    let html = blog_post(&props, &identity).into_string();
    assert!(html.contains("<title>Big feelings | Lydia Lockhart</title>"));
    assert!(html.contains(r#"content="article""#));
    assert!(html.contains("<p>Body text</p>"));
}

#[rstest]
fn faq_renders_categories_as_accordions(identity: SiteIdentity) {
    let props = FaqProps {
        chrome: SiteChrome::fallback(),
        categories: vec![FaqCategory {
            name: "Services".to_owned(),
            faqs: vec![Faq {
                question: Some("How long is a session?".to_owned()),
                is_active: true,
                ..Faq::default()
            }],
        }],
    };
    let html = faq(&props, &identity).into_string();
    assert!(html.contains("<h2>Services</h2>"));
    assert!(html.contains("<summary>How long is a session?</summary>"));
}

#[rstest]
fn not_found_keeps_chrome(identity: SiteIdentity) {
    let chrome = SiteChrome {
        navigation: Some(
            serde_json::from_value(json!({ "menuItems": [{ "label": "About", "url": "#about" }] }))
                .expect("navigation decodes"),
        ),
        ..SiteChrome::fallback()
    };
    let html = not_found(&chrome, &identity, "Service").into_string();
    assert!(html.contains("<title>Service Not Found | Lydia Lockhart</title>"));
    assert!(html.contains(r##"href="#about""##));
}

#[rstest]
fn static_page_renders_title_and_content(identity: SiteIdentity) {
    let page: StaticPage = serde_json::from_value(json!({
        "title": "Privacy Policy",
        "slug": { "current": "privacy-policy" },
        "content": [{ "_type": "block", "style": "h2", "children": [{ "text": "Data we hold" }] }]
    }))
    .expect("page decodes");
    let props = DetailProps {
        chrome: SiteChrome::fallback(),
        document: page,
    };
    let html = static_page(&props, &identity).into_string();
    assert!(html.contains("<h1>Privacy Policy</h1>"));
    assert!(html.contains("<h2>Data we hold</h2>"));
}
