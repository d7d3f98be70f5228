//! Tests for page assembly and the batch fallback.

use std::collections::HashMap;
use std::sync::Arc;

use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::MockContentSource;

type Answers = HashMap<&'static str, Result<Value, ContentSourceError>>;

fn store(answers: Answers) -> PageAssembler<MockContentSource> {
    let mut source = MockContentSource::new();
    source.expect_fetch().returning(move |query| {
        answers
            .get(query.name)
            .cloned()
            .unwrap_or(Ok(Value::Null))
    });
    PageAssembler::new(Arc::new(source))
}

fn chrome_answers() -> Answers {
    HashMap::from([
        (
            "navigation",
            Ok(json!({
                "menuItems": [{ "label": "About", "url": "#about" }],
                "showBlogLink": false,
                "showFaqLink": false
            })),
        ),
        ("footer", Ok(json!({ "footer": { "footerText": "Hello" } }))),
        (
            "footer_pages",
            Ok(json!([
                { "_id": "late", "title": "Cookies", "slug": { "current": "cookies" }, "footerOrder": 5 },
                { "_id": "early", "title": "Terms", "slug": { "current": "terms" }, "footerOrder": 1 }
            ])),
        ),
        (
            "settings",
            Ok(json!({ "pageVisibility": { "showBlogPage": true, "showFaqPage": false } })),
        ),
    ])
}

fn with(mut answers: Answers, name: &'static str, value: Result<Value, ContentSourceError>) -> Answers {
    answers.insert(name, value);
    answers
}

#[tokio::test]
async fn navigation_flags_follow_settings_visibility() {
    let props = store(chrome_answers()).home().await;
    let navigation = props.chrome.navigation.expect("navigation present");
    assert!(navigation.show_blog_link);
    assert!(!navigation.show_faq_link);
    assert_eq!(
        props.chrome.visibility,
        PageVisibility {
            blog: true,
            faq: false
        }
    );
}

#[tokio::test]
async fn missing_settings_hide_optional_pages() {
    let answers = with(chrome_answers(), "settings", Ok(Value::Null));
    let chrome = store(answers).chrome().await;
    assert_eq!(chrome.visibility, PageVisibility::default());
    let navigation = chrome.navigation.expect("navigation present");
    assert!(!navigation.show_blog_link);
}

#[tokio::test]
async fn chrome_orders_footer_pages() {
    let chrome = store(chrome_answers()).chrome().await;
    let ids: Vec<_> = chrome
        .footer_pages
        .iter()
        .filter_map(|page| page.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["early", "late"]);
}

#[rstest]
#[case("navigation")]
#[case("services")]
#[case("testimonials")]
#[case("contact_background_image")]
#[tokio::test]
async fn any_failed_fetch_yields_the_default_set(#[case] failing: &'static str) {
    let answers = with(
        with(chrome_answers(), "hero", Ok(json!({ "headline": "Hi" }))),
        failing,
        Err(ContentSourceError::timeout("deadline exceeded")),
    );

    let props = store(answers).home().await;

    assert_eq!(props, HomeProps::fallback());
    assert_eq!(props.chrome.visibility, PageVisibility::PERMISSIVE);
    assert!(props.hero.is_none());
    assert!(props.chrome.navigation.is_none());
}

#[tokio::test]
async fn home_collects_every_section() {
    let answers = with(
        with(chrome_answers(), "hero", Ok(json!({ "headline": "Grow" }))),
        "services",
        Ok(json!([{ "_id": "s1", "title": "Coaching" }])),
    );
    let props = store(answers).home().await;
    assert_eq!(
        props.hero.and_then(|hero| hero.headline).as_deref(),
        Some("Grow")
    );
    assert_eq!(props.services.len(), 1);
    assert!(props.testimonials.is_empty());
}

#[tokio::test]
async fn unknown_slug_is_not_found_with_chrome() {
    let outcome = store(chrome_answers()).service("no-such-slug").await;
    match outcome {
        PageOutcome::NotFound(chrome) => {
            assert!(chrome.navigation.is_some());
            assert_eq!(chrome.footer_pages.len(), 2);
        }
        PageOutcome::Found(_) => panic!("expected not found"),
    }
}

#[tokio::test]
async fn failed_detail_batch_is_not_found_with_fallback_chrome() {
    let answers = with(
        chrome_answers(),
        "blog_post",
        Err(ContentSourceError::transport("refused")),
    );
    let outcome = store(answers).blog_post("post").await;
    assert_eq!(outcome, PageOutcome::NotFound(SiteChrome::fallback()));
}

#[tokio::test]
async fn known_slug_is_found() {
    let answers = with(
        chrome_answers(),
        "page",
        Ok(json!({
            "_id": "privacy",
            "title": "Privacy Policy",
            "slug": { "current": "privacy-policy" },
            "isPublished": true
        })),
    );
    let outcome = store(answers).static_page("privacy-policy").await;
    let PageOutcome::Found(props) = outcome else {
        panic!("expected page");
    };
    let identity = SiteIdentity {
        name: "Lydia Lockhart".to_owned(),
        description: "Coaching".to_owned(),
    };
    let metadata = props.metadata(&identity);
    assert_eq!(metadata.title, "Privacy Policy | Lydia Lockhart");
    assert_eq!(metadata.description, "Privacy Policy");
}

#[tokio::test]
async fn faq_page_groups_questions() {
    let answers = with(
        chrome_answers(),
        "faqs",
        Ok(json!([
            { "_id": "1", "category": "sessions", "isActive": true },
            { "_id": "2", "isActive": true }
        ])),
    );
    let props = store(answers).faq().await;
    let names: Vec<_> = props
        .categories
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    assert_eq!(names, vec!["Sessions", "General"]);
}

#[tokio::test]
async fn blog_index_fallback_is_empty() {
    let answers = with(
        chrome_answers(),
        "blog_posts",
        Err(ContentSourceError::rate_limited("slow down")),
    );
    let props = store(answers).blog_index().await;
    assert_eq!(props, BlogIndexProps::fallback());
}
