//! Integration tests driving the full application with deterministic ports.
//!
//! The content store and mail provider are replaced with hand-written
//! doubles so routing, middleware, page assembly and the contact relay run
//! exactly as in production without network access.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{test, web};
use async_trait::async_trait;
use coaching_site::domain::ports::{
    ContentQuery, ContentSource, ContentSourceError, DeliveryReceipt, MailSender,
    MailSenderError, OutgoingEmail,
};
use coaching_site::domain::{ContactRelayService, SiteIdentity};
use coaching_site::inbound::http::health::HealthState;
use coaching_site::inbound::http::state::{HttpState, HttpStatePorts};
use coaching_site::middleware::trace::TRACE_ID_HEADER;
use coaching_site::server::{AppDependencies, build_app};
use mockable::MockEnv;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

/// Content store answering from a fixed table keyed by query name.
#[derive(Default)]
struct CannedContentSource {
    answers: HashMap<&'static str, Value>,
    failing: Option<&'static str>,
    seen: Mutex<Vec<(&'static str, Vec<(&'static str, String)>)>>,
}

impl CannedContentSource {
    fn seen_params(&self, name: &str) -> Vec<(&'static str, String)> {
        self.seen
            .lock()
            .expect("seen lock")
            .iter()
            .find(|(seen, _)| *seen == name)
            .map(|(_, params)| params.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContentSource for CannedContentSource {
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, ContentSourceError> {
        self.seen
            .lock()
            .expect("seen lock")
            .push((query.name, query.params.clone()));
        if self.failing == Some(query.name) {
            return Err(ContentSourceError::transport("connection reset"));
        }
        Ok(self.answers.get(query.name).cloned().unwrap_or(Value::Null))
    }
}

/// Mail provider recording every message it accepts.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<(String, OutgoingEmail)>>,
    reject: bool,
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send(
        &self,
        api_key: &str,
        email: &OutgoingEmail,
    ) -> Result<DeliveryReceipt, MailSenderError> {
        if self.reject {
            return Err(MailSenderError::rejected("status 422: invalid recipient"));
        }
        self.sent
            .lock()
            .expect("sent lock")
            .push((api_key.to_owned(), email.clone()));
        Ok(DeliveryReceipt {
            id: "msg_integration".to_owned(),
        })
    }
}

fn env(vars: &[(&'static str, &'static str)]) -> MockEnv {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn site_content() -> HashMap<&'static str, Value> {
    HashMap::from([
        (
            "hero",
            json!({ "headline": "Helping little minds grow", "ctaText": "Book a call", "ctaUrl": "#contact" }),
        ),
        (
            "navigation",
            json!({
                "menuItems": [
                    { "label": "About", "url": "#about", "isActive": true },
                    { "label": "Retired", "url": "/old", "isActive": false }
                ],
                "showBlogLink": false,
                "showFaqLink": true
            }),
        ),
        (
            "settings",
            json!({ "pageVisibility": { "showBlogPage": true, "showFaqPage": false } }),
        ),
        (
            "services",
            json!([{ "_id": "s1", "title": "Parent coaching", "slug": { "current": "parent-coaching" } }]),
        ),
        (
            "service_by_slug",
            json!({ "_id": "s1", "title": "Parent coaching", "slug": { "current": "parent-coaching" } }),
        ),
    ])
}

struct Harness {
    content: Arc<CannedContentSource>,
    mailer: Arc<RecordingMailer>,
    state: web::Data<HttpState>,
}

fn harness(content: CannedContentSource, mailer: RecordingMailer, env: MockEnv) -> Harness {
    let content = Arc::new(content);
    let mailer = Arc::new(mailer);
    let source: Arc<dyn ContentSource> = content.clone();
    let mail: Arc<dyn MailSender> = mailer.clone();
    let state = web::Data::new(HttpState::new(
        HttpStatePorts {
            content: source,
            contact: Arc::new(ContactRelayService::new(mail, env)),
        },
        SiteIdentity {
            name: "Lydia Lockhart".to_owned(),
            description: "Child life coaching".to_owned(),
        },
    ));
    Harness {
        content,
        mailer,
        state,
    }
}

fn deps(state: &web::Data<HttpState>) -> AppDependencies {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    AppDependencies {
        health_state,
        http_state: state.clone(),
    }
}

async fn body_text(response: actix_web::dev::ServiceResponse) -> String {
    String::from_utf8(test::read_body(response).await.to_vec()).expect("utf8 body")
}

#[rstest]
#[actix_web::test]
async fn home_page_renders_store_content(site_content: HashMap<&'static str, Value>) {
    let h = harness(
        CannedContentSource {
            answers: site_content,
            ..CannedContentSource::default()
        },
        RecordingMailer::default(),
        env(&[]),
    );
    let app = test::init_service(build_app(deps(&h.state))).await;
    let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    let body = body_text(response).await;
    assert!(body.contains("<h1>Helping little minds grow</h1>"));
    assert!(body.contains(r#"href="/services/parent-coaching""#));
    assert!(body.contains(r#"href="/blog""#), "blog link follows settings");
    assert!(!body.contains(r#"href="/faq""#), "faq link follows settings");
    assert!(!body.contains("Retired"));
}

#[rstest]
#[actix_web::test]
async fn store_outage_renders_defaults(site_content: HashMap<&'static str, Value>) {
    let h = harness(
        CannedContentSource {
            answers: site_content,
            failing: Some("services"),
            ..CannedContentSource::default()
        },
        RecordingMailer::default(),
        env(&[]),
    );
    let app = test::init_service(build_app(deps(&h.state))).await;
    let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(!body.contains("Helping little minds grow"), "partial results are discarded");
    assert!(body.contains("Hero section - content not available"));
}

#[rstest]
#[actix_web::test]
async fn detail_route_binds_slug_parameter(site_content: HashMap<&'static str, Value>) {
    let h = harness(
        CannedContentSource {
            answers: site_content,
            ..CannedContentSource::default()
        },
        RecordingMailer::default(),
        env(&[]),
    );
    let app = test::init_service(build_app(deps(&h.state))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/services/parent-coaching").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        h.content.seen_params("service_by_slug"),
        vec![("slug", "parent-coaching".to_owned())]
    );
}

#[rstest]
#[actix_web::test]
async fn unknown_page_is_404_with_chrome(site_content: HashMap<&'static str, Value>) {
    let h = harness(
        CannedContentSource {
            answers: site_content,
            ..CannedContentSource::default()
        },
        RecordingMailer::default(),
        env(&[]),
    );
    let app = test::init_service(build_app(deps(&h.state))).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/no-such-page").to_request()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert!(body.contains("Page Not Found"));
    assert!(body.contains(r##"href="#about""##));
}

#[rstest]
#[actix_web::test]
async fn nested_unknown_path_is_404_with_chrome(site_content: HashMap<&'static str, Value>) {
    let h = harness(
        CannedContentSource {
            answers: site_content,
            ..CannedContentSource::default()
        },
        RecordingMailer::default(),
        env(&[]),
    );
    let app = test::init_service(build_app(deps(&h.state))).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/blog/2024/old-post").to_request()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert!(body.contains("Page Not Found"));
    assert!(body.contains(r##"href="#about""##));
}

#[rstest]
#[actix_web::test]
async fn contact_submission_is_delivered() {
    let h = harness(
        CannedContentSource::default(),
        RecordingMailer::default(),
        env(&[("RESEND_API_KEY", "re_live"), ("CONTACT_EMAIL", "owner@example.com")]),
    );
    let app = test::init_service(build_app(deps(&h.state))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Ada", "email": "ada@example.com", "message": "Line one\nLine two" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({ "success": true, "data": { "id": "msg_integration" } }));

    let sent = h.mailer.sent.lock().expect("sent lock");
    let (api_key, email) = sent.first().expect("one message sent");
    assert_eq!(api_key, "re_live");
    assert_eq!(email.to, vec!["owner@example.com".to_owned()]);
    assert_eq!(email.reply_to, "ada@example.com");
    assert_eq!(email.subject, "New Contact Form Submission from Ada");
    assert!(email.html.contains("Line one<br>Line two"));
}

#[rstest]
#[case::missing_key(RecordingMailer::default(), &[])]
#[case::provider_rejects(RecordingMailer { reject: true, ..RecordingMailer::default() }, &[("RESEND_API_KEY", "re_live")])]
#[actix_web::test]
async fn delivery_failures_return_generic_500(
    #[case] mailer: RecordingMailer,
    #[case] vars: &'static [(&'static str, &'static str)],
) {
    let h = harness(CannedContentSource::default(), mailer, env(vars));
    let app = test::init_service(build_app(deps(&h.state))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Ada", "email": "ada@example.com", "message": "Hi" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "Failed to send email" }));
}

#[rstest]
#[actix_web::test]
async fn contact_rejects_other_methods() {
    let h = harness(CannedContentSource::default(), RecordingMailer::default(), env(&[]));
    let app = test::init_service(build_app(deps(&h.state))).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/api/contact").to_request()).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "Method not allowed" }));
    assert!(h.mailer.sent.lock().expect("sent lock").is_empty());
}

#[rstest]
#[actix_web::test]
async fn probes_are_not_shadowed_by_pages() {
    let h = harness(CannedContentSource::default(), RecordingMailer::default(), env(&[]));
    let app = test::init_service(build_app(deps(&h.state))).await;
    for uri in ["/health/ready", "/health/live"] {
        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
    assert!(h.content.seen.lock().expect("seen lock").is_empty());
}
