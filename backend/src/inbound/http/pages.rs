//! Server-rendered page handlers.
//!
//! ```text
//! GET /
//! GET /about/{slug}
//! GET /blog
//! GET /blog/{slug}
//! GET /faq
//! GET /services/{slug}
//! GET /resources/{slug}
//! GET /{slug}
//! *   (anything else: 404 page)
//! ```
//!
//! Content failures never surface here: assemblers already fell back to
//! defaults. A slug that matches nothing renders the 404 page with status
//! 404.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use maud::Markup;

use crate::domain::{DetailProps, PageOutcome, SiteIdentity};
use crate::inbound::http::cache_control::page_cache_header;
use crate::inbound::http::state::HttpState;
use crate::views::pages;

fn html_response(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(page_cache_header())
        .content_type(ContentType::html())
        .body(markup.into_string())
}

fn render_outcome<T>(
    outcome: PageOutcome<T>,
    identity: &SiteIdentity,
    what: &str,
    render: fn(&DetailProps<T>, &SiteIdentity) -> Markup,
) -> HttpResponse {
    match outcome {
        PageOutcome::Found(props) => html_response(StatusCode::OK, render(&props, identity)),
        PageOutcome::NotFound(chrome) => html_response(
            StatusCode::NOT_FOUND,
            pages::not_found(&chrome, identity, what),
        ),
    }
}

#[get("/")]
pub async fn home(state: web::Data<HttpState>) -> HttpResponse {
    let props = state.pages.home().await;
    html_response(StatusCode::OK, pages::home(&props, &state.identity))
}

#[get("/about/{slug}")]
pub async fn about_section(state: web::Data<HttpState>, slug: web::Path<String>) -> HttpResponse {
    let outcome = state.pages.about_section(&slug).await;
    render_outcome(outcome, &state.identity, "Section", pages::about_detail)
}

#[get("/blog")]
pub async fn blog_index(state: web::Data<HttpState>) -> HttpResponse {
    let props = state.pages.blog_index().await;
    html_response(StatusCode::OK, pages::blog_index(&props, &state.identity))
}

#[get("/blog/{slug}")]
pub async fn blog_post(state: web::Data<HttpState>, slug: web::Path<String>) -> HttpResponse {
    let outcome = state.pages.blog_post(&slug).await;
    render_outcome(outcome, &state.identity, "Blog Post", pages::blog_post)
}

#[get("/faq")]
pub async fn faq(state: web::Data<HttpState>) -> HttpResponse {
    let props = state.pages.faq().await;
    html_response(StatusCode::OK, pages::faq(&props, &state.identity))
}

#[get("/services/{slug}")]
pub async fn service(state: web::Data<HttpState>, slug: web::Path<String>) -> HttpResponse {
    let outcome = state.pages.service(&slug).await;
    render_outcome(outcome, &state.identity, "Service", pages::service_detail)
}

#[get("/resources/{slug}")]
pub async fn resource(state: web::Data<HttpState>, slug: web::Path<String>) -> HttpResponse {
    let outcome = state.pages.resource(&slug).await;
    render_outcome(outcome, &state.identity, "Resource", pages::resource_detail)
}

/// Editor-managed pages addressed by a single slug segment.
#[get("/{slug}")]
pub async fn static_page(state: web::Data<HttpState>, slug: web::Path<String>) -> HttpResponse {
    let outcome = state.pages.static_page(&slug).await;
    render_outcome(outcome, &state.identity, "Page", pages::static_page)
}

/// Fallback for paths no route matches, such as nested unknown paths.
/// Renders the 404 page inside the usual chrome.
pub async fn unmatched(state: web::Data<HttpState>) -> HttpResponse {
    let chrome = state.pages.chrome().await;
    html_response(
        StatusCode::NOT_FOUND,
        pages::not_found(&chrome, &state.identity, "Page"),
    )
}

/// Register every page route. The single-segment catch-all comes last so
/// fixed paths win; call this after all other services are registered.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(blog_index)
        .service(faq)
        .service(about_section)
        .service(blog_post)
        .service(service)
        .service(resource)
        .service(static_page);
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
