//! Contact form endpoint.
//!
//! ```text
//! POST /api/contact {"name":"Ada","email":"ada@example.com","message":"Hello"}
//! ```

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::ContactSubmission;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Request body. Fields are loosely typed so that a missing, `null`, blank
/// or non-string value is reported as missing rather than as a parse error.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "Ada Lovelace")]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, example = "ada@example.com")]
    pub email: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, example = "Hello!")]
    pub message: Option<Value>,
}

fn text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

/// Provider acknowledgement returned on success.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactReceipt {
    /// Provider message identifier.
    pub id: String,
}

/// Success body: `{"success": true, "data": {"id": ...}}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub data: ContactReceipt,
}

/// Relay a contact form submission to the site owner.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Notification sent", body = ContactResponse),
        (status = 400, description = "Missing fields or malformed JSON", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Delivery failed", body = ErrorBody)
    ),
    tags = ["contact"],
    operation_id = "submitContact"
)]
#[post("")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let submission = ContactSubmission::parse(
        text(request.name.as_ref()),
        text(request.email.as_ref()),
        text(request.message.as_ref()),
    )?;
    let receipt = state.contact.relay(&submission).await?;
    Ok(HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(ContactResponse {
            success: true,
            data: ContactReceipt { id: receipt.id },
        }))
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header(no_store_header())
        .json(ErrorBody::new("Method not allowed"))
}

fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(%error, "rejected contact payload");
    let response = HttpResponse::BadRequest()
        .insert_header(no_store_header())
        .json(ErrorBody::new("Invalid JSON body"));
    actix_web::error::InternalError::from_response(error, response).into()
}

/// `/api/contact` scope: POST relays, every other method gets 405.
pub fn contact_scope() -> actix_web::Scope {
    web::scope("/api/contact")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(submit_contact)
        .default_service(web::to(method_not_allowed))
}

#[cfg(test)]
#[path = "contact_tests.rs"]
mod tests;
