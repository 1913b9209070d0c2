use std::sync::Arc;

use anyhow::{anyhow, Context};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use folio_models::contact::{FieldErrors, RawContactSubmission};
use tracing::warn;

use crate::{
    errors::{error, internal_server_error},
    models::contact::{ApiContactSubmission, ApiContactSuccess, ApiInvalidFields},
};

pub const CONTACT_PATH: &str = "/api/contact";
pub const NETLIFY_CONTACT_PATH: &str = "/.netlify/functions/contact";

/// Largest accepted request body. Well above what the field length limits
/// allow.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

pub fn router<Contact: ContactFeatureService>(
    service: Arc<Contact>,
    success_message: Arc<str>,
) -> Router<()> {
    let state = ContactState {
        service,
        success_message,
    };
    let endpoint = routing::post(submit::<Contact>).fallback(method_not_allowed);

    Router::new()
        .route(CONTACT_PATH, endpoint.clone())
        .route(NETLIFY_CONTACT_PATH, endpoint)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state)
}

struct ContactState<Contact> {
    service: Arc<Contact>,
    success_message: Arc<str>,
}

impl<Contact> Clone for ContactState<Contact> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            success_message: Arc::clone(&self.success_message),
        }
    }
}

async fn submit<Contact: ContactFeatureService>(
    State(state): State<ContactState<Contact>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return error(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large");
        }
        Err(rejection) => return internal_server_error(rejection),
    };

    let body: &[u8] = if body.is_empty() { b"{}" } else { &body };
    let submission = match ApiContactSubmission::from_json(body)
        .context("Failed to parse contact submission")
    {
        Ok(submission) => submission,
        Err(err) => return internal_server_error(err),
    };
    let submission = match RawContactSubmission::try_from(submission) {
        Ok(submission) => submission,
        Err(fields) => return invalid_fields(fields),
    };

    match state.service.submit(submission).await {
        Ok(()) => Json(ApiContactSuccess {
            message: &state.success_message,
        })
        .into_response(),
        Err(ContactSubmitError::MissingFields) => {
            error(StatusCode::BAD_REQUEST, "Missing required fields")
        }
        Err(ContactSubmitError::InvalidFields(fields)) => invalid_fields(fields),
        Err(ContactSubmitError::Unavailable) => {
            warn!("mail server unavailable, contact submission not delivered");
            error(
                StatusCode::SERVICE_UNAVAILABLE,
                "Service temporarily unavailable",
            )
        }
        Err(ContactSubmitError::Rejected) => {
            internal_server_error(anyhow!("Mail server rejected the contact submission"))
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

fn invalid_fields(fields: FieldErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiInvalidFields {
            error: "Invalid fields",
            fields,
        }),
    )
        .into_response()
}

async fn method_not_allowed() -> Response {
    error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
