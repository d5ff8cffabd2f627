use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;

use crate::router::FolioState;
use crate::service::{ContactForm, Submission, ValidationError};

/// A body that is not a contact form object counts as a form with no fields.
fn form_or_rejected(
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<ContactForm, Submission> {
    payload.map(|Json(form)| form).map_err(|rejection| {
        debug!(error = %rejection, "unreadable contact form body");
        Submission::Rejected(ValidationError::MissingField)
    })
}

/// POST /api/contact -> stores the message for the admin inbox.
pub async fn contact_store_handler(
    State(state): State<FolioState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Submission {
    match form_or_rejected(payload) {
        Ok(form) => state.intake.submit_to_store(&form).await,
        Err(rejected) => rejected,
    }
}

/// POST /api/contact/email -> forwards the message by email.
pub async fn contact_email_handler(
    State(state): State<FolioState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Submission {
    match form_or_rejected(payload) {
        Ok(form) => state.intake.submit_by_email(&form).await,
        Err(rejected) => rejected,
    }
}
