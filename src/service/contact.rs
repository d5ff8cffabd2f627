use crate::api::OutboundEmail;
use crate::config::MailConfig;
use crate::db::models::NewContactMessage;
use crate::service::content::ContentService;
use crate::service::mailer::Mailer;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::{Arc, LazyLock};
use tracing::{error, info};

pub const THANK_YOU: &str = "Thank you for your message! I'll get back to you soon.";
pub const DELIVERY_FAILED: &str = "Failed to send message. Please try again.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

/// Raw contact form fields. Missing or `null` fields deserialize as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingField,
    InvalidEmail,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::MissingField => "All fields are required",
            ValidationError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

impl ContactForm {
    /// Shared by both delivery paths; runs before any side effect.
    pub fn validate(&self) -> Result<NewContactMessage, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        if [name, email, subject, message].iter().any(|f| f.is_empty()) {
            return Err(ValidationError::MissingField);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(NewContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

/// Uniform result shape returned to the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Rejected(ValidationError),
    Undelivered,
}

impl Submission {
    pub fn outcome(self) -> SubmissionOutcome {
        match self {
            Submission::Accepted => SubmissionOutcome {
                success: true,
                message: Some(THANK_YOU.to_string()),
                error: None,
            },
            Submission::Rejected(reason) => SubmissionOutcome {
                success: false,
                message: None,
                error: Some(reason.message().to_string()),
            },
            Submission::Undelivered => SubmissionOutcome {
                success: false,
                message: None,
                error: Some(DELIVERY_FAILED.to_string()),
            },
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            Submission::Accepted => StatusCode::OK,
            Submission::Rejected(_) => StatusCode::BAD_REQUEST,
            Submission::Undelivered => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for Submission {
    fn into_response(self) -> Response {
        (self.status(), Json(self.outcome())).into_response()
    }
}

/// Contact intake: validates a form, then stores it or emails it.
#[derive(Clone)]
pub struct ContactIntake {
    content: ContentService,
    mailer: Arc<dyn Mailer>,
    from: String,
    to: Vec<String>,
}

impl ContactIntake {
    pub fn new(content: ContentService, mailer: Arc<dyn Mailer>, mail: &MailConfig) -> Self {
        Self {
            content,
            mailer,
            from: mail.from.clone(),
            to: mail.to.clone(),
        }
    }

    /// Insert the message into `contact_messages` as unread.
    pub async fn submit_to_store(&self, form: &ContactForm) -> Submission {
        let mut message = match form.validate() {
            Ok(m) => m,
            Err(reason) => return Submission::Rejected(reason),
        };
        message.email = message.email.to_lowercase();

        match self.content.record_message(&message).await {
            Ok(stored) => {
                info!(id = stored.id, "contact message stored");
                Submission::Accepted
            }
            Err(e) => {
                error!(error = %e, "failed to store contact message");
                Submission::Undelivered
            }
        }
    }

    /// Forward the message to the owner's inbox, replying to the submitter.
    pub async fn submit_by_email(&self, form: &ContactForm) -> Submission {
        let message = match form.validate() {
            Ok(m) => m,
            Err(reason) => return Submission::Rejected(reason),
        };
        let email = compose_email(&message, &self.from, &self.to);

        match self.mailer.send(email).await {
            Ok(()) => Submission::Accepted,
            Err(e) => {
                error!(error = %e, "failed to send contact email");
                Submission::Undelivered
            }
        }
    }
}

pub fn compose_email(message: &NewContactMessage, from: &str, to: &[String]) -> OutboundEmail {
    let name = escape_html(&message.name);
    let email = escape_html(&message.email);
    let subject = escape_html(&message.subject);
    let body = escape_html(&message.message);

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #059669; border-bottom: 2px solid #059669; padding-bottom: 10px;">New Contact Form Message</h2>
  <div style="background-color: #f0fdf4; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #065f46; margin-top: 0;">Contact Details:</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Subject:</strong> {subject}</p>
  </div>
  <div style="background-color: #ffffff; padding: 20px; border: 1px solid #d1d5db; border-radius: 8px;">
    <h3 style="color: #065f46; margin-top: 0;">Message:</h3>
    <p style="line-height: 1.6; white-space: pre-wrap;">{body}</p>
  </div>
  <div style="margin-top: 20px; padding: 15px; background-color: #f9fafb; border-radius: 8px;">
    <p style="margin: 0; color: #6b7280; font-size: 14px;">This message was sent from your portfolio contact form. Reply directly to this email to respond to {name}.</p>
  </div>
</div>"#
    );

    OutboundEmail {
        from: from.to_string(),
        to: to.to_vec(),
        subject: format!("Portfolio Contact: {}", message.subject),
        html,
        reply_to: message.email.clone(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn blank_fields_are_rejected() {
        let cases = [
            form("", "jane@example.com", "Hello", "Hi there"),
            form("Jane", "", "Hello", "Hi there"),
            form("Jane", "jane@example.com", "   ", "Hi there"),
            form("Jane", "jane@example.com", "Hello", ""),
        ];
        for case in cases {
            assert_eq!(case.validate(), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["not-an-email", "jane@example", "jane doe@example.com", "@example.com"] {
            let result = form("Jane", email, "Hello", "Hi").validate();
            assert_eq!(result, Err(ValidationError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let msg = form(" Jane Doe ", " Jane@Example.com ", "Hello", " Hi there\n")
            .validate()
            .unwrap();
        assert_eq!(msg.name, "Jane Doe");
        assert_eq!(msg.email, "Jane@Example.com");
        assert_eq!(msg.message, "Hi there");
    }

    #[test]
    fn composed_email_replies_to_submitter_and_escapes_content() {
        let msg = form("<b>Jane</b>", "jane@example.com", "Hello", "1 < 2 & 3")
            .validate()
            .unwrap();
        let email = compose_email(&msg, "Portfolio <noreply@example.com>", &["me@example.com".into()]);
        assert_eq!(email.reply_to, "jane@example.com");
        assert_eq!(email.subject, "Portfolio Contact: Hello");
        assert_eq!(email.to, vec!["me@example.com".to_string()]);
        assert!(email.html.contains("&lt;b&gt;Jane&lt;/b&gt;"));
        assert!(email.html.contains("1 &lt; 2 &amp; 3"));
        assert!(!email.html.contains("<b>Jane</b>"));
    }

    #[test]
    fn null_fields_read_as_empty() {
        let parsed: ContactForm = serde_json::from_value(serde_json::json!({
            "name": null,
            "email": "jane@example.com",
            "subject": "Hello"
        }))
        .unwrap();
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.message, "");
        assert_eq!(parsed.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn outcome_shape_matches_submission() {
        let ok = Submission::Accepted.outcome();
        assert!(ok.success);
        assert_eq!(ok.message.as_deref(), Some(THANK_YOU));
        assert!(ok.error.is_none());

        let bad = Submission::Rejected(ValidationError::InvalidEmail).outcome();
        assert!(!bad.success);
        assert_eq!(bad.error.as_deref(), Some("Please enter a valid email address"));
    }
}
