use crate::error::FolioError;
use serde::{Deserialize, Serialize};
use tracing::error;
use url::Url;

/// Payload accepted by `POST /emails`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

#[derive(Debug, Deserialize)]
pub struct SendEmailResponse {
    pub id: String,
}

pub struct ResendApi;

impl ResendApi {
    /// Single attempt; the caller reports failure to the submitter.
    pub async fn send_email(
        client: &reqwest::Client,
        base: &Url,
        api_key: &str,
        email: &OutboundEmail,
    ) -> Result<SendEmailResponse, FolioError> {
        let url = base.join("emails")?;
        let resp = client
            .post(url)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!(%status, "Resend rejected email");
            return Err(FolioError::MailProviderStatus { status, body });
        }
        Ok(resp.json::<SendEmailResponse>().await?)
    }
}
