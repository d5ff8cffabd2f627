use crate::api::{OutboundEmail, ResendApi};
use crate::config::MailConfig;
use crate::error::FolioError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Transactional email delivery.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), FolioError>;
}

/// Delivers through the Resend HTTP API.
pub struct ResendMailer {
    client: reqwest::Client,
    api_base: Url,
    api_key: Option<String>,
}

impl ResendMailer {
    pub fn new(cfg: &MailConfig) -> Result<Self, FolioError> {
        let client = reqwest::Client::builder()
            .user_agent("folio-desk/0.1")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(cfg.timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            client,
            api_base: with_trailing_slash(cfg.api_base.clone()),
            api_key: cfg.api_key.clone().filter(|k| !k.trim().is_empty()),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), FolioError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(FolioError::MailerNotConfigured)?;
        if email.to.is_empty() {
            return Err(FolioError::MailerNotConfigured);
        }
        let resp = ResendApi::send_email(&self.client, &self.api_base, api_key, &email).await?;
        info!(email_id = %resp.id, "contact email accepted by provider");
        Ok(())
    }
}

/// `Url::join` replaces the last segment unless the base ends in `/`.
fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
