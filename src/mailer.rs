//! Outbound email delivery.
//!
//! Two transports are supported: direct SMTP (preferred when credentials are
//! present) and a SendGrid-style transactional HTTP API as fallback. The
//! choice is made once at startup from the configuration; each send is a
//! single outbound call with no retry.

use std::sync::LazyLock;

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::{PoolConfig, authentication::Credentials},
};
use regex::Regex;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

#[derive(Error, Debug)]
pub enum MailError {
    #[error("no email transport configured")]
    NotConfigured,

    #[error("invalid email address: {0}")]
    Address(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Provider { status: u16, body: String },
}

enum Transport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    Api {
        client: reqwest::Client,
        base_url: String,
        api_key: String,
    },
    Disabled,
}

pub struct Mailer {
    transport: Transport,
    from: String,
    default_to: String,
}

impl Mailer {
    /// Picks the transport from the configuration: SMTP when credentials are
    /// set, the transactional provider when an API key is set, otherwise
    /// sending is disabled and every send fails.
    pub fn from_config(config: &Config) -> Self {
        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_pass) {
            match Self::smtp(
                &config.smtp_relay,
                user.clone(),
                pass.clone(),
                config.from_email.clone(),
                config.to_email.clone(),
            ) {
                Ok(mailer) => {
                    info!(relay = %config.smtp_relay, "SMTP transport initialized");
                    return mailer;
                }
                Err(e) => warn!(error = %e, "SMTP transport unavailable"),
            }
        }

        if let Some(api_key) = &config.sendgrid_api_key {
            info!("transactional email provider initialized as fallback");
            return Self::sendgrid(
                api_key.clone(),
                config.sendgrid_base_url.clone(),
                config.from_email.clone(),
                config.to_email.clone(),
            );
        }

        warn!("no email service configured; set SMTP_USER/SMTP_PASS or SENDGRID_API_KEY");
        Self::disabled(config.from_email.clone(), config.to_email.clone())
    }

    pub fn smtp(
        relay: &str,
        user: String,
        pass: String,
        from: String,
        default_to: String,
    ) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(relay)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .credentials(Credentials::new(user, pass))
            .pool_config(PoolConfig::new().max_size(4))
            .build();

        Ok(Self {
            transport: Transport::Smtp(transport),
            from,
            default_to,
        })
    }

    pub fn sendgrid(api_key: String, base_url: String, from: String, default_to: String) -> Self {
        Self {
            transport: Transport::Api {
                client: reqwest::Client::new(),
                base_url,
                api_key,
            },
            from,
            default_to,
        }
    }

    pub fn disabled(from: String, default_to: String) -> Self {
        Self {
            transport: Transport::Disabled,
            from,
            default_to,
        }
    }

    /// Sends an HTML email with a derived plain-text alternative. `to`
    /// defaults to the configured recipient. Returns the provider message id
    /// when one is reported.
    pub async fn send(
        &self,
        to: Option<&str>,
        subject: &str,
        html: &str,
    ) -> Result<Option<String>, MailError> {
        let to = to.unwrap_or(&self.default_to);
        let text = strip_html(html);

        match &self.transport {
            Transport::Smtp(transport) => self.send_smtp(transport, to, subject, text, html).await,
            Transport::Api {
                client,
                base_url,
                api_key,
            } => {
                self.send_api(client, base_url, api_key, to, subject, &text, html)
                    .await
            }
            Transport::Disabled => Err(MailError::NotConfigured),
        }
    }

    async fn send_smtp(
        &self,
        transport: &AsyncSmtpTransport<Tokio1Executor>,
        to: &str,
        subject: &str,
        text: String,
        html: &str,
    ) -> Result<Option<String>, MailError> {
        let from = self
            .from
            .parse::<Mailbox>()
            .map_err(|e| MailError::Address(format!("{}: {e}", self.from)))?;
        let to = to
            .parse::<Mailbox>()
            .map_err(|e| MailError::Address(format!("{to}: {e}")))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(text, html.to_string()))
            .map_err(|e| MailError::Build(e.to_string()))?;

        let response = transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        let message_id = response.message().next().map(str::to_string);
        info!(message_id = ?message_id, "email sent via SMTP");
        Ok(message_id)
    }

    #[allow(clippy::too_many_arguments)]
    async fn send_api(
        &self,
        client: &reqwest::Client,
        base_url: &str,
        api_key: &str,
        to: &str,
        subject: &str,
        text: &str,
        html: &str,
    ) -> Result<Option<String>, MailError> {
        let payload = json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": self.from },
            "subject": subject,
            "content": [
                { "type": "text/plain", "value": text },
                { "type": "text/html", "value": html },
            ],
        });

        let response = client
            .post(format!("{base_url}/v3/mail/send"))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Provider {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        let message_id = response
            .headers()
            .get("x-message-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        info!(message_id = ?message_id, "email sent via transactional provider");
        Ok(message_id)
    }
}

/// Strips HTML tags for the plain-text alternative part.
pub fn strip_html(html: &str) -> String {
    TAG_RE.replace_all(html, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_html_removes_tags_and_keeps_text() {
        let html = r#"<div style="x"><p><strong>Name:</strong> Ada</p></div>"#;
        assert_eq!(strip_html(html), "Name: Ada");
    }

    #[test]
    fn strip_html_leaves_plain_text_untouched() {
        assert_eq!(strip_html("no tags here"), "no tags here");
    }

    #[tokio::test]
    async fn disabled_mailer_refuses_to_send() {
        let mailer = Mailer::disabled(
            "no-reply@futureos.edu".to_string(),
            "info@futureos.edu".to_string(),
        );
        let result = mailer.send(None, "subject", "<p>body</p>").await;
        assert!(matches!(result, Err(MailError::NotConfigured)));
    }
}
