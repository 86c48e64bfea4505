use crate::{
    webhooks::{ValidatedEvent, WebhookEvent},
    Error,
};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Shared secret used to sign webhook payloads.
///
/// It is a wrapper around a [`secrecy::Secret`](secrecy::Secret), redacted
/// when printed with `Debug` and wiped on drop.
///
/// ```rust
/// # use treezor_rust::webhooks::WebhookSecret;
/// let secret = WebhookSecret::new("supersecret");
///
/// assert!(!format!("{:?}", secret).contains("supersecret"));
/// assert_eq!(secret.expose_secret(), "supersecret");
/// ```
#[derive(Deserialize, Clone, Debug)]
#[serde(transparent)]
pub struct WebhookSecret(Secret<String>);

impl WebhookSecret {
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for WebhookSecret
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        WebhookSecret::new(s)
    }
}

/// Webhook configuration, to be loaded with the application's config layer.
#[derive(Deserialize, Clone, Debug)]
pub struct WebhookSettings {
    pub secret_key: WebhookSecret,
}

/// Validates incoming webhook deliveries against a shared secret.
#[derive(Clone, Debug)]
pub struct WebhookValidator {
    secret: WebhookSecret,
}

impl WebhookValidator {
    pub fn new(secret: impl Into<WebhookSecret>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn from_settings(settings: WebhookSettings) -> Self {
        Self::new(settings.secret_key)
    }

    /// Parses a raw delivery and checks its signature.
    ///
    /// `content_type` is the value of the request `Content-Type` header.
    #[tracing::instrument(name = "Validate Webhook Request", skip(self, body))]
    pub fn validate_request(
        &self,
        body: &[u8],
        content_type: &str,
    ) -> Result<ValidatedEvent, Error> {
        WebhookEvent::parse(body, content_type)?.validate(&self.secret)
    }
}
