//! Treezor webhook deliveries.
//!
//! A delivery goes through three steps, each one only reachable from the previous:
//!
//! 1. [`WebhookEvent::parse`] decodes the request body into its envelope fields.
//! 2. [`WebhookEvent::validate`] checks the HMAC-SHA256 signature of the raw
//!    payload and yields a [`ValidatedEvent`].
//! 3. [`ValidatedEvent::dispatch`] decodes the payload into the shape matching
//!    the event type.
//!
//! [`WebhookValidator::validate_request`] runs the first two steps at once.
//!
//! ```rust
//! # use treezor_rust::webhooks::*;
//! # fn main() -> Result<(), treezor_rust::Error> {
//! let secret = WebhookSecret::new("my-secret");
//! let payload = r#"{"users":[{"userId":"1"}]}"#;
//! let body = format!(
//!     r#"{{"webhook":"user.create","object_id":"1","object_payload":{},"object_payload_signature":"{}"}}"#,
//!     payload,
//!     sign_payload(payload.as_bytes(), &secret)?,
//! );
//!
//! let event = WebhookValidator::new(secret).validate_request(body.as_bytes(), "application/json")?;
//!
//! match event.dispatch()? {
//!     EventPayload::User(users) => assert_eq!(users.len(), 1),
//!     _ => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```

mod dispatch;
mod event;
mod settings;
mod signature;

pub use dispatch::{EventFamily, EventPayload};
pub use event::{ValidatedEvent, WebhookEvent};
pub use settings::{WebhookSecret, WebhookSettings, WebhookValidator};
pub use signature::{sign_payload, verify_signature};

/// Failure to parse, validate or dispatch a webhook delivery.
#[derive(thiserror::Error, Debug)]
pub enum WebhookError {
    #[error("Unable to parse webhook request Content-Type {0:?}")]
    UnparseableContentType(String),
    #[error("Webhook request has unsupported Content-Type {0:?}")]
    UnsupportedContentType(String),
    #[error("Webhook request has invalid JSON payload: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Webhook request has missing payload")]
    MissingPayload,
    #[error("Webhook request has missing signature")]
    MissingSignature,
    #[error("Error decoding signature {signature:?}: {source}")]
    InvalidSignatureEncoding {
        signature: String,
        #[source]
        source: base64::DecodeError,
    },
    #[error("Webhook secret cannot be used as an HMAC key")]
    InvalidSecret,
    #[error("Payload signature check failed")]
    SignatureMismatch,
    #[error("Invalid payload for event `{event_type}`: {source}")]
    InvalidPayload {
        event_type: String,
        #[source]
        source: serde_json::Error,
    },
}
