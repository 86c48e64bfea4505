use crate::{
    common::{CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT},
    types::Identifier,
    webhooks::{dispatch, verify_signature, EventPayload, WebhookError, WebhookSecret},
    Error,
};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// A webhook delivery as sent by Treezor, not validated yet.
///
/// See <https://docs.treezor.com/guide/webhooks/events-descriptions.html>.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct WebhookEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
    /// Event type, e.g. `user.create`.
    #[serde(rename = "webhook", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Identifier>,
    /// Payload exactly as received, the signature covers these bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_payload: Option<Box<RawValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_payload_signature: Option<String>,
}

impl WebhookEvent {
    /// Decodes a delivery body.
    ///
    /// Only `application/json` and `text/plain` bodies are accepted, the
    /// latter being used by KYC liveness events.
    #[tracing::instrument(name = "Parse Webhook Event", skip(body))]
    pub fn parse(body: &[u8], content_type: &str) -> Result<Self, Error> {
        let media_type = media_type(content_type)?;
        if media_type != CONTENT_TYPE_JSON && media_type != CONTENT_TYPE_TEXT {
            return Err(WebhookError::UnsupportedContentType(media_type).into());
        }

        let event: WebhookEvent =
            serde_json::from_slice(body).map_err(WebhookError::InvalidJson)?;

        if event.raw_payload().is_none() {
            return Err(WebhookError::MissingPayload.into());
        }
        if event.signature().is_none() {
            return Err(WebhookError::MissingSignature.into());
        }

        Ok(event)
    }

    pub fn event_type(&self) -> &str {
        self.event_type.as_deref().unwrap_or_default()
    }

    /// Raw payload bytes, `None` when absent or JSON `null`.
    pub fn raw_payload(&self) -> Option<&str> {
        self.object_payload
            .as_deref()
            .map(RawValue::get)
            .filter(|raw| *raw != "null")
    }

    /// Signature, `None` when absent or empty.
    pub fn signature(&self) -> Option<&str> {
        self.object_payload_signature
            .as_deref()
            .filter(|s| !s.is_empty())
    }

    /// Checks the payload signature against `secret`.
    #[tracing::instrument(
        name = "Validate Webhook Event",
        skip(self, secret),
        fields(event_type = %self.event_type())
    )]
    pub fn validate(self, secret: &WebhookSecret) -> Result<ValidatedEvent, Error> {
        let payload = self.raw_payload().ok_or(WebhookError::MissingPayload)?;
        let signature = self.signature().ok_or(WebhookError::MissingSignature)?;

        verify_signature(payload.as_bytes(), signature, secret)?;

        Ok(ValidatedEvent { event: self })
    }
}

/// A webhook delivery whose signature has been checked.
#[derive(Debug, Clone)]
pub struct ValidatedEvent {
    event: WebhookEvent,
}

impl ValidatedEvent {
    pub fn webhook_id(&self) -> Option<&str> {
        self.event.webhook_id.as_deref()
    }

    pub fn event_type(&self) -> &str {
        self.event.event_type()
    }

    pub fn object(&self) -> Option<&str> {
        self.event.object.as_deref()
    }

    pub fn object_id(&self) -> Option<&Identifier> {
        self.event.object_id.as_ref()
    }

    /// Payload bytes exactly as received.
    pub fn raw_payload(&self) -> &str {
        self.event.raw_payload().unwrap_or_default()
    }

    pub fn into_inner(self) -> WebhookEvent {
        self.event
    }

    /// Decodes the payload into the shape matching the event type.
    ///
    /// Unknown event types are not an error: their payload is returned as
    /// [`EventPayload::Untyped`].
    #[tracing::instrument(
        name = "Dispatch Webhook Event",
        skip(self),
        fields(event_type = %self.event_type())
    )]
    pub fn dispatch(&self) -> Result<EventPayload, Error> {
        dispatch::decode(self.event_type(), self.raw_payload().as_bytes())
    }
}

/// Extracts the lowercased media type of a `Content-Type` header, dropping parameters.
fn media_type(content_type: &str) -> Result<String, WebhookError> {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let valid = media_type
        .split_once('/')
        .map_or(false, |(kind, subtype)| is_token(kind) && is_token(subtype));
    if !valid {
        return Err(WebhookError::UnparseableContentType(content_type.to_string()));
    }

    Ok(media_type)
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhooks::sign_payload;
    use test_case::test_case;

    fn secret() -> WebhookSecret {
        WebhookSecret::new("k")
    }

    fn body(payload: &str, signature: &str) -> String {
        format!(
            r#"{{"webhook":"user.create","webhook_id":"w-1","object":"user","object_id":"42","object_payload":{},"object_payload_signature":"{}"}}"#,
            payload, signature
        )
    }

    #[test_case("application/json" ; "json")]
    #[test_case("application/json; charset=utf-8" ; "json with charset")]
    #[test_case("Application/JSON" ; "mixed case")]
    #[test_case("text/plain" ; "kyc liveness text")]
    fn parse_accepted_content_types(content_type: &str) {
        let event =
            WebhookEvent::parse(body(r#"{"a":1}"#, "sig").as_bytes(), content_type).unwrap();

        assert_eq!(event.event_type(), "user.create");
        assert_eq!(event.object_id, Some(Identifier::new("42")));
        assert_eq!(event.raw_payload(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn parse_rejects_unsupported_content_type() {
        let err = WebhookEvent::parse(body("{}", "sig").as_bytes(), "application/xml").unwrap_err();

        assert!(matches!(
            err,
            Error::Webhook(WebhookError::UnsupportedContentType(ref ct)) if ct == "application/xml"
        ));
    }

    #[test_case("" ; "empty")]
    #[test_case("json" ; "no subtype")]
    #[test_case("application/" ; "empty subtype")]
    #[test_case("application json/x" ; "space in type")]
    fn parse_rejects_unparseable_content_type(content_type: &str) {
        let err = WebhookEvent::parse(body("{}", "sig").as_bytes(), content_type).unwrap_err();

        assert!(matches!(
            err,
            Error::Webhook(WebhookError::UnparseableContentType(_))
        ));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = WebhookEvent::parse(b"{not json", "application/json").unwrap_err();

        assert!(matches!(err, Error::Webhook(WebhookError::InvalidJson(_))));
    }

    #[test_case(r#"{"webhook":"user.create","object_payload_signature":"sig"}"# ; "absent")]
    #[test_case(r#"{"webhook":"user.create","object_payload":null,"object_payload_signature":"sig"}"# ; "null")]
    fn parse_rejects_missing_payload(raw: &str) {
        let err = WebhookEvent::parse(raw.as_bytes(), "application/json").unwrap_err();

        assert!(matches!(err, Error::Webhook(WebhookError::MissingPayload)));
    }

    #[test_case(r#"{"webhook":"user.create","object_payload":{}}"# ; "absent")]
    #[test_case(r#"{"webhook":"user.create","object_payload":{},"object_payload_signature":""}"# ; "empty")]
    fn parse_rejects_missing_signature(raw: &str) {
        let err = WebhookEvent::parse(raw.as_bytes(), "application/json").unwrap_err();

        assert!(matches!(err, Error::Webhook(WebhookError::MissingSignature)));
    }

    #[test]
    fn validate_keeps_payload_bytes() {
        // whitespace and key order are covered by the signature
        let payload = r#"{ "b": 2,  "a": 1 }"#;
        let signature = sign_payload(payload.as_bytes(), &secret()).unwrap();

        let event = WebhookEvent::parse(body(payload, &signature).as_bytes(), "application/json")
            .unwrap()
            .validate(&secret())
            .unwrap();

        assert_eq!(event.raw_payload(), payload);
        assert_eq!(event.webhook_id(), Some("w-1"));
        assert_eq!(event.object(), Some("user"));
        assert_eq!(event.object_id(), Some(&Identifier::new("42")));
    }

    #[test]
    fn validate_rejects_mismatch() {
        let signature = sign_payload(br#"{"a":1}"#, &secret()).unwrap();

        let err = WebhookEvent::parse(body(r#"{"a":2}"#, &signature).as_bytes(), "application/json")
            .unwrap()
            .validate(&secret())
            .unwrap_err();

        assert!(matches!(err, Error::Webhook(WebhookError::SignatureMismatch)));
    }
}
