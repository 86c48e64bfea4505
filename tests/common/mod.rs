use serde_json::json;
use treezor_rust::webhooks::{sign_payload, WebhookSecret, WebhookSettings, WebhookValidator};

pub const WEBHOOK_SECRET: &str = "integration-webhook-secret";

pub fn init_tracing() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Loads webhook settings through the same config layer an application would use.
pub fn webhook_settings() -> anyhow::Result<WebhookSettings> {
    let settings = config::Config::builder()
        .set_override("secret_key", WEBHOOK_SECRET)?
        .build()?
        .try_deserialize()?;
    Ok(settings)
}

pub fn validator() -> anyhow::Result<WebhookValidator> {
    Ok(WebhookValidator::from_settings(webhook_settings()?))
}

/// Builds a delivery body whose payload is signed with [`WEBHOOK_SECRET`].
pub fn signed_delivery(event_type: &str, payload: &str) -> anyhow::Result<String> {
    let signature = sign_payload(payload.as_bytes(), &WebhookSecret::new(WEBHOOK_SECRET))?;
    Ok(delivery(event_type, payload, &signature))
}

pub fn delivery(event_type: &str, payload: &str, signature: &str) -> String {
    // object_payload is spliced in raw so its exact bytes reach the validator
    format!(
        r#"{{"webhook":{},"webhook_id":"9f2e","object":"{}","object_id":"1234","object_payload":{},"object_payload_signature":{}}}"#,
        json!(event_type),
        event_type.split('.').next().unwrap_or_default(),
        payload,
        json!(signature)
    )
}
