//! Validates a webhook delivery saved to disk and prints its decoded payload.
//!
//! ```sh
//! cargo run --example webhook_receiver -- delivery.json application/json
//! ```
//!
//! The shared secret is read from `config.toml` (`secret_key = "..."`).

use anyhow::Context;
use treezor_rust::webhooks::{EventPayload, WebhookSettings, WebhookValidator};

fn read_settings() -> anyhow::Result<WebhookSettings> {
    config::Config::builder()
        .add_source(config::File::with_name("config"))
        .build()?
        .try_deserialize()
        .context("Failed to assemble the required configuration")
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().context("Missing delivery file argument")?;
    let content_type = args.next().unwrap_or_else(|| "application/json".to_string());

    let validator = WebhookValidator::from_settings(read_settings()?);
    let body = std::fs::read(&path).with_context(|| format!("Cannot read {}", path))?;

    let event = validator.validate_request(&body, &content_type)?;
    tracing::info!(
        "Valid {} delivery for object {:?}",
        event.event_type(),
        event.object_id()
    );

    match event.dispatch()? {
        EventPayload::Untyped(payload) => tracing::info!("Untyped payload: {}", payload),
        payload => tracing::info!("{:#?}", payload),
    }

    Ok(())
}

fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run() {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
