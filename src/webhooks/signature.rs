use crate::webhooks::{WebhookError, WebhookSecret};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn mac(payload: &[u8], secret: &WebhookSecret) -> Result<HmacSha256, WebhookError> {
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .map_err(|_| WebhookError::InvalidSecret)?;
    mac.update(payload);

    Ok(mac)
}

/// Computes the signature Treezor attaches to `payload`: the base64 encoded
/// HMAC-SHA256 of the exact payload bytes.
pub fn sign_payload(payload: &[u8], secret: &WebhookSecret) -> Result<String, WebhookError> {
    Ok(STANDARD.encode(mac(payload, secret)?.finalize().into_bytes()))
}

/// Checks `signature` against `payload` in constant time.
pub fn verify_signature(
    payload: &[u8],
    signature: &str,
    secret: &WebhookSecret,
) -> Result<(), WebhookError> {
    if signature.is_empty() {
        return Err(WebhookError::MissingSignature);
    }

    let expected = STANDARD
        .decode(signature)
        .map_err(|source| WebhookError::InvalidSignatureEncoding {
            signature: signature.to_string(),
            source,
        })?;

    mac(payload, secret)?
        .verify_slice(&expected)
        .map_err(|_| WebhookError::SignatureMismatch)
}
