//! Rust building blocks for the [Treezor](https://www.treezor.com) banking-as-a-service APIs.
//!
//! Check out also the official Treezor [API documentation](https://docs.treezor.com).
//!
//! The Treezor APIs are loose with their JSON: amounts come as numbers or numeric
//! strings, booleans as `0`/`1`, missing dates as `"0000-00-00"`, timestamps as naive
//! local times in `Europe/Paris` or `Europe/London`. This crate provides:
//!
//! - [`types`]: lenient scalar types that accept every representation Treezor sends
//!   and serialize back to the exact convention it expects.
//! - [`envelope`]: the `{ "<resource>": [...] }` response contract, including the
//!   "exactly one item" check of single-resource operations.
//! - [`resources`]: typed resource shapes (users, wallets, cards, transfers...).
//! - [`webhooks`]: signature validation and typed decoding of webhook deliveries.
//!
//! # Usage
//!
//! ## Read a resource out of an HTTP response
//!
//! ```rust,no_run
//! # use treezor_rust::{response, resources::User, Error};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let res = reqwest::Client::new()
//!     .get("https://sandbox.treezor.com/v1/users/123")
//!     .bearer_auth("some-access-token")
//!     .send()
//!     .await?;
//!
//! let user: User = response::single(res).await?;
//! println!("User {:?} is {:?}", user.user_id, user.user_status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Decode an envelope
//!
//! ```rust
//! # use treezor_rust::{envelope::decode_single, resources::Wallet, types::Amount};
//! let body = br#"{"wallets":[{"walletId":"878","solde":"12.50"}]}"#;
//!
//! let wallet: Wallet = decode_single(body, "wallets").unwrap();
//! assert_eq!(wallet.solde, Some(Amount::new(12.5)));
//! ```
//!
//! ## Handle a webhook
//!
//! ```rust,no_run
//! # use treezor_rust::{webhooks::*, Error};
//! # fn main() -> Result<(), Error> {
//! # let body: &[u8] = unreachable!();
//! let validator = WebhookValidator::new("my-webhook-secret");
//!
//! let event = validator.validate_request(body, "application/json")?;
//! match event.dispatch()? {
//!     EventPayload::Transfer(transfers) => {
//!         for transfer in transfers {
//!             tracing::info!("Transfer {:?}: {:?}", transfer.transfer_id, transfer.transfer_status);
//!         }
//!     }
//!     EventPayload::Untyped(payload) => tracing::info!("{}: {}", event.event_type(), payload),
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

mod common;
pub mod envelope;
pub mod error;
pub mod resources;
pub mod response;
pub mod types;
pub mod webhooks;

pub use envelope::{Envelope, Resource};
pub use error::Error;
