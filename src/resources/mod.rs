//! Treezor resource shapes.
//!
//! Every field is optional: the upstream omits fields freely and relies on the
//! difference between an absent field and a zero value. Absent fields are
//! skipped when encoding.
//!
//! Each shape that travels inside a `{ "<key>": [...] }` envelope implements
//! [`Resource`](crate::envelope::Resource) with its envelope key.

mod cards;
mod payments;
mod sepa;
mod transfers;
mod users;
mod wallets;

pub use cards::*;
pub use payments::*;
pub use sepa::*;
pub use transfers::*;
pub use users::*;
pub use wallets::*;
