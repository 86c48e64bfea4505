use crate::types::{integer::decode_whole, Scalar};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Defines a numeric code with upstream names, decoded like [`Integer`](crate::types::Integer).
macro_rules! kyc_code {
    (
        $(#[$meta:meta])*
        $name:ident, $scalar:literal, {
            $($konst:ident = $value:literal => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            $(pub const $konst: Self = Self($value);)+

            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }

            /// Upstream name of the code, `None` for codes it does not document.
            pub fn name(&self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some($label),)+
                    _ => None,
                }
            }
        }

        impl Scalar for $name {
            const NAME: &'static str = $scalar;
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}", self.0),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                decode_whole(deserializer, Self::NAME).map(Self)
            }
        }
    };
}

kyc_code!(
    /// Trust level granted to a user after KYC (`kycLevel`).
    KycLevel, "treezor.KycLevel", {
        NONE = 0 => "LEVEL_NONE",
        PENDING = 1 => "LEVEL_PENDING",
        REGULAR = 2 => "LEVEL_REGULAR",
        STRONG = 3 => "LEVEL_STRONG",
        REFUSED = 4 => "LEVEL_REFUSED",
        INVESTIGATING = 5 => "LEVEL_INVESTIGATING",
    }
);

kyc_code!(
    /// Review status of a user's KYC (`kycReview`).
    KycReview, "treezor.KycReview", {
        NONE = 0 => "NONE",
        PENDING = 1 => "PENDING",
        VALIDATED = 2 => "VALIDATED",
        REFUSED = 3 => "REFUSED",
    }
);
