//! The `{ "<resource>": [ ... ] }` shape wrapping every Treezor response.
//!
//! Create, get, edit and delete operations on a single resource still get a
//! list back and must check that it holds exactly one item. List operations
//! accept any number of items.

use crate::Error;
use serde::{
    de::{self, DeserializeOwned, DeserializeSeed, IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer,
};
use std::{fmt, marker::PhantomData};

/// A resource shape returned by the Treezor APIs inside an envelope.
pub trait Resource: DeserializeOwned {
    /// Key holding the list of items in the envelope, e.g. `users`.
    const KEY: &'static str;
}

/// Ordered list of items decoded from an envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    resource: String,
    items: Vec<T>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decodes the items held under `resource` in `body`.
    ///
    /// A missing or `null` list decodes to an empty envelope.
    pub fn decode(body: &[u8], resource: &str) -> Result<Self, Error> {
        let items = decode_items(body, resource).map_err(|source| Error::Envelope {
            resource: resource.to_string(),
            source,
        })?;

        Ok(Self {
            resource: resource.to_string(),
            items,
        })
    }
}

/// Pulls the list under `key` out of `body`, rejecting trailing data.
pub(crate) fn decode_items<T: DeserializeOwned>(
    body: &[u8],
    key: &str,
) -> serde_json::Result<Vec<T>> {
    let mut de = serde_json::Deserializer::from_slice(body);
    let items = EnvelopeSeed::<T>::new(key).deserialize(&mut de)?;
    de.end()?;

    Ok(items)
}

impl<T: Resource> Envelope<T> {
    /// Decodes the items held under the key of resource `T`.
    pub fn decode_resource(body: &[u8]) -> Result<Self, Error> {
        Self::decode(body, T::KEY)
    }
}

impl<T> Envelope<T> {
    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the only item of the envelope.
    ///
    /// Fails with [`Error::UnexpectedItemCount`] if there are zero or more items.
    pub fn into_single(mut self) -> Result<T, Error> {
        match self.items.pop() {
            Some(item) if self.items.is_empty() => Ok(item),
            popped => Err(Error::UnexpectedItemCount {
                count: self.items.len() + usize::from(popped.is_some()),
                resource: self.resource,
            }),
        }
    }
}

/// Decodes the single item held under `resource` in `body`.
pub fn decode_single<T: DeserializeOwned>(body: &[u8], resource: &str) -> Result<T, Error> {
    Envelope::decode(body, resource)?.into_single()
}

/// Decodes all the items held under `resource` in `body`.
pub fn decode_list<T: DeserializeOwned>(body: &[u8], resource: &str) -> Result<Vec<T>, Error> {
    Ok(Envelope::decode(body, resource)?.into_items())
}

/// Seed pulling the list under `key` out of an envelope object, skipping every other key.
///
/// `key` matches regardless of ASCII case.
struct EnvelopeSeed<'a, T> {
    key: &'a str,
    marker: PhantomData<T>,
}

impl<'a, T> EnvelopeSeed<'a, T> {
    fn new(key: &'a str) -> Self {
        Self {
            key,
            marker: PhantomData,
        }
    }
}

impl<'de, 'a, T: Deserialize<'de>> DeserializeSeed<'de> for EnvelopeSeed<'a, T> {
    type Value = Vec<T>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de, 'a, T: Deserialize<'de>> Visitor<'de> for EnvelopeSeed<'a, T> {
    type Value = Vec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an object holding a `{}` list", self.key)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut items: Option<Vec<T>> = None;

        // Keys are matched ignoring ASCII case, some deliveries capitalise them
        while let Some(key) = map.next_key::<String>()? {
            if !key.eq_ignore_ascii_case(self.key) {
                map.next_value::<IgnoredAny>()?;
                continue;
            }

            if items.is_some() {
                return Err(de::Error::custom(format!("duplicate key `{}`", self.key)));
            }
            items = Some(map.next_value::<Option<Vec<T>>>()?.unwrap_or_default());
        }

        Ok(items.unwrap_or_default())
    }
}
