// Common model types

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

/// Collection envelope returned by every list endpoint
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Items<T> {
    #[serde(
        default = "Vec::new",
        deserialize_with = "null_as_default",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub items: Vec<T>,
}

/// Decode an explicit JSON `null` as the type's default value.
///
/// Combined with `#[serde(default)]` this treats absent and null fields the
/// same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An entity served from its own collection endpoint.
///
/// The shared accessors in [`crate::client`] are generic over this trait, so
/// list / get / get-by-field exist once for every entity type.
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Collection path relative to the base URL, e.g. `/topics`
    const PATH: &'static str;
    /// Name used in not-found errors
    const KIND: &'static str;
}
