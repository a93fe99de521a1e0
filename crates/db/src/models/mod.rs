//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the table row
//! - Joined read views where a response resolves a related name
//! - `Deserialize` + `Validate` create/update DTOs (update fields all `Option`)
//!
//! Nullable columns are `Option<Option<T>>` in update DTOs: the outer layer
//! records whether the key was sent, the inner one carries an explicit `null`.

use serde::{Deserialize, Deserializer};

pub mod director;
pub mod movie;
pub mod rating;
pub mod review;

/// Deserialize a present key as `Some(value)`, including `null` as `Some(None)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
