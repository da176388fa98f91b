//! DTO modules that bridge services with templates.

use serde::{Deserialize, Deserializer};

pub mod admin;
pub mod flights;
pub mod load_state;
pub mod profile;

/// Reads a `page` query value, treating anything that is not a number as
/// absent so the list falls back to its first page.
pub(crate) fn lenient_page<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}
