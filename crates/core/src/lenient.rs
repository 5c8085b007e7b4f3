//! Forgiving deserializers for values the web client sends loosely typed.

use serde::{Deserialize, Deserializer};

use crate::types::DbId;

/// Deserialize an optional page number, ignoring values that are not integers.
///
/// `?page=abc` behaves like no page at all rather than rejecting the request.
pub fn page_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(DbId),
    Text(String),
}

/// Deserialize an id sent either as a JSON integer or as a numeric string.
pub fn flexible_id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    match IdRepr::deserialize(deserializer)? {
        IdRepr::Int(id) => Ok(id),
        IdRepr::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {s:?}"))),
    }
}
