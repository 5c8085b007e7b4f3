//! Category model.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    /// Display label, stored and serialized as `type`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// `{id: type}` mapping returned by the category endpoints, ordered by id.
pub type CategoryMap = BTreeMap<DbId, String>;

/// Collapse a category list into the wire mapping.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_serializes_with_string_keys() {
        let categories = vec![
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
        ];
        let json = serde_json::to_value(category_map(&categories)).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }

    #[test]
    fn category_serializes_label_as_type() {
        let json = serde_json::to_value(Category { id: 3, kind: "Geography".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "type": "Geography"}));
    }
}
