//! Database models for the constellation catalog

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Generic key/value dictionary as stored in a JSONB column
pub type JsonMap = sqlx::types::Json<serde_json::Map<String, serde_json::Value>>;

/// Constellation - matches the constellation table
///
/// `id` is generated by the server on insert and immutable afterwards;
/// `name` carries the database's collation and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Constellation {
    pub id: Uuid,
    pub name: Option<String>,
}

/// NewConstellation - for inserting new constellations
///
/// The id is omitted so the server default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConstellation {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constellation_serializes_id_and_name() {
        let constellation = Constellation {
            id: Uuid::nil(),
            name: Some("Orion".to_string()),
        };

        let json = serde_json::to_value(&constellation).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["name"], "Orion");
    }

    #[test]
    fn json_map_holds_arbitrary_keys() {
        let mut map = serde_json::Map::new();
        map.insert("magnitude".to_string(), serde_json::json!(4.2));
        map.insert("hemisphere".to_string(), serde_json::json!("north"));

        let column: JsonMap = sqlx::types::Json(map);
        assert_eq!(column["magnitude"], serde_json::json!(4.2));
        assert_eq!(column["hemisphere"], serde_json::json!("north"));
    }
}
