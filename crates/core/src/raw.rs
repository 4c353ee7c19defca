//! Raw collection export structs for serde deserialization.
//!
//! These mirror the JSON the store produces when exporting its collections
//! (an array of collection objects with flat field objects). Every key is
//! optional and unknown keys are ignored; normalization into the canonical
//! model happens in [`crate::ingest`].

use serde::{Deserialize, Deserializer};

/// A collection as exported by the store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollection {
    /// Stable identity, e.g. `"pbc_3142635823"`.
    pub id: Option<String>,
    /// Collection name, e.g. `"users"` or `"_mfas"`.
    pub name: Option<String>,
    /// `"base"`, `"auth"` or `"view"`.
    #[serde(rename = "type")]
    pub collection_type: Option<String>,
    /// Created and managed by the store itself.
    pub system: Option<bool>,
    /// Filter expression for listing records; `null` means superusers only.
    pub list_rule: Option<String>,
    /// Filter expression for viewing one record.
    pub view_rule: Option<String>,
    /// Filter expression for creating records.
    pub create_rule: Option<String>,
    /// Filter expression for updating records.
    pub update_rule: Option<String>,
    /// Filter expression for deleting records.
    pub delete_rule: Option<String>,
    /// Field entries; `null` entries are skipped during ingestion.
    pub fields: Option<Vec<Option<RawField>>>,
}

impl RawCollection {
    /// Auth collections own credentials (email/password, OAuth2, ...).
    pub fn is_auth(&self) -> bool {
        self.collection_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("auth"))
    }

    /// View collections are read-only projections defined by a query.
    pub fn is_view(&self) -> bool {
        self.collection_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("view"))
    }
}

/// A field as exported by the store. Options for every kind share one flat
/// object, so which keys matter depends on `type`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    /// Stable identity within the collection.
    pub id: Option<String>,
    /// Property name in records.
    pub name: Option<String>,
    /// Field kind: `"text"`, `"number"`, `"relation"`, ...
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    /// Managed by the store.
    pub system: Option<bool>,
    /// Never returned by the API.
    pub hidden: Option<bool>,
    /// Must be present and non-empty.
    pub required: Option<bool>,

    // text (integer lengths) and number (float bounds); date bounds are
    // strings and are dropped
    /// Minimum length (text) or value (number).
    #[serde(default, deserialize_with = "numeric_bound")]
    pub min: Option<f64>,
    /// Maximum length (text) or value (number).
    #[serde(default, deserialize_with = "numeric_bound")]
    pub max: Option<f64>,
    /// Regex a text value must match.
    pub pattern: Option<String>,
    /// Number fields only accept integers.
    pub only_int: Option<bool>,

    // select / relation / file
    /// Allowed select values.
    pub values: Option<Vec<String>>,
    /// Maximum number of selected values, relations or files.
    pub max_select: Option<i64>,
    /// Target collection id of a relation.
    pub collection_id: Option<String>,
    /// Maximum file size in bytes.
    pub max_size: Option<i64>,
    /// Accepted file MIME types.
    pub mime_types: Option<Vec<String>>,

    // url
    /// Only URLs on these domains are accepted.
    pub only_domains: Option<Vec<String>>,
    /// URLs on these domains are rejected.
    pub except_domains: Option<Vec<String>>,
}

fn numeric_bound<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_export_entry() {
        let json = r#"{
            "id": "pbc_users",
            "name": "users",
            "type": "auth",
            "system": false,
            "listRule": "id = @request.auth.id",
            "viewRule": null,
            "authToken": { "duration": 604800 },
            "fields": [
                null,
                { "id": "text1", "name": "username", "type": "text", "min": 3, "max": 80, "pattern": "^[\\w]+$", "required": true, "presentable": false },
                { "id": "rel1", "name": "tasks", "type": "relation", "collectionId": "pbc_todos", "maxSelect": 999, "cascadeDelete": false }
            ]
        }"#;

        let raw: RawCollection = serde_json::from_str(json).unwrap();
        assert!(raw.is_auth());
        assert!(!raw.is_view());
        assert_eq!(raw.list_rule.as_deref(), Some("id = @request.auth.id"));
        assert_eq!(raw.view_rule, None);
        let fields = raw.fields.as_ref().unwrap();
        assert_eq!(fields.len(), 3);
        assert!(fields[0].is_none());

        let username = fields[1].as_ref().unwrap();
        assert_eq!(username.min, Some(3.0));
        assert_eq!(username.pattern.as_deref(), Some("^[\\w]+$"));

        let tasks = fields[2].as_ref().unwrap();
        assert_eq!(tasks.collection_id.as_deref(), Some("pbc_todos"));
        assert_eq!(tasks.max_select, Some(999));
    }

    #[test]
    fn test_missing_keys_default_to_none() {
        let raw: RawCollection = serde_json::from_str("{}").unwrap();
        assert!(raw.name.is_none());
        assert!(raw.fields.is_none());
        assert!(!raw.is_auth());
        assert!(!raw.is_view());
    }

    #[test]
    fn test_non_numeric_bounds_are_dropped() {
        let json = r#"{ "name": "due", "type": "date", "min": "", "max": "2030-01-01 00:00:00.000Z" }"#;
        let field: RawField = serde_json::from_str(json).unwrap();
        assert_eq!(field.min, None);
        assert_eq!(field.max, None);

        let field: RawField = serde_json::from_str(r#"{ "min": null, "max": 2.5 }"#).unwrap();
        assert_eq!(field.min, None);
        assert_eq!(field.max, Some(2.5));
    }
}
