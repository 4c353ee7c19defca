//! Normalization from the raw collection export to the canonical model.
//!
//! Ingestion never rejects a descriptor: `null` entries are skipped, missing
//! keys fall back to defaults and unknown field kinds are kept as
//! [`FieldType::Unknown`] so the mapper can degrade them to a passthrough.

use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{
    AccessRules, CollectionDescriptor, CollectionKind, FieldDescriptor, FieldType, FileOptions,
    NumberOptions, RelationOptions, SelectOptions, TextOptions, UrlOptions,
};
use crate::raw::{RawCollection, RawField};

/// Failure to decode a collection export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The document is not a JSON array of collection objects (or nulls).
    #[error("Failed to parse collection export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a JSON collection export and normalize it.
pub fn parse_collections(json: &str) -> Result<Vec<CollectionDescriptor>, IngestError> {
    let raw: Vec<Option<RawCollection>> = serde_json::from_str(json)?;
    Ok(build_collections(raw))
}

/// Normalize raw collections, preserving their order and skipping `null` entries.
pub fn build_collections<I>(raw: I) -> Vec<CollectionDescriptor>
where
    I: IntoIterator<Item = Option<RawCollection>>,
{
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            if entry.is_none() {
                debug!(index, "Skipping null collection entry.");
            }
            entry.map(build_collection)
        })
        .collect()
}

/// Classify a collection. Auth wins over view; everything else is base.
pub fn collection_kind(raw: &RawCollection) -> CollectionKind {
    if raw.is_auth() {
        CollectionKind::Auth
    } else if raw.is_view() {
        CollectionKind::View
    } else {
        CollectionKind::Base
    }
}

fn build_collection(raw: RawCollection) -> CollectionDescriptor {
    let kind = collection_kind(&raw);
    let name = raw.name.unwrap_or_default();

    let fields: Vec<FieldDescriptor> = raw
        .fields
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(|field| build_field(&name, field))
        .collect();

    debug!(
        collection = %name,
        kind = ?kind,
        fields = fields.len(),
        "Ingested collection."
    );

    CollectionDescriptor {
        id: raw.id.unwrap_or_default(),
        kind,
        name,
        system: raw.system.unwrap_or(false),
        rules: AccessRules {
            list: raw.list_rule,
            view: raw.view_rule,
            create: raw.create_rule,
            update: raw.update_rule,
            delete: raw.delete_rule,
        },
        fields,
    }
}

fn build_field(collection: &str, raw: RawField) -> FieldDescriptor {
    let kind = raw.field_type.clone().unwrap_or_default();
    let field_type = field_type(&kind, &raw);

    let mut required = match field_type {
        // system-managed, never supplied by clients
        FieldType::AutoDate | FieldType::Unknown(_) => false,
        _ => raw.required.unwrap_or(false),
    };

    // a positive minimum length can only be satisfied by a present value
    if let FieldType::Text(TextOptions { min: Some(min), .. }) = &field_type
        && *min > 0
    {
        required = true;
    }

    if let FieldType::Unknown(kind) = &field_type {
        warn!(
            collection,
            field = raw.name.as_deref().unwrap_or_default(),
            kind = %kind,
            "Unknown field type, emitting an unconstrained schema."
        );
    }

    FieldDescriptor {
        id: raw.id.unwrap_or_default(),
        name: raw.name.unwrap_or_default(),
        field_type,
        system: raw.system.unwrap_or(false),
        hidden: raw.hidden.unwrap_or(false),
        required,
    }
}

fn field_type(kind: &str, raw: &RawField) -> FieldType {
    match kind {
        "text" => FieldType::Text(TextOptions {
            min: positive_length(raw.min),
            max: positive_length(raw.max),
            pattern: raw.pattern.clone().filter(|p| !p.is_empty()),
        }),
        "number" => FieldType::Number(NumberOptions {
            min: raw.min,
            max: raw.max,
            only_integer: raw.only_int.unwrap_or(false),
        }),
        "bool" => FieldType::Bool,
        "email" => FieldType::Email,
        "url" => FieldType::Url(UrlOptions {
            only_domains: non_empty(raw.only_domains.as_ref()),
            except_domains: non_empty(raw.except_domains.as_ref()),
        }),
        "date" => FieldType::Date,
        "autodate" => FieldType::AutoDate,
        "json" => FieldType::Json,
        "editor" => FieldType::Editor,
        "geoPoint" => FieldType::GeoPoint,
        "select" => FieldType::Select(SelectOptions {
            values: raw.values.clone().unwrap_or_default(),
            max_select: positive_count(raw.max_select),
        }),
        "relation" => FieldType::Relation(RelationOptions {
            collection_id: raw.collection_id.clone().filter(|id| !id.is_empty()),
            max_select: positive_count(raw.max_select),
        }),
        "file" => FieldType::File(FileOptions {
            max_size: raw.max_size.filter(|size| *size != 0),
            mime_types: non_empty(raw.mime_types.as_ref()),
            max_select: positive_count(raw.max_select),
        }),
        other => FieldType::Unknown(other.to_string()),
    }
}

/// Text lengths of `0` mean "no limit" in the export.
fn positive_length(value: Option<f64>) -> Option<u64> {
    value.filter(|v| *v >= 1.0).map(|v| v as u64)
}

/// `maxSelect` of `0` means "not configured" in the export.
fn positive_count(value: Option<i64>) -> Option<u64> {
    value.filter(|v| *v > 0).map(|v| v as u64)
}

fn non_empty(values: Option<&Vec<String>>) -> Option<Vec<String>> {
    values.filter(|v| !v.is_empty()).cloned()
}
