//! Per-collection section: schemas, inferred types and create/update wrappers.

use std::collections::HashMap;

use tracing::debug;
use valigen_common::Naming;

use crate::fields::field_schemas;
use crate::model::{CollectionDescriptor, CollectionKind, FieldDescriptor, FieldType};
use crate::valibot::Emit;
use crate::writer::TsWriter;

/// Fields managed by the store and covered by `systemFieldsSchema`.
pub const SYSTEM_FIELDS: [&str; 4] = ["id", "created", "updated", "collectionId"];

const SEPARATOR_WIDTH: usize = 90;

/// Derived identifiers for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionNames {
    /// Name as stored, e.g. `"blog_posts"`.
    pub name: String,
    /// `"BlogPost"`: record type and wrapper prefix.
    pub pascal: String,
    /// `"blogPost"`: schema constant prefix.
    pub camel: String,
}

impl CollectionNames {
    /// Names are derived from the singular of `name`.
    pub fn new(naming: &dyn Naming, name: &str) -> Self {
        let singular = naming.to_singular(name);
        Self {
            name: name.to_string(),
            pascal: naming.to_pascal_case(&singular),
            camel: naming.to_lower_camel_case(&singular),
        }
    }
}

/// Collections by id, for relation resolution.
pub type CollectionIndex<'a> = HashMap<&'a str, &'a CollectionDescriptor>;

/// Index `collections` by id.
pub fn index_by_id(collections: &[CollectionDescriptor]) -> CollectionIndex<'_> {
    collections.iter().map(|c| (c.id.as_str(), c)).collect()
}

/// Whether a field is left out of the generated object schemas.
pub fn is_skipped(field: &FieldDescriptor) -> bool {
    field.hidden || SYSTEM_FIELDS.contains(&field.name.as_str())
}

/// Expand property type for a relation field, when its target is known.
fn expand_type(
    field: &FieldDescriptor,
    index: &CollectionIndex<'_>,
    naming: &dyn Naming,
) -> Option<String> {
    let FieldType::Relation(relation) = &field.field_type else {
        return None;
    };
    let target_id = relation.collection_id.as_deref()?;
    let Some(target) = index.get(target_id) else {
        debug!(
            field = %field.name,
            target = target_id,
            "Relation target not found, skipping expand entry."
        );
        return None;
    };

    let record = CollectionNames::new(naming, &target.name).pascal;
    Some(if relation.is_multiple() {
        format!("{record}[]")
    } else {
        record
    })
}

/// Banner opening a collection section: `NAME COLLECTION` between `=` rules.
pub fn write_section_comment(w: &mut TsWriter, title: &str) {
    let sep = "=".repeat(SEPARATOR_WIDTH);
    w.blank();
    w.line(&format!("/*{sep}"));
    w.line(&format!("{} COLLECTION", title.to_uppercase()));
    w.line(&format!("{sep}*/"));
}

fn write_doc(w: &mut TsWriter, text: &str) {
    w.line("/**");
    w.line(&format!(" * {text}"));
    w.line(" */");
}

fn write_object(w: &mut TsWriter, head: &str, spread: Option<&str>, entries: &[String]) {
    w.line(&format!("{head} = v.object({{"));
    w.indent();
    if let Some(spread) = spread {
        w.line(&format!("{spread},"));
    }
    for entry in entries {
        w.line(&format!("{entry},"));
    }
    w.dedent();
    w.line("});");
}

/// Write the full section for one collection.
pub fn write_collection(
    w: &mut TsWriter,
    collection: &CollectionDescriptor,
    index: &CollectionIndex<'_>,
    naming: &dyn Naming,
) {
    let names = CollectionNames::new(naming, &collection.name);
    let CollectionNames { name, pascal, camel } = &names;

    let mut view_entries = Vec::new();
    let mut input_entries = Vec::new();
    let mut expand_entries = Vec::new();

    for field in &collection.fields {
        if is_skipped(field) {
            continue;
        }
        let key = naming.sanitize_identifier(&field.name);
        let schemas = field_schemas(field);
        view_entries.push(format!("{key}: {}", schemas.view.emit()));
        input_entries.push(format!("{key}: {}", schemas.input.emit()));

        if let Some(ty) = expand_type(field, index, naming) {
            expand_entries.push(format!("{key}?: {ty}"));
        }
    }

    debug!(
        collection = %name,
        fields = view_entries.len(),
        expand = expand_entries.len(),
        "Emitting collection section."
    );

    write_section_comment(w, name);

    w.blank();
    write_doc(w, &format!("Raw field schema for \"{name}\""));
    write_object(
        w,
        &format!("export const {camel}Response"),
        Some(&format!("...systemFieldsSchema('{name}').entries")),
        &view_entries,
    );

    w.blank();
    write_doc(w, &format!("Input schema for creating/updating \"{name}\""));
    write_object(w, &format!("export const {camel}Input"), None, &input_entries);

    w.blank();
    w.line(&format!(
        "export type {pascal}Fields = v.InferOutput<typeof {camel}Response>;"
    ));

    w.blank();
    if expand_entries.is_empty() {
        w.line(&format!("// No expand relations defined for {pascal}"));
        w.line(&format!("export type {pascal}Expand = {{}};"));
        w.blank();
        w.line(&format!("export type {pascal} = {pascal}Fields;"));
    } else {
        write_doc(
            w,
            &format!("Relations that can be expanded when loading \"{name}\""),
        );
        w.line(&format!("export type {pascal}Expand = {{"));
        w.indent();
        for entry in &expand_entries {
            w.line(&format!("{entry};"));
        }
        w.dedent();
        w.line("};");
        w.blank();
        w.line(&format!(
            "export type {pascal} = {pascal}Fields & Expand<Partial<{pascal}Expand>>;"
        ));
    }

    write_wrappers(w, collection.kind, &names);
}

fn write_wrappers(w: &mut TsWriter, kind: CollectionKind, names: &CollectionNames) {
    let (create_fn, update_fn) = match kind {
        CollectionKind::Auth => ("createAuthSchema", "updateAuthSchema"),
        CollectionKind::Base | CollectionKind::View => ("createBaseSchema", "updateBaseSchema"),
    };
    let CollectionNames { pascal, camel, .. } = names;

    w.blank();
    write_doc(
        w,
        &format!("Create/Update schemas and their inferred input types for \"{pascal}\" records."),
    );
    w.line(&format!(
        "export const create{pascal}Schema = {create_fn}({camel}Input);"
    ));
    w.line(&format!(
        "export const update{pascal}Schema = {update_fn}({camel}Input);"
    ));
    w.blank();
    w.line("// Inferred input types from the above schemas");
    w.line(&format!(
        "export type Create{pascal}Input = v.InferOutput<typeof create{pascal}Schema>;"
    ));
    w.line(&format!(
        "export type Update{pascal}Input = v.InferOutput<typeof update{pascal}Schema>;"
    ));
}
