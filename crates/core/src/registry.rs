//! Workspace-level lookups: the collection name map, the schema registry and
//! the response type map. All three keep the input collection order.

use valigen_common::{Naming, quote_property_key};

use crate::collection::CollectionNames;
use crate::writer::TsWriter;

/// `export const Collections = { User: 'users', ... } as const;`
pub fn write_collections_map(w: &mut TsWriter, names: &[CollectionNames], naming: &dyn Naming) {
    w.blank();
    w.line("// All available PocketBase collections as a const map");
    w.line("export const Collections = {");
    w.indent();
    for n in names {
        w.line(&format!(
            "{}: {},",
            naming.sanitize_identifier(&n.pascal),
            quote_property_key(&n.name)
        ));
    }
    w.dedent();
    w.line("} as const;");
    w.line("export type CollectionKey = keyof typeof Collections;");
    w.line("export type CollectionName = (typeof Collections)[CollectionKey];");
}

/// Central registry plus the `ResponseTypes` lookup.
pub fn write_registry(w: &mut TsWriter, names: &[CollectionNames], naming: &dyn Naming) {
    w.blank();
    w.line("// Central registry of all generated collection schemas");
    w.line("export const registry = {");
    w.indent();
    for (i, n) in names.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        let CollectionNames { name, pascal, camel } = n;
        w.line(&format!("// Schemas for the \"{name}\" collection"));
        w.line(&format!("{}: {{", naming.sanitize_identifier(name)));
        w.indent();
        w.line(&format!("response: {camel}Response,"));
        w.line(&format!("create: create{pascal}Schema,"));
        w.line(&format!("update: update{pascal}Schema,"));
        w.dedent();
        w.line("},");
    }
    w.dedent();
    w.line("} as const;");
    w.blank();
    w.line("export type CollectionsMap = typeof registry;");
    w.line("export type CollectionNameKey = keyof CollectionsMap;");

    w.blank();
    w.line("// Helper type map: collection name -> strongly typed record");
    w.line("export type ResponseTypes = {");
    w.indent();
    for n in names {
        w.line(&format!("{}: {};", naming.sanitize_identifier(&n.name), n.pascal));
    }
    w.dedent();
    w.line("};");
}
