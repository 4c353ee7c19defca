//! TypeScript code generator for PocketBase collection exports.
//!
//! The pipeline is:
//! 1. Ingest: collection export JSON -> `Vec<CollectionDescriptor>`
//! 2. Map: each field -> (view, input) `Expr` pair
//! 3. Emit: sections, registry and templates -> `String` (via `TsWriter`)

use tracing::{debug, info};
use valigen_common::Naming;

use crate::collection::{CollectionNames, index_by_id, write_collection};
use crate::ingest::{IngestError, parse_collections};
use crate::model::CollectionDescriptor;
use crate::registry::{write_collections_map, write_registry};
use crate::templates::Templates;
use crate::writer::TsWriter;

/// Render the full output file for `collections`, in their given order.
pub fn generate(
    collections: &[CollectionDescriptor],
    naming: &dyn Naming,
    templates: &Templates,
) -> String {
    let index = index_by_id(collections);
    let names: Vec<CollectionNames> = collections
        .iter()
        .map(|c| CollectionNames::new(naming, &c.name))
        .collect();

    let mut w = TsWriter::new();

    w.write(&templates.preamble);
    write_collections_map(&mut w, &names, naming);
    w.write(&templates.helpers);

    for collection in collections {
        write_collection(&mut w, collection, &index, naming);
    }

    write_registry(&mut w, &names, naming);
    w.write(&templates.tail);

    let output = w.finish();
    info!(
        collections = collections.len(),
        bytes = output.len(),
        "Generated Valibot schemas."
    );
    output
}

/// Parse a collection export and render it.
pub fn generate_from_json(
    json: &str,
    naming: &dyn Naming,
    templates: &Templates,
) -> Result<String, IngestError> {
    debug!(input_len = json.len(), "Parsing collection export.");
    let collections = parse_collections(json)?;
    Ok(generate(&collections, naming, templates))
}
