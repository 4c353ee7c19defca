//! Valibot schema generation from PocketBase collection exports.
//!
//! ## Module Structure
//!
//! - `model` / `raw` / `ingest`: the canonical collection model and its
//!   normalization from the JSON export
//! - `valibot`: expression tree and builders for Valibot calls
//! - `fields`: per-field (view, input) schema mapping
//! - `collection` / `registry`: text emission for sections and lookups
//! - `templates`: fixed preamble, helpers and tail blocks
//! - `generator`: the `generate` entry point
//!
//! The crate is pure: it never reads or writes files. Callers hand it
//! descriptors and receive the finished text.

pub mod collection;
pub mod fields;
mod generator;
pub mod ingest;
pub mod model;
pub mod raw;
pub mod registry;
pub mod templates;
pub mod valibot;
pub mod writer;

pub use generator::{generate, generate_from_json};
pub use ingest::{IngestError, build_collections, parse_collections};
pub use model::{CollectionDescriptor, CollectionKind, FieldDescriptor, FieldType};
pub use templates::Templates;
