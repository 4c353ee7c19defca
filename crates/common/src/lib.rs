//! Naming service shared by the valigen generator and CLI.
//!
//! The generator never calls case-conversion helpers directly; it receives a
//! [`Naming`] capability instead so emitters can be tested with any naming
//! policy. [`Inflector`] is the default implementation used by the CLI.

mod ident;
mod inflector;

pub use ident::{TS_RESERVED_WORDS, is_valid_ts_identifier, quote_property_key};
pub use inflector::Inflector;

/// Case conversion, singularization and identifier sanitization.
pub trait Naming {
    /// `"blog_posts"` -> `"BlogPosts"`.
    fn to_pascal_case(&self, s: &str) -> String;

    /// `"blog_posts"` -> `"blogPosts"`.
    fn to_lower_camel_case(&self, s: &str) -> String;

    /// Best-effort English singular: `"stories"` -> `"story"`.
    fn to_singular(&self, s: &str) -> String;

    /// Returns `s` as a property key usable in an object literal, quoting it
    /// when it is not a plain identifier or is a reserved word.
    fn sanitize_identifier(&self, s: &str) -> String;
}
