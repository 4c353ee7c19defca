//! Valibot expression algebra.
//!
//! Builders return [`Expr`] nodes instead of strings so composition stays
//! structural; text is only produced at the end through the [`Emit`] trait.
//!
//! ## Module Structure
//!
//! - `expr`: the expression tree and its `Emit` implementation
//! - `builders`: one constructor per Valibot call or prelude schema
//! - `utils`: literal quoting, number formatting, file size expressions
//!
//! Callers conventionally import this module as `v`, so mapper code reads
//! like the generated TypeScript: `v::pipe([v::string(), v::min_length(3)])`.

mod builders;
mod expr;
pub mod utils;

pub use builders::{
    any, array, auto_date, boolean, brand, check, editor, email, email_schema, except_domains,
    file, file_name, geo_point, integer, iso_date, json, lazy, length, literal, max_length,
    max_size, max_value, mime_types, min_length, min_value, non_empty, number, object,
    only_domains, optional, optional_text_response, optional_with_default, password, picklist,
    pipe, record_id, regex, str_literal, string, string_enum, transform, union, url, url_schema,
    value,
};
pub use expr::{Emit, Expr};
pub use utils::size_expression;
