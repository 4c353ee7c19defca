//! Constructors for Valibot calls and prelude schemas.
//!
//! Builders ending in `_schema` (and the other prelude references such as
//! [`iso_date`] or [`file`]) point at branded schemas defined once in the
//! helpers template rather than in each collection section.

use super::expr::Expr;
use super::utils::{
    escape_regex_delimiters, format_number, mime_label, quote_single, quoted_list,
    size_expression,
};

fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_string())
}

fn helper(name: &str, raw_args: String) -> Expr {
    Expr::call(name, [Expr::Raw(raw_args)])
}

// =============================================================================
// Primitives
// =============================================================================

/// `v.string()`
pub fn string() -> Expr {
    Expr::v("string", [])
}

/// `v.number()`
pub fn number() -> Expr {
    Expr::v("number", [])
}

/// `v.boolean()`
pub fn boolean() -> Expr {
    Expr::v("boolean", [])
}

/// `v.url()`
pub fn url() -> Expr {
    Expr::v("url", [])
}

/// `v.email(...)` with a fixed message.
pub fn email() -> Expr {
    Expr::v("email", [Expr::Str("The email is badly formatted".into())])
}

/// `v.any()`, the passthrough for unknown field kinds.
pub fn any() -> Expr {
    Expr::v("any", [])
}

/// `v.nonEmpty()`
pub fn non_empty() -> Expr {
    Expr::v("nonEmpty", [])
}

/// `v.integer(...)`
pub fn integer() -> Expr {
    Expr::v("integer", [Expr::Message("Only integers are allowed.".into())])
}

// Prelude schemas

/// `urlSchema`: non-empty, well-formed, branded `URL`.
pub fn url_schema() -> Expr {
    ident("urlSchema")
}

/// `emailSchema`: branded `Email`.
pub fn email_schema() -> Expr {
    ident("emailSchema")
}

/// `isoDateStringSchema`: ISO timestamp branded `Date`.
pub fn iso_date() -> Expr {
    ident("isoDateStringSchema")
}

/// `isoAutoDateStringSchema`: ISO timestamp branded `AutoDate`.
pub fn auto_date() -> Expr {
    ident("isoAutoDateStringSchema")
}

/// `jsonSchema`
pub fn json() -> Expr {
    ident("jsonSchema")
}

/// `editorSchema`
pub fn editor() -> Expr {
    ident("editorSchema")
}

/// `geoPointSchema`: `{ lon, lat }` branded `GeoPoint`.
pub fn geo_point() -> Expr {
    ident("geoPointSchema")
}

/// `fileSchema`: an uploaded `File`.
pub fn file() -> Expr {
    ident("fileSchema")
}

/// `fileNameSchema`: a stored file name as returned by the API.
pub fn file_name() -> Expr {
    ident("fileNameSchema")
}

/// `recordIdSchema`
pub fn record_id() -> Expr {
    ident("recordIdSchema")
}

/// `passwordSchema`
pub fn password() -> Expr {
    ident("passwordSchema")
}

// =============================================================================
// Structural combinators
// =============================================================================

/// `v.pipe(a, b, ...)`. Actions run left to right; empty parts are dropped.
pub fn pipe(parts: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::v("pipe", parts)
}

/// `v.optional(schema)`
pub fn optional(schema: Expr) -> Expr {
    Expr::v("optional", [schema])
}

/// `v.optional(schema, default)`
pub fn optional_with_default(schema: Expr, default: Expr) -> Expr {
    Expr::v("optional", [schema, default])
}

/// `v.array(item)`
pub fn array(item: Expr) -> Expr {
    Expr::v("array", [item])
}

/// `v.object(shape)`; `shape` is an object literal.
pub fn object(shape: Expr) -> Expr {
    Expr::v("object", [shape])
}

/// `v.literal(value)`
pub fn literal(value: Expr) -> Expr {
    Expr::v("literal", [value])
}

/// `v.union([a, b, ...])`
pub fn union(options: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::v("union", [Expr::List(options.into_iter().collect())])
}

/// `v.picklist(['a', 'b'])`
pub fn picklist(values: &[String]) -> Expr {
    Expr::v("picklist", [Expr::Raw(format!("[{}]", quoted_list(values)))])
}

/// `v.brand('Name')`
pub fn brand(name: &str) -> Expr {
    Expr::v("brand", [Expr::Str(name.to_string())])
}

/// `v.check(fn, 'message')`
pub fn check(predicate: &str, message: &str) -> Expr {
    Expr::v(
        "check",
        [Expr::Raw(predicate.to_string()), Expr::Str(message.to_string())],
    )
}

/// `v.transform(fn)`
pub fn transform(function: &str) -> Expr {
    Expr::v("transform", [Expr::Raw(function.to_string())])
}

/// `v.lazy(() => schema)`
pub fn lazy(getter: &str) -> Expr {
    Expr::v("lazy", [Expr::Raw(getter.to_string())])
}

// =============================================================================
// Constraints
// =============================================================================

/// `v.length(n, ...)`: exact length.
pub fn length(n: u64) -> Expr {
    Expr::v(
        "length",
        [
            Expr::Raw(n.to_string()),
            Expr::Message(format!("Input must be exactly {n}")),
        ],
    )
}

/// `v.minLength(n, ...)`
pub fn min_length(n: u64) -> Expr {
    Expr::v(
        "minLength",
        [
            Expr::Raw(n.to_string()),
            Expr::Message(format!("Input must be at least {n} characters")),
        ],
    )
}

/// `v.maxLength(n, ...)`
pub fn max_length(n: u64) -> Expr {
    Expr::v(
        "maxLength",
        [
            Expr::Raw(n.to_string()),
            Expr::Message(format!("Input must be at most {n} characters")),
        ],
    )
}

/// `v.minValue(n, ...)`. The message names `n - 1`, matching the wording
/// existing clients already display.
pub fn min_value(n: f64) -> Expr {
    Expr::v(
        "minValue",
        [
            Expr::Raw(format_number(n)),
            Expr::Message(format!("Input must be greater than {}", format_number(n - 1.0))),
        ],
    )
}

/// `v.maxValue(n, ...)`. The message names `n + 1`, see [`min_value`].
pub fn max_value(n: f64) -> Expr {
    Expr::v(
        "maxValue",
        [
            Expr::Raw(format_number(n)),
            Expr::Message(format!("Input must be lower than {}", format_number(n + 1.0))),
        ],
    )
}

/// `v.value(n)`: exact numeric value.
pub fn value(n: f64) -> Expr {
    Expr::v("value", [Expr::Raw(format_number(n))])
}

/// `v.regex(/pattern/, 'Invalid format')`
pub fn regex(pattern: &str) -> Expr {
    Expr::v(
        "regex",
        [
            Expr::Raw(format!("/{}/", escape_regex_delimiters(pattern))),
            Expr::Str("Invalid format".into()),
        ],
    )
}

/// `v.mimeType([...], 'Please select one of the following file types: ...')`
pub fn mime_types(types: &[String]) -> Expr {
    Expr::v(
        "mimeType",
        [
            Expr::Raw(format!("[{}]", quoted_list(types))),
            Expr::Str(format!(
                "Please select one of the following file types: {}",
                mime_label(types)
            )),
        ],
    )
}

/// `v.maxSize(1024 * 1024 * 10, 'Please select a file smaller than 10 MB')`
pub fn max_size(bytes: i64) -> Expr {
    let (expr, label) = size_expression(bytes);
    Expr::v(
        "maxSize",
        [
            Expr::Raw(expr),
            Expr::Str(format!("Please select a file smaller than {label}")),
        ],
    )
}

// =============================================================================
// Prelude helpers
// =============================================================================

/// `optionalTextResponse(schema)`: the API returns `''` for unset values;
/// this accepts it and converts it to `undefined`.
pub fn optional_text_response(schema: Expr) -> Expr {
    Expr::call("optionalTextResponse", [schema])
}

/// `stringEnum('a', 'b')`
pub fn string_enum(values: &[String]) -> Expr {
    helper("stringEnum", quoted_list(values))
}

/// `onlyDomains('a.com', ...)`: URL whose host is one of the domains.
pub fn only_domains(domains: &[String]) -> Expr {
    helper("onlyDomains", quoted_list(domains))
}

/// `exceptDomains('a.com', ...)`: URL whose host is none of the domains.
pub fn except_domains(domains: &[String]) -> Expr {
    helper("exceptDomains", quoted_list(domains))
}

/// Single-quoted literal, e.g. for `v.literal('draft')`.
pub fn str_literal(s: &str) -> Expr {
    Expr::Raw(quote_single(s))
}
