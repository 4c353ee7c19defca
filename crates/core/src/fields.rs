//! Field-type mapper: one field descriptor to a (view, input) schema pair.
//!
//! The view schema validates a record as the API returns it; the input
//! schema validates a create/update payload. Optional text-like values come
//! back from the API as `''`, which is why optional views go through
//! `optionalTextResponse` while optional inputs use a plain `v.optional`.

use crate::model::{
    FieldDescriptor, FieldType, FileOptions, NumberOptions, RelationOptions, SelectOptions,
    TextOptions, UrlOptions,
};
use crate::valibot::{self as v, Expr};

/// View and input expressions for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchemas {
    /// Validates the value as returned by the API.
    pub view: Expr,
    /// Validates a create/update payload.
    pub input: Expr,
}

impl FieldSchemas {
    fn new(view: Expr, input: Expr) -> Self {
        Self { view, input }
    }

    fn shared(base: Expr) -> Self {
        Self::new(base.clone(), base)
    }
}

/// Map a field to its view and input schemas.
pub fn field_schemas(field: &FieldDescriptor) -> FieldSchemas {
    let required = field.required;
    match &field.field_type {
        FieldType::Bool => bool_schemas(required),
        FieldType::Number(opts) => number_schemas(required, opts),
        FieldType::Text(opts) => text_schemas(required, opts),
        FieldType::Email => email_schemas(required),
        FieldType::Url(opts) => url_schemas(required, opts),
        FieldType::Date => text_optional(required, v::iso_date()),
        FieldType::AutoDate => text_optional(required, v::auto_date()),
        FieldType::Json => text_optional(required, v::json()),
        FieldType::Editor => text_optional(required, v::editor()),
        FieldType::GeoPoint => plain_optional(required, v::geo_point(), v::geo_point()),
        FieldType::Select(opts) => select_schemas(required, opts),
        FieldType::Relation(opts) => relation_schemas(required, opts),
        FieldType::File(opts) => file_schemas(required, opts),
        FieldType::Unknown(_) => FieldSchemas::shared(v::any()),
    }
}

/// Required: both sides share `base`. Optional: the view accepts `''` as unset.
fn text_optional(required: bool, base: Expr) -> FieldSchemas {
    if required {
        FieldSchemas::shared(base)
    } else {
        FieldSchemas::new(v::optional_text_response(base.clone()), v::optional(base))
    }
}

/// Required: unchanged. Optional: both sides wrapped in `v.optional`.
fn plain_optional(required: bool, view: Expr, input: Expr) -> FieldSchemas {
    if required {
        FieldSchemas::new(view, input)
    } else {
        FieldSchemas::new(v::optional(view), v::optional(input))
    }
}

/// Arrays default to `[]` when optional.
fn optional_array(required: bool, base: Expr) -> Expr {
    if required {
        base
    } else {
        v::optional_with_default(base, Expr::List(Vec::new()))
    }
}

fn optional_unless(required: bool, expr: Expr) -> Expr {
    if required { expr } else { v::optional(expr) }
}

fn bool_schemas(required: bool) -> FieldSchemas {
    if required {
        // a required checkbox must be ticked
        FieldSchemas::new(v::boolean(), v::literal(Expr::Raw("true".into())))
    } else {
        FieldSchemas::shared(v::optional(v::boolean()))
    }
}

fn email_schemas(required: bool) -> FieldSchemas {
    FieldSchemas::new(
        v::optional_text_response(v::email_schema()),
        optional_unless(required, v::email_schema()),
    )
}

fn number_schemas(required: bool, opts: &NumberOptions) -> FieldSchemas {
    let view = optional_unless(required, v::number());

    let mut parts = vec![v::number()];
    if opts.only_integer {
        parts.push(v::integer());
    }
    match (opts.min, opts.max) {
        (Some(min), Some(max)) if min == max => parts.push(v::value(min)),
        (min, max) => {
            parts.extend(min.map(v::min_value));
            parts.extend(max.map(v::max_value));
        }
    }

    FieldSchemas::new(view, optional_unless(required, v::pipe(parts)))
}

fn text_schemas(required: bool, opts: &TextOptions) -> FieldSchemas {
    if opts.is_unconstrained() {
        return text_optional(required, v::string());
    }

    let view = if required {
        v::pipe([v::string()])
    } else {
        v::optional_text_response(v::string())
    };

    let mut parts = vec![v::string()];
    match (opts.min, opts.max) {
        (Some(min), Some(max)) if min == max => parts.push(v::length(min)),
        (min, max) => {
            parts.extend(min.map(v::min_length));
            parts.extend(max.map(v::max_length));
        }
    }
    if let Some(pattern) = &opts.pattern {
        parts.push(v::regex(pattern));
    }

    FieldSchemas::new(view, optional_unless(required, v::pipe(parts)))
}

fn url_schemas(required: bool, opts: &UrlOptions) -> FieldSchemas {
    let restricted = match (&opts.only_domains, &opts.except_domains) {
        (Some(domains), _) => v::only_domains(domains),
        (None, Some(domains)) => v::except_domains(domains),
        (None, None) => return text_optional(required, v::url_schema()),
    };

    let view = if required {
        v::url_schema()
    } else {
        v::optional_text_response(v::url_schema())
    };
    FieldSchemas::new(view, optional_unless(required, restricted))
}

fn select_schemas(required: bool, opts: &SelectOptions) -> FieldSchemas {
    let view = v::array(v::string());
    let choice = v::string_enum(&opts.values);

    if opts.max_select == Some(1) {
        return plain_optional(required, view, choice);
    }

    let many = v::array(choice);
    let input = if !required && opts.max_select.is_none() {
        many
    } else {
        let mut parts = vec![many];
        if required {
            parts.push(v::min_length(1));
        }
        parts.extend(opts.max_select.map(v::max_length));
        v::pipe(parts)
    };

    plain_optional(required, view, input)
}

fn relation_schemas(required: bool, opts: &RelationOptions) -> FieldSchemas {
    if opts.is_multiple() {
        let base = v::pipe([v::array(v::string()), v::brand("RelationMultiple")]);
        return FieldSchemas::shared(optional_array(required, base));
    }

    text_optional(
        required,
        v::pipe([v::string(), v::length(15), v::brand("Relation")]),
    )
}

fn file_schemas(required: bool, opts: &FileOptions) -> FieldSchemas {
    let mut parts = vec![v::file()];
    if let Some(types) = &opts.mime_types {
        parts.push(v::mime_types(types));
    }
    if let Some(bytes) = opts.max_size {
        parts.push(v::max_size(bytes));
    }
    let per_file = v::pipe(parts);

    if opts.is_multiple() {
        return FieldSchemas::new(
            optional_array(required, v::array(v::file_name())),
            optional_array(required, v::array(per_file)),
        );
    }

    let view = if required {
        v::file()
    } else {
        v::optional_text_response(v::file_name())
    };
    FieldSchemas::new(view, optional_unless(required, per_file))
}
