//! Canonical collection model consumed by the emitters.
//!
//! This is the normalized form of the store's collection export: every
//! collection has exactly one [`CollectionKind`] and every field carries
//! exactly one [`FieldType`] with its kind-specific constraints. An absent
//! constraint (`None`) means unconstrained, which is distinct from an
//! explicit zero.

/// Collection flavour. Auth collections get password-aware create/update
/// wrappers; view and base collections share the plain wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Plain records.
    Base,
    /// Records that can authenticate (email, password, ...).
    Auth,
    /// Read-only records backed by a query.
    View,
}

/// A normalized collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDescriptor {
    /// Stable identity, referenced by relation fields.
    pub id: String,
    /// Collection flavour.
    pub kind: CollectionKind,
    /// Name as stored, e.g. `"blog_posts"`.
    pub name: String,
    /// Created and managed by the store (`_mfas`, `_otps`, ...).
    pub system: bool,
    /// API access rules.
    pub rules: AccessRules,
    /// Fields in export order.
    pub fields: Vec<FieldDescriptor>,
}

/// API access rules. `None` means the action is restricted to superusers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessRules {
    /// Listing records.
    pub list: Option<String>,
    /// Viewing one record.
    pub view: Option<String>,
    /// Creating records.
    pub create: Option<String>,
    /// Updating records.
    pub update: Option<String>,
    /// Deleting records.
    pub delete: Option<String>,
}

/// A normalized field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Stable identity within the collection.
    pub id: String,
    /// Property name in records.
    pub name: String,
    /// Kind and constraints.
    pub field_type: FieldType,
    /// Managed by the store.
    pub system: bool,
    /// Never returned by the API; skipped by the emitters.
    pub hidden: bool,
    /// Explicit `required` flag, or implied by a positive text minimum.
    pub required: bool,
}

/// Field kind together with its constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Plain string with optional length and pattern constraints.
    Text(TextOptions),
    /// Float or integer with optional bounds.
    Number(NumberOptions),
    /// `true` / `false`.
    Bool,
    /// Email address.
    Email,
    /// URL with optional domain restrictions.
    Url(UrlOptions),
    /// Date-time string.
    Date,
    /// Date-time set by the store on create and/or update.
    AutoDate,
    /// Arbitrary JSON value.
    Json,
    /// Rich text (HTML string).
    Editor,
    /// `{ lon, lat }` coordinates.
    GeoPoint,
    /// One or more values from a fixed list.
    Select(SelectOptions),
    /// Reference(s) to records of another collection.
    Relation(RelationOptions),
    /// Uploaded file name(s).
    File(FileOptions),
    /// A kind this generator does not know about; keeps the raw kind name.
    Unknown(String),
}

impl FieldType {
    /// The store's name for this kind (`"text"`, `"geoPoint"`, ...).
    pub fn kind_name(&self) -> &str {
        match self {
            FieldType::Text(_) => "text",
            FieldType::Number(_) => "number",
            FieldType::Bool => "bool",
            FieldType::Email => "email",
            FieldType::Url(_) => "url",
            FieldType::Date => "date",
            FieldType::AutoDate => "autodate",
            FieldType::Json => "json",
            FieldType::Editor => "editor",
            FieldType::GeoPoint => "geoPoint",
            FieldType::Select(_) => "select",
            FieldType::Relation(_) => "relation",
            FieldType::File(_) => "file",
            FieldType::Unknown(kind) => kind,
        }
    }
}

/// Text constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Minimum length in characters.
    pub min: Option<u64>,
    /// Maximum length in characters.
    pub max: Option<u64>,
    /// Regex the value must match.
    pub pattern: Option<String>,
}

impl TextOptions {
    /// True when no length or pattern constraint is set.
    pub fn is_unconstrained(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.pattern.is_none()
    }
}

/// Number constraints. Zero is a real bound here, unlike text lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberOptions {
    /// Smallest accepted value.
    pub min: Option<f64>,
    /// Largest accepted value.
    pub max: Option<f64>,
    /// Reject non-integers.
    pub only_integer: bool,
}

/// Select constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    /// Allowed values in declaration order.
    pub values: Vec<String>,
    /// More than one means the value is an array.
    pub max_select: Option<u64>,
}

/// Relation target and cardinality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationOptions {
    /// Id of the target collection.
    pub collection_id: Option<String>,
    /// Maximum number of related records.
    pub max_select: Option<u64>,
}

impl RelationOptions {
    /// Anything other than an explicit single selection is a multi relation.
    pub fn is_multiple(&self) -> bool {
        self.max_select != Some(1)
    }
}

/// File constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOptions {
    /// Maximum size per file in bytes.
    pub max_size: Option<i64>,
    /// Accepted MIME types.
    pub mime_types: Option<Vec<String>>,
    /// Maximum number of files.
    pub max_select: Option<u64>,
}

impl FileOptions {
    /// Anything other than an explicit single selection is a multi file field.
    pub fn is_multiple(&self) -> bool {
        self.max_select != Some(1)
    }
}

/// URL domain restrictions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlOptions {
    /// Only these domains are accepted.
    pub only_domains: Option<Vec<String>>,
    /// These domains are rejected.
    pub except_domains: Option<Vec<String>>,
}
