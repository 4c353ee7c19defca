//! TypeScript identifier rules for generated property keys.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that cannot appear as bare property keys in the generated module.
///
/// Besides the JavaScript keywords this includes TypeScript contextual
/// keywords and primitive type names, which are legal as keys but confuse
/// readers and formatters.
pub static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // JS keywords
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "export",
        "extends",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // literals
        "null",
        "true",
        "false",
        // strict mode / future reserved
        "enum",
        "implements",
        "interface",
        "let",
        "package",
        "private",
        "protected",
        "public",
        "static",
        "await",
        // TypeScript contextual
        "type",
        "readonly",
        "abstract",
        "as",
        "asserts",
        "any",
        "unknown",
        "never",
        "boolean",
        "number",
        "string",
        "symbol",
        "bigint",
        "object",
        "keyof",
        "infer",
        "is",
        "namespace",
        "declare",
        "module",
        "global",
        "override",
        "require",
        "from",
        "of",
        "satisfies",
    ]
    .into_iter()
    .collect()
});

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Check whether `name` is a plain ASCII identifier (`[A-Za-z_$][A-Za-z0-9_$]*`).
pub fn is_valid_ts_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_part),
        _ => false,
    }
}

/// Quote `name` as a single-quoted string literal key.
pub fn quote_property_key(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
