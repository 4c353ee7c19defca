//! Fixed TypeScript blocks surrounding the generated sections.

const PREAMBLE: &str = include_str!("../templates/preamble.ts");
const HELPERS: &str = include_str!("../templates/helpers.ts");
const TAIL: &str = include_str!("../templates/tail.ts");

/// The three opaque blocks of the output file.
///
/// - `preamble`: file header and imports, written first
/// - `helpers`: branded primitives and wrapper functions, written after the
///   `Collections` map (it refers to `CollectionName`)
/// - `tail`: typed client helpers, written after the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    /// File header and imports.
    pub preamble: String,
    /// Branded primitives and create/update wrapper factories.
    pub helpers: String,
    /// Typed client helpers.
    pub tail: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            preamble: normalize(PREAMBLE),
            helpers: normalize(HELPERS),
            tail: normalize(TAIL),
        }
    }
}

impl Templates {
    /// Replace the preamble.
    pub fn with_preamble(mut self, text: &str) -> Self {
        self.preamble = normalize(text);
        self
    }

    /// Replace the helpers block.
    pub fn with_helpers(mut self, text: &str) -> Self {
        self.helpers = normalize(text);
        self
    }

    /// Replace the tail.
    pub fn with_tail(mut self, text: &str) -> Self {
        self.tail = normalize(text);
        self
    }
}

/// CRLF to LF, and a trailing newline on non-empty text.
pub fn normalize(text: &str) -> String {
    let mut out = text.replace("\r\n", "\n");
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
