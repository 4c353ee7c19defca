//! Indent-aware incremental TypeScript buffer.

/// Text buffer that prefixes each written line with the current indentation
/// (2 spaces per level).
#[derive(Debug, Default)]
pub struct TsWriter {
    buf: String,
    indent: usize,
}

impl TsWriter {
    /// Empty buffer at indentation level 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text verbatim, without indentation or newline.
    pub fn write(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Append one indented line. Empty lines carry no indentation.
    pub fn line(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.indent {
                self.buf.push_str("  ");
            }
            self.buf.push_str(line);
        }
        self.buf.push('\n');
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Indent subsequent lines one more level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Undo one [`TsWriter::indent`]; stops at level 0.
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// The accumulated text.
    pub fn finish(self) -> String {
        self.buf
    }
}
