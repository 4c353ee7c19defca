//! Literal formatting helpers shared by the builders.

/// Escape backslashes and double quotes for a double-quoted string literal.
pub fn escape_double_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render `s` as a single-quoted string literal.
pub fn quote_single(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n");
    format!("'{escaped}'")
}

/// Comma-joined single-quoted literals: `'a', 'b'`.
pub fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| quote_single(v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Shortest round-trip rendering of a numeric bound (`5`, `2.5`, `-1`).
pub fn format_number(n: f64) -> String {
    n.to_string()
}

/// Escape unescaped `/` so a pattern can sit inside a regex literal.
pub fn escape_regex_delimiters(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    for c in pattern.chars() {
        if c == '/' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    out
}

/// Human label for a list of MIME types: the upper-cased subtype of each
/// entry (or the whole entry when it has no `/`), joined with " or ".
pub fn mime_label(types: &[String]) -> String {
    types
        .iter()
        .map(|t| match t.split_once('/') {
            Some((_, subtype)) => subtype.to_uppercase(),
            None => t.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(" or ")
}

const SIZE_UNITS: [&str; 6] = ["bytes", "KB", "MB", "GB", "TB", "PB"];

/// Express a byte count as a product of 1024s plus a human label.
///
/// Uses the largest unit that divides `bytes` exactly:
/// `10485760` -> `("1024 * 1024 * 10", "10 MB")`, `1048576` -> `("1024 * 1024", "1 MB")`.
/// Non-positive sizes yield `("0", "0 bytes")`.
pub fn size_expression(bytes: i64) -> (String, String) {
    if bytes <= 0 {
        return ("0".to_string(), "0 bytes".to_string());
    }

    let mut pow = 0;
    let mut size: i64 = 1;
    while pow + 1 < SIZE_UNITS.len() {
        match size.checked_mul(1024) {
            Some(next) if bytes % next == 0 => {
                size = next;
                pow += 1;
            }
            _ => break,
        }
    }

    let value = bytes / size;

    let mut parts = vec!["1024".to_string(); pow];
    if pow == 0 || value != 1 {
        parts.push(value.to_string());
    }
    let expr = parts.join(" * ");

    let label = match (pow, value) {
        (0, 1) => "1 byte".to_string(),
        (0, n) => format!("{n} bytes"),
        (p, n) => format!("{n} {}", SIZE_UNITS[p]),
    };

    (expr, label)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_size_expression() {
        assert_eq!(
            size_expression(10 * 1024 * 1024),
            ("1024 * 1024 * 10".to_string(), "10 MB".to_string())
        );
        assert_eq!(
            size_expression(1024 * 1024),
            ("1024 * 1024".to_string(), "1 MB".to_string())
        );
        assert_eq!(size_expression(0), ("0".to_string(), "0 bytes".to_string()));
        assert_eq!(size_expression(-5), ("0".to_string(), "0 bytes".to_string()));
        assert_eq!(size_expression(1), ("1".to_string(), "1 byte".to_string()));
        assert_eq!(size_expression(1000), ("1000".to_string(), "1000 bytes".to_string()));
        assert_eq!(
            size_expression(1536 * 1024),
            ("1024 * 1536".to_string(), "1536 KB".to_string())
        );
        assert_eq!(
            size_expression(2 * 1024_i64.pow(5)),
            ("1024 * 1024 * 1024 * 1024 * 1024 * 2".to_string(), "2 PB".to_string())
        );
    }

    #[test]
    fn test_size_expression_stops_at_petabytes() {
        let (expr, label) = size_expression(1024_i64.pow(6));
        assert_eq!(label, "1024 PB");
        assert_eq!(expr, "1024 * 1024 * 1024 * 1024 * 1024 * 1024");
    }

    #[test]
    fn test_mime_label() {
        let types = vec![
            "image/jpeg".to_string(),
            "image/svg+xml".to_string(),
            "pdf".to_string(),
        ];
        assert_eq!(mime_label(&types), "JPEG or SVG+XML or PDF");
    }

    #[test]
    fn test_quoted_list() {
        let values = vec!["Due".to_string(), "Won't do".to_string()];
        assert_eq!(quoted_list(&values), "'Due', 'Won\\'t do'");
        assert_eq!(quoted_list(&[]), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-1.0), "-1");
    }

    #[test]
    fn test_escape_regex_delimiters() {
        assert_eq!(escape_regex_delimiters("^[\\w][\\w\\.\\-]*$"), "^[\\w][\\w\\.\\-]*$");
        assert_eq!(escape_regex_delimiters("a/b"), "a\\/b");
        assert_eq!(escape_regex_delimiters("a\\/b"), "a\\/b");
    }
}
