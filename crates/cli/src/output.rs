//! Writing the generated file, or comparing it with what is on disk.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use console::style;
use similar::{ChangeTag, TextDiff};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::CliError;

/// Replace `path` with `contents` in one rename. Either the whole new file
/// is visible or the previous one is left untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;

    debug!(
        path = %path.display(),
        bytes = contents.len(),
        "Wrote generated file."
    );
    Ok(())
}

/// Compare `generated` with the file at `path`. A missing file counts as
/// empty. Prints a diff to stderr when they differ.
pub fn check(path: &Path, generated: &str) -> Result<(), CliError> {
    let existing = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(CliError::ReadOutput {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if existing == generated {
        return Ok(());
    }

    eprint!("{}", render_diff(&path.display().to_string(), &existing, generated));
    Err(CliError::OutOfDate {
        path: path.to_path_buf(),
    })
}

/// Unified diff of `current` against `new`, 3 lines of context.
pub fn render_diff(label: &str, current: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(current, new);
    let mut out = String::new();

    out.push_str(&format!("{}\n", style(format!("--- {label} (current)")).bold()));
    out.push_str(&format!("{}\n", style(format!("+++ {label} (generated)")).bold()));

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            out.push_str(&format!("{}\n", style("...").dim()));
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let line = change.value().trim_end_matches('\n');
                let rendered = match change.tag() {
                    ChangeTag::Delete => style(format!("-{line}")).red().to_string(),
                    ChangeTag::Insert => style(format!("+{line}")).green().to_string(),
                    ChangeTag::Equal => format!(" {line}"),
                };
                out.push_str(&rendered);
                out.push('\n');
            }
        }
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("src").join("lib").join("database.ts");

        write_atomic(&path, "export {};\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "export {};\n");

        write_atomic(&path, "export const a = 1;\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "export const a = 1;\n");

        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1, "temporary file left behind");
    }

    #[test]
    fn test_check_up_to_date() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.ts");
        fs::write(&path, "same\n").unwrap();
        assert!(check(&path, "same\n").is_ok());
    }

    #[test]
    fn test_check_out_of_date_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.ts");
        fs::write(&path, "old\n").unwrap();

        let err = check(&path, "new\n").unwrap_err();
        assert!(matches!(err, CliError::OutOfDate { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\n");
    }

    #[test]
    fn test_check_missing_file_is_out_of_date() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.ts");
        assert!(matches!(
            check(&path, "new\n"),
            Err(CliError::OutOfDate { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_check_unreadable_output_names_the_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.ts");
        fs::create_dir(&path).unwrap();

        let err = check(&path, "new\n").unwrap_err();
        assert!(matches!(err, CliError::ReadOutput { .. }));
        assert!(err.to_string().starts_with("Failed to read existing output"));
    }

    #[test]
    fn test_render_diff() {
        let diff = render_diff("database.ts", "a\nb\nc\n", "a\nB\nc\n");
        assert!(diff.contains("--- database.ts (current)"));
        assert!(diff.contains("+++ database.ts (generated)"));
        assert!(diff.contains("-b"));
        assert!(diff.contains("+B"));
        assert!(diff.contains(" a\n"));
    }
}
