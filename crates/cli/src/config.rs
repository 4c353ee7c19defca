//! `valigen.toml` loading.
//!
//! Relative paths in the file are resolved against the directory holding it,
//! so a config works the same no matter where `valigen` is invoked from.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use valigen_core::Templates;

use crate::error::CliError;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "valigen.toml";

/// Contents of `valigen.toml`. Command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Collection export to read.
    pub input: Option<PathBuf>,
    /// TypeScript file to write.
    pub output: Option<PathBuf>,
    /// `[templates]` table.
    #[serde(default)]
    pub templates: TemplatePaths,
}

/// Optional replacements for the built-in template blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatePaths {
    /// Replaces the file header and imports.
    pub preamble: Option<PathBuf>,
    /// Replaces the branded primitives and wrapper factories.
    pub helpers: Option<PathBuf>,
    /// Replaces the typed client helpers.
    pub tail: Option<PathBuf>,
}

impl Config {
    /// Load the config at `path`, or `./valigen.toml` when none is given.
    ///
    /// A missing default file yields an empty config; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if explicit {
                return Err(CliError::Config {
                    path,
                    message: "file not found".to_string(),
                });
            }
            debug!("No {DEFAULT_CONFIG_FILE} found, using defaults.");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|source| CliError::ReadInput {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|message| CliError::Config {
            path: path.clone(),
            message,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        debug!(config = %path.display(), "Loaded config.");
        Ok(config.resolve(base))
    }

    /// Parse config text without resolving paths.
    pub fn parse(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|err| err.to_string())
    }

    /// Join every relative path onto `base`.
    pub fn resolve(self, base: &Path) -> Self {
        let join = |p: Option<PathBuf>| p.map(|p| base.join(p));
        Self {
            input: join(self.input),
            output: join(self.output),
            templates: TemplatePaths {
                preamble: join(self.templates.preamble),
                helpers: join(self.templates.helpers),
                tail: join(self.templates.tail),
            },
        }
    }

    /// Built-in templates with any configured overrides applied.
    pub fn templates(&self) -> Result<Templates, CliError> {
        let mut templates = Templates::default();
        if let Some(path) = &self.templates.preamble {
            templates = templates.with_preamble(&read_template(path)?);
        }
        if let Some(path) = &self.templates.helpers {
            templates = templates.with_helpers(&read_template(path)?);
        }
        if let Some(path) = &self.templates.tail {
            templates = templates.with_tail(&read_template(path)?);
        }
        Ok(templates)
    }
}

fn read_template(path: &Path) -> Result<String, CliError> {
    debug!(template = %path.display(), "Reading template override.");
    fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
