//! Configuration error types.

use std::fmt;
use std::path::PathBuf;

use crate::format::ConfigFormat;

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicit config file not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No config file found while searching from the given directory upwards.
    #[error("No site configuration found in {} or any parent directory", .0.display())]
    NotDiscovered(PathBuf),
    /// File extension does not map to a supported format.
    #[error("Unsupported configuration format: {} (expected .toml, .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Syntax error reported by the format parser.
    #[error("{format} parse error: {message}")]
    Parse {
        /// Source format.
        format: ConfigFormat,
        /// Parser message, including position when the parser provides one.
        message: String,
    },
    /// Required field missing or field of the wrong shape.
    #[error("Malformed configuration at {field}: {message}")]
    Malformed {
        /// Field path (e.g., "`themeConfig.nav[1].text`").
        field: String,
        /// What is wrong with it.
        message: String,
    },
    /// Path-valued field with an invalid value.
    #[error("Invalid path in {field}: {value:?} {reason}")]
    InvalidPath {
        /// Field path (e.g., "base").
        field: String,
        /// Offending value.
        value: String,
        /// Rule that was broken.
        reason: &'static str,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "base").
        field: String,
        /// Error message (e.g., "${`SITE_BASE`} not set").
        message: String,
    },
    /// Sidebar or nav entries without a matching document.
    #[error("{}", DisplayReferences(.0))]
    DanglingReferences(Vec<DanglingReference>),
}

impl ConfigError {
    /// Build a [`ConfigError::Malformed`] for a field.
    pub(crate) fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build a [`ConfigError::InvalidPath`] for a field.
    pub(crate) fn invalid_path(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidPath {
            field: field.into(),
            value: value.into(),
            reason,
        }
    }

    /// Unresolved references, if this is a [`ConfigError::DanglingReferences`].
    #[must_use]
    pub fn dangling_references(&self) -> &[DanglingReference] {
        match self {
            Self::DanglingReferences(refs) => refs,
            _ => &[],
        }
    }
}

/// A sidebar child or internal nav link with no document behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Reference exactly as written in the configuration.
    pub path: String,
    /// Field the reference came from.
    pub field: String,
    /// Content-root relative files that were tried.
    pub candidates: Vec<PathBuf>,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.path, self.field)
    }
}

struct DisplayReferences<'a>(&'a [DanglingReference]);

impl fmt::Display for DisplayReferences<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} dangling reference(s): ", self.0.len())?;
        for (i, reference) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{reference}")?;
        }
        Ok(())
    }
}
