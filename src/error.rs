//! Error taxonomy for the generation pipeline.
//!
//! Three things can go wrong: the subject name is unusable (`InvalidName`),
//! a stub template is missing at both lookup locations (`TemplateNotFound`),
//! or a directory/file operation fails (`Filesystem`). The generator never
//! catches any of these; they propagate to the CLI layer, which is the sole
//! catch point and maps every error to a printed message plus exit code 1.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the naming, template and generation layers.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The subject name normalized to an empty identifier.
    #[error("invalid subject name {0:?}: normalizes to an empty identifier")]
    InvalidName(String),

    /// No stub file exists at either the override or the default location.
    #[error("template {key:?} not found (searched {override_path:?} and {default_path:?})")]
    TemplateNotFound {
        /// Stub file name that was requested
        key: &'static str,
        /// Project-level override path that was checked first
        override_path: PathBuf,
        /// Packaged default path that was checked second
        default_path: PathBuf,
    },

    /// Directory creation, template read or file write failed.
    #[error("filesystem error at {path:?}: {source}")]
    Filesystem {
        /// Path the failed operation targeted
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GeneratorError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
