//! Stub template resolution and placeholder substitution.
//!
//! Stubs are plain text files containing `{{Token}}` placeholders. The store
//! re-reads them on every call so an edited override takes effect
//! immediately; nothing is cached.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::GeneratorError;
use crate::fsio::Filesystem;

use super::builders::ArtifactKind;

/// Resolves stub templates, preferring a project-level override over the
/// packaged default.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    override_dir: PathBuf,
    default_dir: PathBuf,
}

impl TemplateStore {
    /// Store looking in `override_dir` first, then `default_dir`.
    pub fn new(override_dir: PathBuf, default_dir: PathBuf) -> Self {
        Self {
            override_dir,
            default_dir,
        }
    }

    /// Resolve the stub body for an artifact kind.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::TemplateNotFound`] if neither location has
    /// the stub file, or [`GeneratorError::Filesystem`] if a read fails.
    pub fn resolve<F: Filesystem>(
        &self,
        fs: &F,
        kind: ArtifactKind,
    ) -> Result<String, GeneratorError> {
        let name = kind.stub_name();
        let override_path = self.override_dir.join(name);
        if fs.exists(&override_path) {
            return fs
                .read_text(&override_path)
                .map_err(|e| GeneratorError::fs(override_path, e));
        }
        let default_path = self.default_dir.join(name);
        if fs.exists(&default_path) {
            return fs
                .read_text(&default_path)
                .map_err(|e| GeneratorError::fs(default_path, e));
        }
        Err(GeneratorError::TemplateNotFound {
            key: name,
            override_path,
            default_path,
        })
    }
}

/// Replace every occurrence of each placeholder token with its value.
///
/// Replacement is literal and non-recursive. No value may itself contain a
/// placeholder token; the content builders uphold this, which keeps the
/// result independent of replacement order. Tokens present in the template
/// but absent from the map are left verbatim; that surfaces as a visibly
/// malformed generated file rather than an error at this layer.
pub fn substitute(template: &str, replacements: &BTreeMap<String, String>) -> String {
    let mut out = template.to_string();
    for (token, value) in replacements {
        out = out.replace(token.as_str(), value);
    }
    out
}
