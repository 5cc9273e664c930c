//! Generator facade: orchestrates naming, template resolution, substitution
//! and the final file write.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::fsio::Filesystem;

use super::builders::{self, ArtifactKind};
use super::naming::SubjectName;
use super::templates::{substitute, TemplateStore};

/// Per-invocation generation options.
///
/// If none of the four artifact flags is set, all four artifact types are
/// treated as enabled. `force` is accepted for CLI compatibility but writes
/// always overwrite the destination file.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Generate the model test
    pub model: bool,
    /// Generate the controller test
    pub controller: bool,
    /// Generate the migration test
    pub migration: bool,
    /// Generate the route test
    pub routes: bool,
    /// Overwrite flag carried from the CLI
    pub force: bool,
}

impl GenerateOptions {
    /// Options with all four artifact types enabled.
    pub fn all() -> Self {
        Self {
            model: true,
            controller: true,
            migration: true,
            routes: true,
            force: false,
        }
    }

    fn any_artifact_selected(&self) -> bool {
        self.model || self.controller || self.migration || self.routes
    }

    /// Whether an artifact kind is enabled under the default-all policy.
    pub fn enabled(&self, kind: ArtifactKind) -> bool {
        if !self.any_artifact_selected() {
            return true;
        }
        match kind {
            ArtifactKind::Model => self.model,
            ArtifactKind::Controller => self.controller,
            ArtifactKind::Migration => self.migration,
            ArtifactKind::Routes => self.routes,
        }
    }
}

/// Test-scaffolding generator.
///
/// Holds the configuration, the template store and the filesystem capability.
/// Every generation call is synchronous and either completes or fails; there
/// is no rollback for files already written.
pub struct TddGenerator<F: Filesystem> {
    config: GeneratorConfig,
    store: TemplateStore,
    fs: F,
}

impl<F: Filesystem> TddGenerator<F> {
    /// Build a generator from a configuration and a filesystem capability.
    pub fn new(config: GeneratorConfig, fs: F) -> Self {
        let store = TemplateStore::new(
            config.override_stub_dir(),
            config.default_stub_dir.clone(),
        );
        Self { config, store, fs }
    }

    /// Generate one artifact test file and return the written path.
    ///
    /// Pipeline: normalize the subject name, build the placeholder map,
    /// resolve the stub, substitute, ensure the destination directory exists
    /// and write the file, overwriting any previous content.
    ///
    /// # Errors
    ///
    /// `InvalidName` for an empty subject, `TemplateNotFound` if the stub is
    /// missing at both locations, `Filesystem` for directory or write errors.
    pub fn generate(
        &self,
        kind: ArtifactKind,
        subject: &str,
        options: &GenerateOptions,
    ) -> Result<PathBuf, GeneratorError> {
        let subject = SubjectName::new(subject)?;
        let namespace = self.config.namespace(kind.category());
        let built = builders::build(kind, &subject, &namespace);
        let template = self.store.resolve(&self.fs, kind)?;
        let content = substitute(&template, &built.replacements);

        let dir = self.config.destination_dir(kind.category());
        self.fs
            .create_dir_all(&dir)
            .map_err(|e| GeneratorError::fs(&dir, e))?;
        let path = dir.join(&built.file_name);
        self.fs
            .write_text(&path, &content)
            .map_err(|e| GeneratorError::fs(&path, e))?;

        debug!(
            kind = kind.label(),
            subject = %subject,
            force = options.force,
            path = %path.display(),
            "generated test file"
        );
        println!("✅ Generated {} test → {}", kind.label(), path.display());
        Ok(path)
    }

    /// Generate a model test under the unit destination.
    pub fn generate_model_test(
        &self,
        name: &str,
        options: &GenerateOptions,
    ) -> Result<PathBuf, GeneratorError> {
        self.generate(ArtifactKind::Model, name, options)
    }

    /// Generate a controller test under the feature destination.
    pub fn generate_controller_test(
        &self,
        name: &str,
        options: &GenerateOptions,
    ) -> Result<PathBuf, GeneratorError> {
        self.generate(ArtifactKind::Controller, name, options)
    }

    /// Generate a migration test under the unit destination.
    pub fn generate_migration_test(
        &self,
        name: &str,
        options: &GenerateOptions,
    ) -> Result<PathBuf, GeneratorError> {
        self.generate(ArtifactKind::Migration, name, options)
    }

    /// Generate a route test under the feature destination.
    pub fn generate_route_test(
        &self,
        name: &str,
        options: &GenerateOptions,
    ) -> Result<PathBuf, GeneratorError> {
        self.generate(ArtifactKind::Routes, name, options)
    }

    /// Generate every enabled artifact type for one module, in the fixed
    /// order model, controller, migration, routes.
    ///
    /// Returns a map from artifact kind to written path; skipped kinds are
    /// absent. The first failure aborts the remaining kinds and files already
    /// written stay on disk.
    ///
    /// # Errors
    ///
    /// Propagates the first error from any single-artifact generation.
    pub fn generate_module(
        &self,
        name: &str,
        options: &GenerateOptions,
    ) -> Result<BTreeMap<ArtifactKind, PathBuf>, GeneratorError> {
        let mut results = BTreeMap::new();
        for kind in ArtifactKind::ALL {
            if options.enabled(kind) {
                let path = self.generate(kind, name, options)?;
                results.insert(kind, path);
            }
        }
        Ok(results)
    }
}
