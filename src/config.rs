//! Generator configuration.
//!
//! Settings live in an explicit [`GeneratorConfig`] struct that is passed to
//! the generator at construction time; there is no ambient global lookup.
//! A `tddgen.toml` file in the project root may override individual keys and
//! is merged over the defaults once at startup.
//!
//! ## Recognized keys and defaults
//!
//! | Key                | Default         | Meaning                                    |
//! |--------------------|-----------------|--------------------------------------------|
//! | `stub_dir`         | `stubs/tddgen`  | Stub override directory (under the root)   |
//! | `unit_test_dir`    | `tests/Unit`    | Destination for model and migration tests  |
//! | `feature_test_dir` | `tests/Feature` | Destination for controller and route tests |
//! | `namespace_root`   | `Tests`         | Root namespace of generated test classes   |
//!
//! ## Example `tddgen.toml`
//!
//! ```toml
//! stub_dir = "resources/stubs"
//! namespace_root = "App\\Tests"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::generator::Category;

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "tddgen.toml";

/// Configuration passed to [`crate::generator::TddGenerator`] at construction.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Project root that all generated paths are resolved against.
    pub project_root: PathBuf,
    /// Stub override directory, relative to the project root.
    pub stub_dir: PathBuf,
    /// Destination for unit-category tests (model, migration).
    pub unit_test_dir: PathBuf,
    /// Destination for feature-category tests (controller, routes).
    pub feature_test_dir: PathBuf,
    /// Root namespace for generated test classes.
    pub namespace_root: String,
    /// Directory holding the packaged default stubs.
    pub default_stub_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            stub_dir: PathBuf::from("stubs/tddgen"),
            unit_test_dir: PathBuf::from("tests/Unit"),
            feature_test_dir: PathBuf::from("tests/Feature"),
            namespace_root: "Tests".to_string(),
            default_stub_dir: packaged_stub_dir(),
        }
    }
}

/// Raw shape of `tddgen.toml`; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    stub_dir: Option<PathBuf>,
    unit_test_dir: Option<PathBuf>,
    feature_test_dir: Option<PathBuf>,
    namespace_root: Option<String>,
}

impl GeneratorConfig {
    /// Configuration with defaults, rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: root.into(),
            ..Self::default()
        }
    }

    /// Load configuration for a project root, merging `tddgen.toml` over the
    /// defaults if the file exists. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let mut config = Self::with_root(root);
        let config_path = root.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(config);
        }
        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let file: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;
        if let Some(stub_dir) = file.stub_dir {
            config.stub_dir = stub_dir;
        }
        if let Some(unit_test_dir) = file.unit_test_dir {
            config.unit_test_dir = unit_test_dir;
        }
        if let Some(feature_test_dir) = file.feature_test_dir {
            config.feature_test_dir = feature_test_dir;
        }
        if let Some(namespace_root) = file.namespace_root {
            config.namespace_root = namespace_root;
        }
        Ok(config)
    }

    /// Stub override directory resolved against the project root.
    pub fn override_stub_dir(&self) -> PathBuf {
        self.project_root.join(&self.stub_dir)
    }

    /// Destination directory for a test category, resolved against the root.
    pub fn destination_dir(&self, category: Category) -> PathBuf {
        match category {
            Category::Unit => self.project_root.join(&self.unit_test_dir),
            Category::Feature => self.project_root.join(&self.feature_test_dir),
        }
    }

    /// Namespace for generated classes of a category, e.g. `Tests\Unit`.
    pub fn namespace(&self, category: Category) -> String {
        format!("{}\\{}", self.namespace_root, category.segment())
    }
}

/// Location of the stubs shipped with the crate.
fn packaged_stub_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("stubs")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.stub_dir, PathBuf::from("stubs/tddgen"));
        assert_eq!(config.unit_test_dir, PathBuf::from("tests/Unit"));
        assert_eq!(config.feature_test_dir, PathBuf::from("tests/Feature"));
        assert_eq!(config.namespace_root, "Tests");
    }

    #[test]
    fn test_namespace_per_category() {
        let config = GeneratorConfig::default();
        assert_eq!(config.namespace(Category::Unit), "Tests\\Unit");
        assert_eq!(config.namespace(Category::Feature), "Tests\\Feature");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::load(dir.path()).unwrap();
        assert_eq!(config.project_root, dir.path());
        assert_eq!(config.namespace_root, "Tests");
    }

    #[test]
    fn test_load_merges_file_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "stub_dir = \"resources/stubs\"\nnamespace_root = \"App\\\\Tests\"\n",
        )
        .unwrap();
        let config = GeneratorConfig::load(dir.path()).unwrap();
        assert_eq!(config.stub_dir, PathBuf::from("resources/stubs"));
        assert_eq!(config.namespace_root, "App\\Tests");
        // untouched keys keep their defaults
        assert_eq!(config.unit_test_dir, PathBuf::from("tests/Unit"));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "stub_dir = [").unwrap();
        assert!(GeneratorConfig::load(dir.path()).is_err());
    }
}
