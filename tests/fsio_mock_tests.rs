//! Exercises the generator against a mock filesystem, proving the pipeline
//! only needs the narrow `Filesystem` capability.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use tddgen::config::GeneratorConfig;
use tddgen::fsio::Filesystem;
use tddgen::generator::{ArtifactKind, GenerateOptions, TddGenerator};
use tddgen::GeneratorError;

#[derive(Default)]
struct MemoryFilesystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFilesystem {
    fn seed(&self, path: PathBuf, contents: &str) {
        self.files.borrow_mut().insert(path, contents.to_string());
    }

    fn file(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.file(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// Borrowing adapter so a test can inspect the mock after the generator
/// took its filesystem by value.
struct Shared<'a>(&'a MemoryFilesystem);

impl Filesystem for Shared<'_> {
    fn exists(&self, path: &Path) -> bool {
        self.0.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.0.create_dir_all(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.0.read_text(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.0.write_text(path, contents)
    }
}

/// Filesystem whose writes always fail, for the error path.
struct ReadOnlyFilesystem(MemoryFilesystem);

impl Filesystem for ReadOnlyFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.0.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.0.create_dir_all(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.0.read_text(path)
    }

    fn write_text(&self, _path: &Path, _contents: &str) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only filesystem",
        ))
    }
}

fn config() -> GeneratorConfig {
    GeneratorConfig::with_root("/project")
}

fn seed_model_stub(fs: &MemoryFilesystem, config: &GeneratorConfig) {
    fs.seed(
        config.default_stub_dir.join("model.test.stub"),
        "class {{ModelName}}Test on {{table_name}}\n",
    );
}

#[test]
fn test_generate_against_memory_filesystem() {
    let fs = MemoryFilesystem::default();
    let config = config();
    seed_model_stub(&fs, &config);

    let generator = TddGenerator::new(config, Shared(&fs));
    let path = generator
        .generate(ArtifactKind::Model, "Post", &GenerateOptions::default())
        .unwrap();

    assert_eq!(path, PathBuf::from("/project/tests/Unit/PostTest.php"));
    let written = fs.file(&path).unwrap();
    assert_eq!(written, "class PostTest on posts\n");
}

#[test]
fn test_write_failure_surfaces_as_filesystem_error() {
    let inner = MemoryFilesystem::default();
    let config = config();
    seed_model_stub(&inner, &config);

    let generator = TddGenerator::new(config, ReadOnlyFilesystem(inner));
    let err = generator
        .generate(ArtifactKind::Model, "Post", &GenerateOptions::default())
        .unwrap_err();

    match err {
        GeneratorError::Filesystem { path, source } => {
            assert_eq!(path, PathBuf::from("/project/tests/Unit/PostTest.php"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected Filesystem error, got {other}"),
    }
}

#[test]
fn test_module_failure_keeps_earlier_artifacts() {
    // No rollback: a missing controller stub aborts the run, but the model
    // test written before it stays.
    let fs = MemoryFilesystem::default();
    let config = config();
    seed_model_stub(&fs, &config);

    let generator = TddGenerator::new(config, Shared(&fs));
    let err = generator
        .generate_module("Post", &GenerateOptions::default())
        .unwrap_err();

    assert!(matches!(
        err,
        GeneratorError::TemplateNotFound { key, .. } if key == "controller.test.stub"
    ));
    assert!(fs
        .file(Path::new("/project/tests/Unit/PostTest.php"))
        .is_some());
}
