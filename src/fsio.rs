//! Narrow filesystem capability used by the template store and the generator.
//!
//! Only four operations are needed (existence checks, recursive directory
//! creation, text reads and text writes), so the trait stays small and is
//! trivially mockable in tests. Production code uses [`OsFilesystem`], a thin
//! passthrough to `std::fs`.

use std::fs;
use std::io;
use std::path::Path;

/// Minimal filesystem surface required by the generation pipeline.
pub trait Filesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read a file into a UTF-8 string.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Write a string to a file, replacing any existing content.
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Production implementation backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
