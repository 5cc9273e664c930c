//! # tddgen
//!
//! A command-line scaffolding tool that generates boilerplate PHPUnit test
//! files (model, controller, migration and route tests) for Laravel-style
//! projects, using naming-convention transforms and literal `{{Token}}`
//! substitution into stub templates.
//!
//! ## Overview
//!
//! Given a subject name such as `Post` or `PostController`, the generator:
//!
//! 1. normalizes the name once into a canonical StudlyCaps form and derives
//!    the camel, snake, kebab and plural variants from it
//! 2. assembles a placeholder map for the requested artifact type, including
//!    synthesized example test-method bodies
//! 3. resolves the stub template, preferring a project-level override over
//!    the packaged default
//! 4. substitutes every placeholder token literally
//! 5. writes the result under `tests/Unit` or `tests/Feature`, creating
//!    missing directories and overwriting any existing file
//!
//! Everything is single-threaded and synchronous; a generation call either
//! completes or fails, and there is no rollback for files already written.
//!
//! ## Quick start
//!
//! ```bash
//! # One artifact
//! tddgen model Post
//!
//! # The full suite for a module
//! tddgen module Order
//!
//! # Only selected artifact types
//! tddgen module Order --model --routes
//! ```
//!
//! ## Programmatic usage
//!
//! ```rust,no_run
//! use tddgen::config::GeneratorConfig;
//! use tddgen::fsio::OsFilesystem;
//! use tddgen::generator::{ArtifactKind, GenerateOptions, TddGenerator};
//!
//! # fn main() -> Result<(), tddgen::GeneratorError> {
//! let config = GeneratorConfig::with_root("my-app");
//! let generator = TddGenerator::new(config, OsFilesystem);
//! let path = generator.generate(ArtifactKind::Model, "Post", &GenerateOptions::default())?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - **[`generator`]** - naming transforms, stub resolution, placeholder
//!   substitution and the generation facade
//! - **[`cli`]** - clap-based command-line layer, the sole error catch point
//! - **[`config`]** - explicit configuration struct, optionally merged from
//!   `tddgen.toml`
//! - **[`fsio`]** - narrow filesystem capability trait, mockable in tests
//! - **[`error`]** - the `InvalidName` / `TemplateNotFound` / `Filesystem`
//!   error taxonomy

pub mod cli;
pub mod config;
pub mod error;
pub mod fsio;
pub mod generator;

pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use fsio::{Filesystem, OsFilesystem};
pub use generator::{ArtifactKind, GenerateOptions, TddGenerator};
