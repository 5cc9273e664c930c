//! # Generator Module
//!
//! The generator module turns a subject name into boilerplate PHPUnit test
//! files by literal token substitution into stub templates.
//!
//! ## Pipeline
//!
//! ```text
//! Subject Name → Naming Transforms → Placeholder Map → Stub Resolution → Substitution → File Write
//! ```
//!
//! 1. **Naming** - the raw identifier is normalized once into a canonical
//!    StudlyCaps [`SubjectName`]; camel, snake, kebab and plural forms derive
//!    from it.
//! 2. **Builders** - one builder per artifact type assembles the complete
//!    placeholder map, including the synthesized test-method bodies.
//! 3. **Templates** - the [`TemplateStore`] resolves a stub, preferring a
//!    project override over the packaged default, and [`substitute`] replaces
//!    every `{{Token}}` occurrence literally.
//! 4. **Facade** - [`TddGenerator`] computes the destination path, creates
//!    missing directories and writes the file, overwriting unconditionally.
//!
//! ## Generated files
//!
//! | Artifact   | Destination                              | Class            |
//! |------------|------------------------------------------|------------------|
//! | model      | `tests/Unit/{Model}Test.php`             | `{Model}Test`    |
//! | controller | `tests/Feature/{Controller}Test.php`     | `{Controller}Test` |
//! | migration  | `tests/Unit/{Table}MigrationTest.php`    | `{Table}MigrationTest` |
//! | routes     | `tests/Feature/{Resource}RouteTest.php`  | `{Resource}RouteTest` |
//!
//! ## Stub customization
//!
//! Stubs live in the crate's `stubs/` directory and can be overridden per
//! project by placing a file with the same name under `stubs/tddgen/`
//! (configurable via `tddgen.toml`):
//!
//! - `model.test.stub`
//! - `controller.test.stub`
//! - `migration.test.stub`
//! - `route.test.stub`
//!
//! Stubs are re-read on every generation call, so overrides take effect
//! immediately.

mod builders;
mod generate;
mod naming;
mod templates;


pub use builders::{build, ArtifactKind, BuiltArtifact, Category, RestAction};
pub use generate::{GenerateOptions, TddGenerator};
pub use naming::{
    pluralize, to_camel_case, to_kebab_case, to_snake_case, to_studly_case, SubjectName,
};
pub use templates::{substitute, TemplateStore};
