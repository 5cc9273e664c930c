//! # CLI Module
//!
//! Command-line interface for the tddgen test scaffolder.
//!
//! ## Commands
//!
//! ### `model`, `controller`, `migration`, `routes`
//!
//! Generate a single test file for a subject name:
//!
//! ```bash
//! tddgen model Post
//! tddgen controller PostController
//! tddgen migration post
//! tddgen routes Post
//! ```
//!
//! Each command takes one required positional name and an optional `--force`
//! flag.
//!
//! ### `module`
//!
//! Generate the full test suite for a module:
//!
//! ```bash
//! tddgen module Order
//! tddgen module Order --model --routes
//! tddgen module Order --all --force
//! ```
//!
//! With no type flags, all four artifact types are generated.
//!
//! ## Global options
//!
//! - `--root <DIR>` - project root the generated paths are resolved against
//! - `--stubs <DIR>` - stub override directory
//!
//! ## Exit codes
//!
//! The CLI is the sole catch point of the pipeline: 0 on success, 1 on any
//! error, with the error message printed to stderr.

mod commands;


pub use commands::{run_cli, run_command, Cli, Commands};
