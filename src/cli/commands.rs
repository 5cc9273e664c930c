use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::fsio::OsFilesystem;
use crate::generator::{ArtifactKind, GenerateOptions, TddGenerator};

/// Command-line interface for tddgen
///
/// Provides one command per artifact type plus a composite `module` command
/// that scaffolds the full test suite for a module.
#[derive(Parser)]
#[command(name = "tddgen")]
#[command(about = "Scaffold PHPUnit test files for Laravel-style projects", long_about = None)]
pub struct Cli {
    /// Project root that generated paths are resolved against
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Stub override directory (default: <root>/stubs/tddgen)
    #[arg(long, global = true)]
    pub stubs: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for tddgen
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a model test under tests/Unit
    Model {
        /// Model name, e.g. Post
        name: String,

        /// Overwrite an existing test file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Generate a controller test under tests/Feature
    Controller {
        /// Controller name, e.g. PostController
        name: String,

        /// Overwrite an existing test file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Generate a migration test under tests/Unit
    Migration {
        /// Table or model name, e.g. post
        name: String,

        /// Overwrite an existing test file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Generate a route test under tests/Feature
    Routes {
        /// Resource name, e.g. Post
        name: String,

        /// Overwrite an existing test file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Generate the full test suite for a module
    ///
    /// With no type flags, all four artifact types are generated. Passing
    /// any type flag limits generation to the flagged types.
    Module {
        /// Module name, e.g. Order
        name: String,

        /// Generate the model test
        #[arg(long, default_value_t = false)]
        model: bool,

        /// Generate the controller test
        #[arg(long, default_value_t = false)]
        controller: bool,

        /// Generate the migration test
        #[arg(long, default_value_t = false)]
        migration: bool,

        /// Generate the route test
        #[arg(long, default_value_t = false)]
        routes: bool,

        /// Generate all four artifact types
        #[arg(long, default_value_t = false)]
        all: bool,

        /// Overwrite existing test files
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
}

/// Parse arguments from the process environment and execute the command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or any generation
/// step fails; the binary maps this to stderr output and exit code 1.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_command(&cli)
}

/// Execute an already-parsed CLI invocation.
///
/// # Errors
///
/// See [`run_cli`].
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::load(&cli.root)
        .with_context(|| format!("failed to load configuration under {}", cli.root.display()))?;
    if let Some(stubs) = &cli.stubs {
        config.stub_dir = stubs.clone();
    }
    let generator = TddGenerator::new(config, OsFilesystem);

    match &cli.command {
        Commands::Model { name, force } => {
            generate_single(&generator, ArtifactKind::Model, name, *force)
        }
        Commands::Controller { name, force } => {
            generate_single(&generator, ArtifactKind::Controller, name, *force)
        }
        Commands::Migration { name, force } => {
            generate_single(&generator, ArtifactKind::Migration, name, *force)
        }
        Commands::Routes { name, force } => {
            generate_single(&generator, ArtifactKind::Routes, name, *force)
        }
        Commands::Module {
            name,
            model,
            controller,
            migration,
            routes,
            all,
            force,
        } => {
            let options = if *all {
                GenerateOptions {
                    force: *force,
                    ..GenerateOptions::all()
                }
            } else {
                GenerateOptions {
                    model: *model,
                    controller: *controller,
                    migration: *migration,
                    routes: *routes,
                    force: *force,
                }
            };
            let results = generator.generate_module(name, &options)?;
            println!(
                "✅ Generated {} test file(s) for module {name}",
                results.len()
            );
            Ok(())
        }
    }
}

fn generate_single(
    generator: &TddGenerator<OsFilesystem>,
    kind: ArtifactKind,
    name: &str,
    force: bool,
) -> anyhow::Result<()> {
    let options = GenerateOptions {
        force,
        ..GenerateOptions::default()
    };
    generator.generate(kind, name, &options)?;
    Ok(())
}
