mod check;
mod generate;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use protots_ir::SchemaFile;
use protots_manifest::Manifest;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for protots_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the manifest and every schema file it lists, exiting with a
/// diagnostic on failure.
pub(crate) fn load(config: &Path) -> (Manifest, Vec<SchemaFile>) {
    let manifest = Manifest::from_file(config).unwrap_or_exit();
    let schemas = manifest.load_schemas().unwrap_or_exit();
    tracing::debug!(
        config = %config.display(),
        schemas = schemas.len(),
        "loaded manifest"
    );
    (manifest, schemas)
}

#[derive(Parser)]
#[command(name = "protots")]
#[command(version)]
#[command(about = "Generate TypeScript classes and service clients from schema definitions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript from the schema files in protots.toml
    Generate(GenerateCommand),

    /// Verify that every referenced type is declared, without writing files
    Check(CheckCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "protots", "generate", "-c", "api/protots.toml", "-o", "web/src", "--dry-run",
        ])
        .unwrap();
        let Commands::Generate(cmd) = cli.command else {
            panic!("Expected generate");
        };
        assert_eq!(cmd.config, Path::new("api/protots.toml"));
        assert_eq!(cmd.output.as_deref(), Some(Path::new("web/src")));
        assert!(cmd.dry_run);
    }

    #[test]
    fn test_check_defaults() {
        let cli = Cli::try_parse_from(["protots", "check"]).unwrap();
        let Commands::Check(cmd) = cli.command else {
            panic!("Expected check");
        };
        assert_eq!(cmd.config, Path::new("protots.toml"));
    }
}
