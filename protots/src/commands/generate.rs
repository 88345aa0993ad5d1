use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to protots.toml (defaults to ./protots.toml)
    #[arg(short, long, default_value = "protots.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to the manifest's [output] dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (manifest, schemas) = super::load(&self.config);
        let mut out = TerminalOutput::new();

        if self.dry_run {
            ops::preview(&schemas)?.render(&mut out);
            return Ok(());
        }

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| manifest.output_dir());
        ops::generate(&schemas, &output_dir)?.render(&mut out);
        Ok(())
    }
}
