use super::*;

use crate::provider::{Config, Provider};
use crate::workspace::Workspace;
use std::io::Write;
use std::path::Path;

pub mod report;

/// Takes no arguments. The cluster and wallet come from `ANCHOR_PROVIDER_URL`
/// and `ANCHOR_WALLET`, the workspace from the current directory.
#[derive(Debug, clap::Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
#[clap(about = "Print the wallet address and SOL balance of the configured Anchor provider")]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> Result {
        let config = Config::from_env();
        let start = std::env::current_dir()?;
        run_with(&config, &start, &mut std::io::stdout()).await
    }
}

/// Provider, then program, then balance. Nothing is written to `out` until
/// the first two have succeeded.
pub async fn run_with<W: Write>(config: &Config, start: &Path, out: &mut W) -> Result {
    let provider = Provider::new(config)?;
    let workspace = Workspace::discover(start)?;
    let program = workspace.program(DEFAULT_PROGRAM, &provider)?;
    let idl = program.idl();
    tracing::info!(
        workspace = %workspace.root().display(),
        program = program.name().unwrap_or(DEFAULT_PROGRAM),
        version = idl.program_version().unwrap_or("unknown"),
        id = %program.id(),
        instructions = ?idl.instruction_names(),
        accounts = idl.accounts.len(),
        errors = idl.errors.len(),
        "resolved program"
    );

    let provider = program.provider();
    report::report(out, &provider.public_key(), provider.connection()).await
}
