use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use asmvm::assemble_file;

#[derive(Parser, Debug)]
#[command(author, version, about = "AsmVm assembler + interpreter")]
struct Opts {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a text program into 5-byte little-endian records
    Assemble {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
    /// Execute an assembled binary (not implemented yet)
    Run {
        #[arg(value_name = "BINFILE")]
        input: PathBuf,
        /// Memory dump destination (CSV)
        #[arg(value_name = "DUMP")]
        dump: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    match opts.cmd {
        Command::Assemble { input, output } => {
            let summary = assemble_file(&input, &output)?;
            println!(
                "Assembled {} instructions to {}",
                summary.instructions,
                output.display()
            );
        }
        Command::Run { input, .. } => {
            bail!("run {}: execution engine is not implemented", input.display());
        }
    }
    Ok(())
}
