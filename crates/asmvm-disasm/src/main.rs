use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use asmvm_disasm::{listing, load_records};

#[derive(Parser, Debug)]
#[command(author, version, about = "AsmVm record disassembler", long_about = None)]
struct Cli {
    /// Input binary path (5-byte records)
    #[arg(value_name = "BINFILE")]
    input: PathBuf,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Show record bytes (text format only)
    #[arg(long)]
    show_bytes: bool,
    /// Show field names (text format only)
    #[arg(long)]
    fields: bool,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let words = load_records(&cli.input)?;
    tracing::debug!(records = words.len(), "loaded");
    let entries = listing(&words);

    let buf = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&entries)?,
        OutputFormat::Text => {
            let mut buf = String::new();
            for e in &entries {
                let _ = write!(buf, "{:#06x}: ", e.offset);
                if cli.show_bytes {
                    for b in e.bytes {
                        let _ = write!(buf, "{b:02x} ");
                    }
                    buf.push(' ');
                }
                let text = if cli.fields { &e.fields } else { &e.text };
                match text {
                    Some(t) => {
                        let _ = writeln!(buf, "{t}");
                    }
                    None => {
                        let _ = writeln!(buf, ".record {}", e.word);
                    }
                }
            }
            buf
        }
    };
    if let Some(path) = cli.out {
        std::fs::write(path, buf)?;
    } else {
        print!("{buf}");
    }
    Ok(())
}
