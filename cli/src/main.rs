/// opforge CLI
///
/// Provides subcommands for generating opcode handler text and checking
/// instruction-set descriptions.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use core_lib::{write_handlers, InstructionSet};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug output globally (for troubleshooting and development)
    #[arg(
        long,
        global = true,
        help = "Enable debug output globally (for troubleshooting and development)"
    )]
    debug: bool,
    /// Enable verbose output globally (for more detailed logs and diagnostics)
    #[arg(
        long,
        global = true,
        help = "Enable verbose output globally (for more detailed logs and diagnostics)"
    )]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate handler blocks from an instruction-set description
    Generate {
        /// Path to the Opcodes.json description
        #[arg(value_name = "OPCODES_JSON")]
        json_path: PathBuf,
        /// Write the generated text here instead of stdout
        #[arg(short, long, value_name = "OUT_PATH")]
        output: Option<PathBuf>,
    },
    /// Parse a description and report per-table entry counts
    Check {
        /// Path to the Opcodes.json description
        #[arg(value_name = "OPCODES_JSON")]
        json_path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.verbose);
    match &cli.command {
        Commands::Generate { json_path, output } => generate(json_path, output.as_deref()),
        Commands::Check { json_path } => check(json_path),
    }
}

/// Logs go to stderr so stdout stays a clean code stream.
fn init_tracing(debug: bool, verbose: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_set(json_path: &Path) -> anyhow::Result<InstructionSet> {
    if !json_path.exists() {
        anyhow::bail!("instruction table not found: {}", json_path.display());
    }
    InstructionSet::from_path(json_path).with_context(|| {
        format!(
            "failed to load instruction table from {}",
            json_path.display()
        )
    })
}

fn generate(json_path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let set = load_set(json_path)?;
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let summary = write_handlers(&set, &mut out)?;
            out.flush()?;
            info!(
                path = %path.display(),
                total = summary.total(),
                "handlers written"
            );
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_handlers(&set, &mut out)?;
        }
    }
    Ok(())
}

fn check(json_path: &Path) -> anyhow::Result<()> {
    let set = load_set(json_path)?;
    println!("unprefixed: {} entries", set.unprefixed.len());
    println!("cbprefixed: {} entries", set.cbprefixed.len());
    Ok(())
}
