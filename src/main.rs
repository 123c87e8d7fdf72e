//! milvus-shell - a notebook-style shell for Milvus
//!
//! Main entry point for the CLI application.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use milvus_shell::kernel::KernelInfo;
use milvus_shell::{Config, Repl};
use tracing_subscriber::EnvFilter;

/// milvus-shell - administer Milvus collections, partitions and indexes
#[derive(Parser, Debug)]
#[command(name = "milvus-shell")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server to connect to on startup (host:port or user:password@host:port)
    #[arg(long, short = 'a')]
    address: Option<String>,

    /// Execute the given statements and exit
    #[arg(long, short = 'c', conflicts_with = "file")]
    command: Option<String>,

    /// Execute the statements in a file and exit
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Suppress statement output
    #[arg(long)]
    silent: bool,

    /// Print execute replies as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,

    /// Print kernel info as JSON and exit
    #[arg(long)]
    kernel_info: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref address) = args.address {
        config.milvus.default_address = Some(address.clone());
    }

    if args.debug {
        config.shell.debug = true;
    }

    let filter = if config.shell.debug {
        EnvFilter::new("milvus_shell=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.kernel_info {
        println!("{}", serde_json::to_string_pretty(&KernelInfo::default())?);
        return Ok(());
    }

    let mut repl = Repl::with_config(config)?;
    repl.set_json(args.json);
    repl.set_silent(args.silent);

    if let Err(e) = repl.connect_default().await {
        eprintln!("Warning: {}", e);
    }

    // One-shot mode
    let script = match (args.command, args.file) {
        (Some(command), _) => Some(command),
        (None, Some(path)) => Some(fs::read_to_string(&path)?),
        (None, None) => None,
    };

    if let Some(code) = script {
        let reply = repl.submit(&code).await?;
        if !reply.is_ok() {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Interactive REPL mode
    repl.run().await?;

    Ok(())
}
