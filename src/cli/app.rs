//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use manifesto_corpus::output::OutputMode;

/// manifesto-corpus - Build a corpus of election manifestos
#[derive(Parser, Debug)]
#[command(
    name = "manifesto-corpus",
    version,
    about = "Build a corpus of election manifestos",
    long_about = "Scan a <TYPE>/<YYYY-MM>/<file>.pdf tree of election manifestos.\n\n\
                  Filenames name the parties (joined with '+') and tags ('#Short').\n\
                  Each party gets one program per election; conflicts are reported."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Config file to write (defaults to the user config dir)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Scan a data tree, build the corpus and extract text
    Ingest {
        /// Root of the data tree
        root: PathBuf,

        /// Config file (defaults to the user config dir)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only build the corpus; skip text extraction
        #[arg(long)]
        no_extract: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force, config }) => commands::init(config, force, output_mode),
        Some(Command::Ingest { root, config, no_extract }) => {
            commands::ingest(&root, config, no_extract, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("manifesto-corpus v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("manifesto-corpus v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'manifesto-corpus --help' for usage");
                println!("Run 'manifesto-corpus ingest <ROOT>' to build a corpus");
            }
            Ok(())
        },
    }
}
