//! nvembed CLI - inspect and normalize embed markup.

use clap::{Parser, Subcommand};
use nvembed::prelude::*;
use nvembed::normalize_fragment;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nvembed")]
#[command(author, version, about = "Embed markup inspector and normalizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite every recognized embed in a fragment to canonical markup
    Normalize {
        /// Input file (use - for stdin)
        input: PathBuf,

        /// Output file (use - for stdout, or omit to use stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Engine flavor
        #[arg(short, long, default_value = "iframe")]
        flavor: FlavorArg,
    },

    /// Parse a fragment and print every recognized embed as JSON
    Inspect {
        /// Input file (use - for stdin)
        input: PathBuf,

        /// Engine flavor
        #[arg(short, long, default_value = "iframe")]
        flavor: FlavorArg,
    },

    /// List available flavors
    Flavors,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum FlavorArg {
    /// Externally-hosted documents through the Google Docs or Office viewer
    Docs,
    /// Generic iframe-able media
    Iframe,
}

impl FlavorArg {
    fn config(&self) -> FlavorConfig {
        match self {
            FlavorArg::Docs => FlavorConfig::document_viewer(),
            FlavorArg::Iframe => FlavorConfig::generic_iframe(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FlavorArg::Docs => "docs",
            FlavorArg::Iframe => "iframe",
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            input,
            output,
            flavor,
        } => {
            let text = read_input(&input)?;
            let normalized = normalize_fragment(&text, &flavor.config())?;
            write_output(output, normalized.as_bytes())?;
        }
        Commands::Inspect { input, flavor } => {
            let text = read_input(&input)?;
            let embeds = nvembed::read::parse(&text, &flavor.config())?;
            let json = serde_json::to_string_pretty(&embeds)?;
            println!("{json}");
        }
        Commands::Flavors => {
            list_flavors();
        }
    }

    Ok(())
}

fn read_input(input: &PathBuf) -> Result<String, Box<dyn std::error::Error>> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn write_output(output: Option<PathBuf>, bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) if path.as_os_str() != "-" => {
            fs::write(&path, bytes)?;
        }
        _ => {
            io::stdout().write_all(bytes)?;
        }
    }
    Ok(())
}

fn list_flavors() {
    println!("Available flavors:\n");
    println!("  {:8} {:9} {:7}  DESCRIPTION", "FLAVOR", "DEFAULTS", "RATIO");
    println!("  {:8} {:9} {:7}  -----------", "------", "--------", "-----");

    for flavor in [FlavorArg::Docs, FlavorArg::Iframe] {
        let config = flavor.config();
        let defaults = format!("{}x{}", config.default_width, config.default_height);
        let description = match flavor {
            FlavorArg::Docs => "documents via the Google Docs / Office web viewer",
            FlavorArg::Iframe => "generic iframe-able media",
        };
        println!(
            "  {:8} {:9} {:7}  {}",
            flavor.name(),
            defaults,
            config.default_ratio.to_string(),
            description
        );
    }
}
