use anyhow::Result;
use clap::{Parser, Subcommand};
use searcher::{build_index, load_noise_words, run_query, stats};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Build an in-memory keyword index and run top-5 OR queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the corpus, then answer one "kw1 OR kw2" query
    Search {
        /// Manifest file listing document paths
        #[arg(long)]
        docs: PathBuf,
        /// Noise word file (built-in list when omitted)
        #[arg(long)]
        noise: Option<PathBuf>,
        /// First keyword
        kw1: String,
        /// Second keyword
        kw2: String,
    },
    /// Index the corpus and print its size
    Stats {
        /// Manifest file listing document paths
        #[arg(long)]
        docs: PathBuf,
        /// Noise word file (built-in list when omitted)
        #[arg(long)]
        noise: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { docs, noise, kw1, kw2 } => {
            let noise = load_noise_words(noise.as_deref())?;
            let index = build_index(&docs, &noise)?;
            let outcome = run_query(&index, &kw1, &kw2, &noise);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Stats { docs, noise } => {
            let noise = load_noise_words(noise.as_deref())?;
            let index = build_index(&docs, &noise)?;
            println!("{}", serde_json::to_string_pretty(&stats(&index))?);
        }
    }
    Ok(())
}
