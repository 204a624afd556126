use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jobmatch_core::{load_catalog, match_profile, CorpusIndex, Query};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "jobmatch")]
#[command(about = "Inspect a job catalog and run skill queries against it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and report its size
    Stats {
        /// Catalog path (.csv, .json, .jsonl, or a directory of them)
        #[arg(long)]
        catalog: String,
    },
    /// Print recommendations and partial matches for a set of skills
    Query {
        /// Catalog path (.csv, .json, .jsonl, or a directory of them)
        #[arg(long)]
        catalog: String,
        /// A skill; repeat for several
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { catalog } => {
            let index = open_index(&catalog)?;
            println!("postings: {}", index.num_postings());
            println!("vocabulary: {}", index.vocabulary_size());
            Ok(())
        }
        Commands::Query { catalog, skills } => {
            let index = open_index(&catalog)?;
            let matches = match_profile(&index, Query::List(skills));
            tracing::info!(status = ?matches.status(), "query complete");
            println!("{}", serde_json::to_string_pretty(&matches)?);
            Ok(())
        }
    }
}

fn open_index(catalog: &str) -> Result<CorpusIndex> {
    let postings = load_catalog(catalog).with_context(|| format!("loading catalog {catalog}"))?;
    let index = CorpusIndex::build(postings).context("indexing catalog")?;
    Ok(index)
}
