use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use plagiscan::config::Config;
use plagiscan::models::{Document, PairResult};

/// Plagiscan: pairwise plagiarism detection.
///
/// Normalizes each document through a WordNet lexicon, vectorizes the batch
/// with TF-IDF and scores every pair by cosine similarity.
#[derive(Parser)]
#[command(name = "plagiscan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every pair of documents and report their similarity
    Check {
        /// Files or directories to compare (directories are read one level deep)
        paths: Vec<PathBuf>,

        /// JSON batch file in the API request shape ({"files": [{"email", "text"}]})
        #[arg(long)]
        batch: Option<PathBuf>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Only show pairs at or above this similarity percentage
        #[arg(long, default_value = "0")]
        min_score: f64,
    },

    /// Print the normalized text of a single document
    Normalize {
        /// The file to normalize
        path: PathBuf,
    },

    /// Show which lexicon is active and its size
    Status,

    /// Start the HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides PLAGISCAN_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind to (overrides PLAGISCAN_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plagiscan=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            paths,
            batch,
            json,
            min_score,
        } => {
            let documents = collect_documents(&paths, batch.as_deref())?;
            let lexicon = plagiscan::lexicon::open(config.wordnet_dir.as_deref())?;

            info!(documents = documents.len(), "Comparing documents");
            let results = plagiscan::pipeline::compare::compare(&lexicon, &documents)?;
            let total = results.len();
            let shown: Vec<PairResult> = results
                .into_iter()
                .filter(|r| r.percentage() >= min_score)
                .collect();

            if json {
                let wire = plagiscan::output::json::to_wire(&shown);
                println!("{}", serde_json::to_string_pretty(&wire)?);
            } else if shown.is_empty() && total > 0 {
                println!("No pairs at or above {min_score}% ({total} compared).");
            } else {
                plagiscan::output::terminal::display_report(&shown, documents.len());
            }
        }

        Commands::Normalize { path } => {
            let document = plagiscan::loader::load_file(&path)?;
            let lexicon = plagiscan::lexicon::open(config.wordnet_dir.as_deref())?;
            println!(
                "{}",
                plagiscan::text::normalize::normalize(&lexicon, &document.text)
            );
        }

        Commands::Status => {
            let lexicon = plagiscan::lexicon::open(config.wordnet_dir.as_deref())?;
            plagiscan::status::show(&config, &lexicon);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let lexicon = plagiscan::lexicon::open(config.wordnet_dir.as_deref())?;
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());

            info!("Starting plagiarism API");
            plagiscan::web::run_server(std::sync::Arc::new(lexicon), port, &bind).await?;
        }
    }

    Ok(())
}

/// Gather documents from positional paths and an optional JSON batch.
fn collect_documents(paths: &[PathBuf], batch: Option<&std::path::Path>) -> Result<Vec<Document>> {
    let mut documents = plagiscan::loader::load_paths(paths)?;
    if let Some(batch) = batch {
        documents.extend(plagiscan::loader::load_batch_json(batch)?);
    }
    if documents.is_empty() {
        bail!("No documents given. Pass files, directories or --batch FILE.");
    }
    Ok(documents)
}
