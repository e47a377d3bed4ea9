use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
#[cfg(feature = "web")]
use tracing::info;

#[cfg(feature = "web")]
use safedose::config::Config;
use safedose::models::AnalysisRequest;
use safedose::output::terminal;
use safedose::scoring::analysis::Analyzer;
use safedose::scoring::trusted::verify_source;

/// SafeDose: misinformation, persuasion and source-trust scoring for text.
///
/// All scoring is local pattern matching against fixed tables. The scores
/// are heuristics, not a validated model.
#[derive(Parser)]
#[command(name = "safedose", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis on a piece of text
    Analyze {
        /// The text to analyze (or use --file)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// URL the text was taken from, for source verification
        #[arg(long)]
        source_url: Option<String>,

        /// Print the result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Check the credibility of a source URL
    CheckSource {
        /// The URL to check (e.g. https://www.snopes.com/article)
        url: String,

        /// Print the result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: SAFEDOSE_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: SAFEDOSE_BIND or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("safedose=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            text,
            file,
            source_url,
            json,
        } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                (None, None) => anyhow::bail!(
                    "Nothing to analyze. Pass the text as an argument or use --file <PATH>."
                ),
            };

            let analyzer = Analyzer::new()?;
            let mut request = AnalysisRequest::new(text);
            request.source_url = source_url;
            let analysis = analyzer.analyze(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                terminal::display_analysis(&analysis, &request.text);
            }
        }

        Commands::CheckSource { url, json } => {
            let verification = verify_source(&url);
            if json {
                println!("{}", serde_json::to_string_pretty(&verification)?);
            } else {
                terminal::display_source(&verification);
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            config.validate()?;

            let analyzer = Analyzer::new()?;
            info!(
                max_text_chars = config.max_text_chars,
                "Scorers ready, starting server"
            );
            safedose::web::run_server(config, analyzer).await?;
        }
    }

    Ok(())
}
