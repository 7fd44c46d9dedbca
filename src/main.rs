mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::model::ModelAction;
use commands::tags::{CandidateArgs, RankArgs};
use tagsmith::core::config::{Config, EmbedderKind};

#[derive(Parser)]
#[command(name = "tagsmith")]
#[command(about = "Suggest tags for content from existing tags and extracted keywords", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Debug logging (RUST_LOG overrides)")]
    verbose: bool,

    #[arg(long, global = true, help = "Use the built-in embedder; no model download")]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest tags for given content
    Suggest {
        /// Content to analyze
        content: String,
        #[arg(long = "tag", value_name = "TAG", help = "Candidate tag (repeatable)")]
        tags: Vec<String>,
        #[arg(long, help = "Newline-separated candidate tag file")]
        tags_file: Option<PathBuf>,
        #[arg(long, help = "JSON records export; its tags become candidates")]
        records: Option<PathBuf>,
        #[arg(short = 'k', long, help = "Number of suggestions")]
        top_k: Option<usize>,
        #[arg(short, long, help = "Minimum similarity for candidate tags")]
        threshold: Option<f32>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Extract keywords from text
    Keywords {
        /// Text to analyze
        text: String,
        #[arg(short, long, help = "Number of keywords to extract")]
        limit: Option<usize>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Suggest tags for every stored record (dry-run)
    Batch {
        #[arg(long, help = "JSON records export")]
        records: PathBuf,
        #[arg(short = 'k', long, help = "Number of suggestions per record")]
        top_k: Option<usize>,
        #[arg(short, long, help = "Minimum similarity for candidate tags")]
        threshold: Option<f32>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Manage the Model2Vec embedding model
    Model {
        #[arg(value_enum, default_value_t = ModelAction::Status)]
        action: ModelAction,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        #[arg(long, help = "Write a default .tagsmith.json")]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tagsmith::telemetry::setup_tracing(cli.verbose);

    let mut config = Config::load();
    if cli.offline {
        config.model.embedder = EmbedderKind::Htp;
    }

    match cli.command {
        Commands::Suggest {
            content,
            tags,
            tags_file,
            records,
            top_k,
            threshold,
            json,
        } => commands::tags::run_suggest(
            &config,
            &content,
            &CandidateArgs {
                tags,
                tags_file,
                records,
            },
            &RankArgs {
                top_k,
                threshold,
                json,
            },
        ),
        Commands::Keywords { text, limit, json } => commands::tags::run_keywords(
            &text,
            limit.unwrap_or(config.ranking.max_keywords),
            json,
        ),
        Commands::Batch {
            records,
            top_k,
            threshold,
            json,
        } => commands::tags::run_batch(
            &config,
            &records,
            &RankArgs {
                top_k,
                threshold,
                json,
            },
        ),
        Commands::Model { action, json } => commands::model::run(&config, action, json),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_action_parsing() {
        let cli = Cli::try_parse_from(["tagsmith", "model"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Model {
                action: ModelAction::Status,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["tagsmith", "model", "download", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Model {
                action: ModelAction::Download,
                json: true
            }
        ));
    }

    #[test]
    fn test_unknown_model_action_rejected() {
        assert!(Cli::try_parse_from(["tagsmith", "model", "bogus"]).is_err());
    }
}
