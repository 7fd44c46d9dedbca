//! Model management commands - Download and inspect the embedding model

use anyhow::Result;
use colored::Colorize;

use tagsmith::core::config::{Config, EmbedderKind};
use tagsmith::tags::embedder::cached_model_path;
use tagsmith::tags::{Embedder, Model2VecEmbedder};

/// `tagsmith model <action>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModelAction {
    /// Show model status
    Status,
    /// Download the configured Model2Vec model
    Download,
}

/// Run model subcommand
pub fn run(config: &Config, action: ModelAction, json: bool) -> Result<()> {
    match action {
        ModelAction::Download => download(config, json),
        ModelAction::Status => status(config, json),
    }
}

/// Fetch the configured model from HuggingFace Hub into the local cache
fn download(config: &Config, json: bool) -> Result<()> {
    let model = &config.model;

    if model.embedder == EmbedderKind::Htp {
        if json {
            println!(
                "{}",
                serde_json::json!({ "success": true, "embedder": "htp", "downloaded": false })
            );
        } else {
            println!(
                "{} The built-in HTP embedder needs no model download.",
                "ℹ".blue()
            );
        }
        return Ok(());
    }

    if !json {
        match &model.model_path {
            Some(path) => println!("{} Loading model from {}", "→".dimmed(), path.display()),
            None => {
                println!("{} Downloading model: {}", "→".dimmed(), model.model_id.cyan());
                println!("  This may take a few minutes on first download...");
            }
        }
        println!();
    }

    let result = match &model.model_path {
        Some(path) => Model2VecEmbedder::from_path(path),
        None => Model2VecEmbedder::from_pretrained(&model.model_id),
    };

    match result {
        Ok(embedder) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "model_id": model.model_id,
                        "source": embedder.source(),
                        "dimension": embedder.dimension(),
                    })
                );
            } else {
                println!("{} Model ready!", "✓".green().bold());
                println!();
                println!("  {} Source: {}", "→".dimmed(), embedder.source());
                println!("  {} Dimension: {}", "→".dimmed(), embedder.dimension());
            }
            Ok(())
        }
        Err(e) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": format!("{:#}", e),
                    })
                );
            } else {
                println!("{} Failed to load model: {:#}", "✗".red().bold(), e);
                println!(
                    "  {} Use {} to run without a model",
                    "ℹ".blue(),
                    "--offline".cyan()
                );
            }
            Err(e)
        }
    }
}

/// Show model status
fn status(config: &Config, json: bool) -> Result<()> {
    let model = &config.model;
    let cached = cached_model_path(&model.model_id);
    let ready = match model.embedder {
        EmbedderKind::Htp => true,
        EmbedderKind::Model2Vec => match &model.model_path {
            Some(path) => path.exists(),
            None => cached.is_some(),
        },
    };

    if json {
        println!(
            "{}",
            serde_json::json!({
                "embedder": model.embedder,
                "model_id": model.model_id,
                "model_path": model.model_path,
                "cached_path": cached,
                "ready": ready,
            })
        );
        return Ok(());
    }

    println!("{}", "Model Status".bold());
    println!();

    let embedder = match model.embedder {
        EmbedderKind::Htp => "htp (built-in)".cyan(),
        EmbedderKind::Model2Vec => "model2vec".cyan(),
    };
    println!("  {} Embedder: {}", "→".dimmed(), embedder);

    if model.embedder == EmbedderKind::Model2Vec {
        println!("  {} Model ID: {}", "→".dimmed(), model.model_id.cyan());
        if let Some(path) = &model.model_path {
            println!("  {} Model path: {}", "→".dimmed(), path.display());
        }
        let cache_status = match &cached {
            Some(path) => format!("Cached ({})", path.display()).green(),
            None => "Not cached".yellow(),
        };
        println!("  {} Cache: {}", "→".dimmed(), cache_status);
    }

    println!();
    if ready {
        println!(
            "  {} Tag suggestion is {}",
            "✓".green().bold(),
            "ready".green().bold()
        );
    } else {
        println!(
            "  {} Run {} to fetch the model",
            "!".yellow().bold(),
            "tagsmith model download".cyan()
        );
    }

    println!();
    println!(
        "  {} HuggingFace cache: ~/.cache/huggingface/hub/",
        "ℹ".blue()
    );

    Ok(())
}
