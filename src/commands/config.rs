//! Configuration commands

use anyhow::Result;
use colored::*;
use std::path::Path;

use tagsmith::core::config::{Config, CONFIG_ENV, CONFIG_FILE};

pub fn run(config: &Config, init: bool) -> Result<()> {
    if init {
        return run_init();
    }

    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn run_init() -> Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() {
        println!(
            "{} {} already exists; leaving it untouched.",
            "→".blue(),
            path.display()
        );
        return Ok(());
    }

    Config::default().save(path)?;
    println!("{} Created {}", "✓".green(), path.display());
    println!();
    println!(
        "  Set {} to use a config file elsewhere.",
        CONFIG_ENV.yellow()
    );

    Ok(())
}
