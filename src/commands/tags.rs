use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

use tagsmith::core::config::Config;
use tagsmith::core::records::{collect_candidate_tags, load_records, load_tag_list};
use tagsmith::tags::{global_matcher, KeywordExtractor, SuggestionSource, TagSuggestion};

/// Options shared by `suggest` and `batch`
pub struct RankArgs {
    pub top_k: Option<usize>,
    pub threshold: Option<f32>,
    pub json: bool,
}

/// Where the candidate tags for `suggest` come from
pub struct CandidateArgs {
    pub tags: Vec<String>,
    pub tags_file: Option<PathBuf>,
    pub records: Option<PathBuf>,
}

impl CandidateArgs {
    fn load(&self) -> Result<Vec<String>> {
        let mut pool = self.tags.clone();

        if let Some(path) = &self.tags_file {
            pool.extend(load_tag_list(path).context("Failed to read tags file")?);
        }

        if let Some(path) = &self.records {
            let records = load_records(path).context("Failed to read records")?;
            pool.extend(collect_candidate_tags(&records));
        }

        Ok(pool)
    }
}

pub fn run_suggest(
    config: &Config,
    content: &str,
    candidates: &CandidateArgs,
    rank: &RankArgs,
) -> Result<()> {
    let pool = candidates.load()?;
    let options = detect_options(config, rank);

    if !rank.json && pool.is_empty() {
        println!(
            "{}",
            "No candidate tags given; suggestions will come from keywords only.".dimmed()
        );
    }

    let matcher = global_matcher(config).context("Failed to initialize tag matcher")?;
    let suggestions = matcher.detect_tags(content, &pool, &options)?;

    if rank.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        println!("{}", "Tag Suggestions".bold());
        println!("{}", "=".repeat(50));
        println!("Input: {}", content.dimmed());
        println!("Candidates: {}", pool.len());
        println!();
        print_suggestions(&suggestions);
    }

    Ok(())
}

#[derive(Serialize)]
struct RecordSuggestions {
    record: String,
    existing: Vec<String>,
    suggestions: Vec<TagSuggestion>,
    new_tags: Vec<String>,
}

/// Dry-run suggestions for every stored record against the pool of all their tags
pub fn run_batch(config: &Config, records_path: &Path, rank: &RankArgs) -> Result<()> {
    let records = load_records(records_path).context("Failed to read records")?;
    let pool = collect_candidate_tags(&records);
    let options = detect_options(config, rank);
    let matcher = global_matcher(config).context("Failed to initialize tag matcher")?;

    let mut results = Vec::with_capacity(records.len());
    for record in &records {
        let suggestions = matcher
            .detect_tags(&record.text(), &pool, &options)
            .with_context(|| format!("Failed to suggest tags for {}", record.label()))?;

        let existing: HashSet<String> = record.tags.iter().map(|t| t.to_lowercase()).collect();
        let new_tags = suggestions
            .iter()
            .filter(|s| !existing.contains(&s.tag.to_lowercase()))
            .map(|s| s.tag.clone())
            .collect();

        results.push(RecordSuggestions {
            record: record.label().to_string(),
            existing: record.tags.clone(),
            suggestions,
            new_tags,
        });
    }

    if rank.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{}", "Batch Tag Suggestions (dry-run)".bold());
    println!("{}", "=".repeat(60));
    println!("Records: {}  Candidate tags: {}", records.len(), pool.len());
    println!();

    let mut with_new = 0;
    for result in &results {
        if !result.new_tags.is_empty() {
            with_new += 1;
        }
        println!("{}", result.record.cyan().bold());
        if result.existing.is_empty() {
            println!("  {} {}", "existing:".dimmed(), "(none)".dimmed());
        } else {
            println!("  {} {}", "existing:".dimmed(), result.existing.join(", "));
        }
        if result.new_tags.is_empty() {
            println!("  {} {}", "→".dimmed(), "no new tags".dimmed());
        } else {
            println!("  {} {}", "→".green(), result.new_tags.join(", ").green());
        }
    }

    println!();
    println!(
        "{} of {} records have new suggestions",
        with_new.to_string().bold(),
        results.len()
    );

    Ok(())
}

pub fn run_keywords(text: &str, limit: usize, json: bool) -> Result<()> {
    let extractor = KeywordExtractor::english();
    let keywords = extractor.extract_keywords(text, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
        return Ok(());
    }

    println!("{}", "Extracted Keywords".bold());
    println!("{}", "=".repeat(50));
    println!("Input: {}", text.dimmed());
    println!();

    if keywords.is_empty() {
        println!("{}", "No keywords extracted.".yellow());
    } else {
        for (i, k) in keywords.iter().enumerate() {
            println!("  {}. {}", i + 1, k.cyan().bold());
        }
    }

    Ok(())
}

fn detect_options(config: &Config, rank: &RankArgs) -> tagsmith::tags::DetectOptions {
    let mut options = config.ranking.detect_options();
    if let Some(top_k) = rank.top_k {
        options = options.with_top_k(top_k);
    }
    if let Some(threshold) = rank.threshold {
        options = options.with_threshold(threshold);
    }
    options
}

fn print_suggestions(suggestions: &[TagSuggestion]) {
    if suggestions.is_empty() {
        println!("{}", "No matching tags found.".yellow());
        return;
    }

    for (i, s) in suggestions.iter().enumerate() {
        let score_pct = format!("{:.0}%", s.score * 100.0);
        let score_colored = if s.score >= 0.8 {
            score_pct.green()
        } else if s.score >= 0.5 {
            score_pct.yellow()
        } else {
            score_pct.red()
        };

        let tag_display = match s.source {
            SuggestionSource::Extracted => format!("{} (NEW)", s.tag).magenta().bold(),
            SuggestionSource::Database => s.tag.cyan().bold(),
        };

        println!("  {}. {} [{}]", i + 1, tag_display, score_colored);
    }
}
