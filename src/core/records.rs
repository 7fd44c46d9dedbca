//! Stored response records and the candidate tag pool derived from them

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// A previously stored piece of content with its tags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl ResponseRecord {
    /// Identifier for display: id, then title, then a placeholder
    pub fn label(&self) -> &str {
        match &self.id {
            Some(id) if !id.is_empty() => id,
            _ if !self.title.is_empty() => &self.title,
            _ => "(untitled)",
        }
    }

    /// Text used for tag suggestion: title and content
    pub fn text(&self) -> String {
        match (self.title.trim(), self.content.trim()) {
            ("", content) => content.to_string(),
            (title, "") => title.to_string(),
            (title, content) => format!("{}\n{}", title, content),
        }
    }
}

/// Read a JSON array of records
pub fn load_records(path: &Path) -> Result<Vec<ResponseRecord>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<ResponseRecord> = serde_json::from_str(&content)
        .with_context(|| format!("parsing records from {}", path.display()))?;
    Ok(records)
}

/// Every distinct tag across `records`, trimmed and sorted
pub fn collect_candidate_tags(records: &[ResponseRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.tags.iter())
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Read a newline-separated tag list, skipping blank lines and `#` comments
pub fn load_tag_list(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(tags: &[&str]) -> ResponseRecord {
        ResponseRecord {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_collect_candidate_tags() {
        let records = vec![
            record(&["rust", "  cargo "]),
            record(&["Rust", "rust", ""]),
            record(&[]),
        ];
        assert_eq!(collect_candidate_tags(&records), vec!["Rust", "cargo", "rust"]);
    }

    #[test]
    fn test_load_records_tolerates_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        fs::write(
            &path,
            r#"[
                {"id": "r1", "title": "Launch", "content": "New product", "tags": ["product"]},
                {"content": "No tags here"}
            ]"#,
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label(), "r1");
        assert_eq!(records[0].text(), "Launch\nNew product");
        assert!(records[1].tags.is_empty());
        assert_eq!(records[1].label(), "(untitled)");
        assert_eq!(records[1].text(), "No tags here");
    }

    #[test]
    fn test_load_records_rejects_non_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, r#"{"id": "r1"}"#).unwrap();
        assert!(load_records(&path).is_err());
    }

    #[test]
    fn test_load_tag_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tags.txt");
        fs::write(&path, "# pool\nrust\n\n  machine learning  \n").unwrap();
        assert_eq!(load_tag_list(&path).unwrap(), vec!["rust", "machine learning"]);
    }
}
