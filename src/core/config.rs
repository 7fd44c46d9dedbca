//! tagsmith configuration module
//!
//! Config loading priority:
//! 1. `$TAGSMITH_CONFIG` (explicit path)
//! 2. `.tagsmith.json` in the working directory
//! 3. Built-in defaults
//!
//! Every field has a serde default, so partial files are valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::tags::embedder::DEFAULT_MODEL_HF;
use crate::tags::keyword::DEFAULT_MAX_KEYWORDS;
use crate::tags::matcher::{DetectOptions, DEFAULT_THRESHOLD, DEFAULT_TOP_K};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "TAGSMITH_CONFIG";
/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = ".tagsmith.json";
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub ranking: RankingConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Which embedder backs the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedderKind {
    /// Model2Vec static embeddings (downloaded model)
    #[default]
    Model2Vec,
    /// Built-in hash projection, no model files
    Htp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub embedder: EmbedderKind,

    #[serde(default = "default_model_id", rename = "modelId")]
    pub model_id: String,

    /// Local model directory; takes precedence over `model_id`
    #[serde(default, rename = "modelPath")]
    pub model_path: Option<PathBuf>,
}

fn default_model_id() -> String {
    DEFAULT_MODEL_HF.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            embedder: EmbedderKind::default(),
            model_id: default_model_id(),
            model_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_top_k", rename = "topK")]
    pub top_k: usize,

    #[serde(default = "default_threshold")]
    pub threshold: f32,

    #[serde(default = "default_max_keywords", rename = "maxKeywords")]
    pub max_keywords: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_max_keywords() -> usize {
    DEFAULT_MAX_KEYWORDS
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            threshold: default_threshold(),
            max_keywords: default_max_keywords(),
        }
    }
}

impl RankingConfig {
    pub fn detect_options(&self) -> DetectOptions {
        DetectOptions::default()
            .with_top_k(self.top_k)
            .with_threshold(self.threshold)
            .with_max_keywords(self.max_keywords)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            model: ModelConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

impl Config {
    /// Load from `$TAGSMITH_CONFIG`, then `./.tagsmith.json`, then defaults
    pub fn load() -> Self {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            let path = PathBuf::from(path);
            match Self::load_from_file(&path) {
                Ok(config) => return config.checked(),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load {} ({}): {:#}. Trying {}.",
                        CONFIG_ENV,
                        path.display(),
                        e,
                        CONFIG_FILE
                    );
                }
            }
        }

        Self::load_or_default(Path::new(CONFIG_FILE))
    }

    /// Load `path` if it exists, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            match Self::load_from_file(path) {
                Ok(config) => return config.checked(),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load {}: {:#}. Using defaults.",
                        path.display(),
                        e
                    );
                }
            }
        }

        Self::default()
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    fn checked(self) -> Self {
        if self.version > CONFIG_VERSION {
            eprintln!(
                "Warning: Config version {} is newer than supported version {}.",
                self.version, CONFIG_VERSION
            );
        }
        self
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Generate default config file content
    pub fn default_json() -> String {
        // plain data, serialization cannot fail
        serde_json::to_string_pretty(&Config::default()).unwrap_or_default()
    }
}
