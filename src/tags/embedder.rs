//! Embedder trait and implementations for tag matching
//!
//! Provides abstraction over different embedding models:
//! - HtpEmbedder: Harmonic Token Projection (built-in, no model file)
//! - Model2VecEmbedder: static neural embeddings (requires model download)

use anyhow::{Context, Result};
use model2vec::Model2Vec;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::config::{EmbedderKind, ModelConfig};

/// Embedding model abstraction
pub trait Embedder: Send + Sync {
    /// Generate embedding for a single text
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Get embedding dimension
    fn dimension(&self) -> usize;

    /// Get model name/identifier
    fn name(&self) -> &str;
}

/// Calculate cosine similarity between two embeddings
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}

// ============================================================================
// HTP Embedder
// ============================================================================

/// HTP embedding dimension
pub const HTP_DIM: usize = 384;
const NUM_MODULI: usize = HTP_DIM / 2;

static COPRIME_MODULI: &[u64] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421,
    431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541, 547,
    557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787, 797,
    809, 811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919, 929,
    937, 941, 947, 953, 967, 971, 977, 983, 991, 997, 1009, 1013, 1019, 1021, 1031, 1033, 1039,
    1049, 1051, 1061, 1063, 1069, 1087, 1091, 1093, 1097, 1103, 1109, 1117, 1123, 1129, 1151, 1153,
    1163, 1171, 1181,
];

/// Harmonic Token Projection embedder.
///
/// Each lower-cased word is hashed to an integer and projected onto the unit
/// circle modulo a set of coprime moduli; a text is the normalized mean of its
/// word vectors. Similarity therefore reflects shared words only.
#[derive(Debug, Clone, Default)]
pub struct HtpEmbedder;

impl HtpEmbedder {
    pub fn new() -> Self {
        Self
    }

    fn embed_text(text: &str) -> Vec<f32> {
        let words = htp_words(text);
        if words.is_empty() {
            return vec![0.0; HTP_DIM];
        }

        let mut sum = vec![0.0f64; HTP_DIM];
        for word in &words {
            let n = word_hash(word);
            for (k, &m) in COPRIME_MODULI.iter().take(NUM_MODULI).enumerate() {
                let theta = 2.0 * PI * ((n % m) as f64) / (m as f64);
                sum[2 * k] += theta.sin();
                sum[2 * k + 1] += theta.cos();
            }
        }

        let norm: f64 = sum.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            sum.iter().map(|x| (x / norm) as f32).collect()
        } else {
            vec![0.0; HTP_DIM]
        }
    }
}

fn htp_words(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// FNV-1a over the word's bytes
fn word_hash(word: &str) -> u64 {
    word.bytes().fold(0xcbf2_9ce4_8422_2325u64, |h, b| {
        (h ^ b as u64).wrapping_mul(0x0100_0000_01b3)
    })
}

impl Embedder for HtpEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(Self::embed_text(text))
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| Self::embed_text(t)).collect())
    }

    fn dimension(&self) -> usize {
        HTP_DIM
    }

    fn name(&self) -> &str {
        "htp-384"
    }
}

// ============================================================================
// Model2Vec Embedder
// ============================================================================

/// Default English model (HuggingFace ID)
pub const DEFAULT_MODEL_HF: &str = "minishlab/potion-base-8M";

/// Model2Vec based embedder
pub struct Model2VecEmbedder {
    model: Model2Vec,
    source: String,
    dimension: usize,
}

impl Model2VecEmbedder {
    /// Load model from local path
    pub fn from_path(path: &Path) -> Result<Self> {
        let model = Model2Vec::from_pretrained(path.to_string_lossy().as_ref(), None, None)
            .with_context(|| format!("Failed to load Model2Vec from: {}", path.display()))?;

        Self::with_model(model, path.to_string_lossy().to_string())
    }

    /// Load model from HuggingFace Hub
    pub fn from_pretrained(model_id: &str) -> Result<Self> {
        let model = Model2Vec::from_pretrained(model_id, None, None)
            .with_context(|| format!("Failed to load Model2Vec: {}", model_id))?;

        Self::with_model(model, model_id.to_string())
    }

    /// Load a model, trying the local HuggingFace cache before the Hub
    pub fn from_cache_or_hub(model_id: &str) -> Result<Self> {
        if let Some(cache_path) = cached_model_path(model_id) {
            return Self::from_path(&cache_path);
        }
        Self::from_pretrained(model_id)
    }

    fn with_model(model: Model2Vec, source: String) -> Result<Self> {
        let sample = model
            .encode(&["dimension check"])
            .context("Failed to encode sample text")?;
        let dimension = sample.ncols();
        info!(model = %source, dimension, "loaded Model2Vec model");

        Ok(Self {
            model,
            source,
            dimension,
        })
    }

    /// Where the model was loaded from
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Embedder for Model2VecEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let texts = [text];
        let embeddings = self.model.encode(&texts).context("Failed to encode text")?;
        Ok(embeddings.row(0).to_vec())
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let embeddings = self.model.encode(texts).context("Failed to encode texts")?;
        Ok(embeddings.rows().into_iter().map(|r| r.to_vec()).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        &self.source
    }
}

/// Local HuggingFace cache snapshot for a model ID, if one exists
pub fn cached_model_path(model_id: &str) -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    let repo_dir = format!("models--{}", model_id.replace('/', "--"));
    let snapshots = PathBuf::from(home)
        .join(".cache/huggingface/hub")
        .join(repo_dir)
        .join("snapshots");

    std::fs::read_dir(&snapshots)
        .ok()?
        .flatten()
        .find(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| e.path())
}

// ============================================================================
// Factory function
// ============================================================================

/// Create embedder based on configuration
pub fn create_embedder(config: &ModelConfig) -> Result<Box<dyn Embedder>> {
    match config.embedder {
        EmbedderKind::Htp => Ok(Box::new(HtpEmbedder::new())),
        EmbedderKind::Model2Vec => {
            let embedder = match &config.model_path {
                Some(path) => Model2VecEmbedder::from_path(path)?,
                None => Model2VecEmbedder::from_cache_or_hub(&config.model_id)?,
            };
            Ok(Box::new(embedder))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_htp_embedder() {
        let embedder = HtpEmbedder::new();

        let emb = embedder.embed("hello world").unwrap();
        assert_eq!(emb.len(), embedder.dimension());
        assert_eq!(embedder.name(), "htp-384");

        let norm: f32 = emb.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_htp_is_case_and_punctuation_insensitive() {
        let embedder = HtpEmbedder::new();
        let a = embedder.embed("Product launch!").unwrap();
        let b = embedder.embed("product, launch").unwrap();
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_htp_empty_text_is_zero_vector() {
        let emb = HtpEmbedder::new().embed("  ").unwrap();
        assert!(emb.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_htp_batch_matches_single() {
        let embedder = HtpEmbedder::new();
        let batch = embedder.embed_batch(&["alpha", "beta gamma"]).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1], embedder.embed("beta gamma").unwrap());
    }

    #[test]
    fn test_word_hash_distinguishes_shared_suffixes() {
        assert_ne!(word_hash("product"), word_hash("conduct"));
        assert_ne!(word_hash("networking"), word_hash("working"));
    }

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_create_embedder_htp() {
        let config = ModelConfig {
            embedder: EmbedderKind::Htp,
            ..ModelConfig::default()
        };
        let embedder = create_embedder(&config).unwrap();

        assert_eq!(embedder.dimension(), HTP_DIM);
        assert_eq!(embedder.name(), "htp-384");
    }

    #[test]
    #[ignore] // Requires model download
    fn test_model2vec_basic() {
        let embedder = Model2VecEmbedder::from_cache_or_hub(DEFAULT_MODEL_HF).unwrap();

        let emb1 = embedder.embed("GPU memory optimization").unwrap();
        let emb2 = embedder.embed("CUDA programming").unwrap();
        let emb3 = embedder.embed("cooking recipes").unwrap();

        assert_eq!(emb1.len(), embedder.dimension());

        let sim_similar = cosine_similarity(&emb1, &emb2);
        let sim_different = cosine_similarity(&emb1, &emb3);
        println!("GPU-CUDA similarity: {}", sim_similar);
        println!("GPU-cooking similarity: {}", sim_different);

        assert!(sim_similar > sim_different);
    }
}
