//! tagsmith: tag suggestions from keyword extraction and embedding similarity
//!
//! ```no_run
//! use tagsmith::core::config::Config;
//! use tagsmith::tags::{global_matcher, DetectOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! let matcher = global_matcher(&Config::load())?;
//! let existing = ["product", "travel", "cooking"];
//! let suggestions = matcher.detect_tags(
//!     "Excited to announce our new product launch in San Francisco",
//!     &existing,
//!     &DetectOptions::default(),
//! )?;
//! for s in suggestions {
//!     println!("{} {:.2} {:?}", s.tag, s.score, s.source);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod nlp;
pub mod tags;
pub mod telemetry;
