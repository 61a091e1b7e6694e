//! Fuzzy inference for three-way sentiment labeling.
//!
//! Two crisp signals per document, positive and negative strength in the
//! unit interval, run through a Mamdani-style pipeline: triangular
//! fuzzification over Low/Medium/High levels, a fixed 3x3 rule matrix with
//! min/max combinators, clip-and-union aggregation of the output terms and
//! centroid defuzzification over the output universe. The resulting score
//! buckets into [`SentimentLabel::Negative`], [`SentimentLabel::Neutral`]
//! or [`SentimentLabel::Positive`] by exact thirds of the output range.
//!
//! Upstream polarity scoring, text preprocessing and downstream metric
//! computation belong to the callers; this crate is the inference core
//! only. The engine holds no state across readings, so a shared reference
//! can serve any number of threads.
//!
//! ```
//! use fuzzy_sentiment::{EngineConfig, SentimentEngine, SentimentLabel};
//!
//! let engine = SentimentEngine::new(EngineConfig::default())?;
//!
//! let result = engine.infer(1.0, 0.0);
//! assert_eq!(result.label, SentimentLabel::Positive);
//!
//! let result = engine.infer(0.0, 1.0);
//! assert_eq!(result.label, SentimentLabel::Negative);
//! # Ok::<(), fuzzy_sentiment::ConfigError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod label;
pub mod membership;
pub mod ops;
pub mod rules;
pub mod terms;
pub mod universe;
pub mod variable;

pub use config::EngineConfig;
pub use engine::{Inference, SentimentEngine};
pub use error::ConfigError;
pub use label::LabelMap;
pub use membership::Triangle;
pub use ops::{Defuzz, TConorm, TNorm};
pub use rules::{RuleTable, Strengths};
pub use terms::{InputLevel, SentimentLabel};
pub use universe::{Universe, UniverseDef};
pub use variable::LinguisticVariable;
