use fixed_map::Map;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::membership::Triangle;
use crate::ops::{Defuzz, TConorm, TNorm};
use crate::rules::RuleTable;
use crate::terms::{InputLevel, SentimentLabel};
use crate::universe::UniverseDef;

/// Every fixed constant of the inference pipeline in one read-only value.
///
/// `Default` is the production configuration. Anything else must pass
/// [`EngineConfig::validate`] (run again by `SentimentEngine::new`) before a
/// single input is processed; malformed constants abort construction, they
/// are never patched up at inference time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid shared by both crisp input signals.
    pub input_universe: UniverseDef,
    pub output_universe: UniverseDef,

    /// Input term triangles, shared by the pos and neg variables.
    pub low: Triangle,
    pub medium: Triangle,
    pub high: Triangle,

    /// Output term triangles.
    pub negative: Triangle,
    pub neutral: Triangle,
    pub positive: Triangle,

    pub rules: RuleTable,
    pub and_op: TNorm,
    pub or_op: TConorm,
    pub defuzz: Defuzz,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_universe: UniverseDef::new(0.0, 1.0, 0.1),
            output_universe: UniverseDef::new(0.0, 10.0, 1.0),
            low: Triangle { a: 0.0, b: 0.0, c: 0.5 },
            medium: Triangle { a: 0.0, b: 0.5, c: 1.0 },
            high: Triangle { a: 0.5, b: 1.0, c: 1.0 },
            negative: Triangle { a: 0.0, b: 0.0, c: 5.0 },
            neutral: Triangle { a: 0.0, b: 5.0, c: 10.0 },
            positive: Triangle { a: 5.0, b: 10.0, c: 10.0 },
            rules: RuleTable::default(),
            and_op: TNorm::Min,
            or_op: TConorm::Max,
            defuzz: Defuzz::Centroid,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input_universe.validate()?;
        self.output_universe.validate()?;

        for tri in [
            self.low,
            self.medium,
            self.high,
            self.negative,
            self.neutral,
            self.positive,
        ] {
            tri.validate()?;
        }

        Ok(())
    }

    pub(crate) fn input_terms(&self) -> Map<InputLevel, Triangle> {
        let mut terms = Map::new();
        terms.insert(InputLevel::Low, self.low);
        terms.insert(InputLevel::Medium, self.medium);
        terms.insert(InputLevel::High, self.high);
        terms
    }

    pub(crate) fn output_terms(&self) -> Map<SentimentLabel, Triangle> {
        let mut terms = Map::new();
        terms.insert(SentimentLabel::Negative, self.negative);
        terms.insert(SentimentLabel::Neutral, self.neutral);
        terms.insert(SentimentLabel::Positive, self.positive);
        terms
    }
}
