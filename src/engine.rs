use fixed_map::Map;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::label::LabelMap;
use crate::ops::{Defuzz, TConorm, TNorm};
use crate::rules::{RuleTable, Strengths};
use crate::terms::{InputLevel, SentimentLabel};
use crate::universe::Universe;
use crate::variable::LinguisticVariable;

/// Result of one inference: the defuzzified score over the output universe,
/// the label it buckets to and the firing strengths that produced it.
#[derive(Clone, Debug, Serialize)]
pub struct Inference {
    pub score: f64,
    pub label: SentimentLabel,
    pub strengths: Strengths,
}

/// Mamdani-style inference pipeline specialized to the two sentiment
/// signals.
///
/// Immutable after construction. [`SentimentEngine::infer`] is a pure
/// function of its arguments, so one engine may be shared by reference
/// across any number of threads and readings processed in any order.
pub struct SentimentEngine {
    pos: LinguisticVariable<InputLevel>,
    neg: LinguisticVariable<InputLevel>,
    output: LinguisticVariable<SentimentLabel>,
    /// Output membership curves pre-sampled over the output grid.
    curves: Map<SentimentLabel, Vec<f64>>,
    rules: RuleTable,
    and_op: TNorm,
    or_op: TConorm,
    defuzz: Defuzz,
    labels: LabelMap,
    /// Substitute score when the aggregated set carries no mass.
    fallback: f64,
}

impl SentimentEngine {
    /// Validate the configuration and build the immutable pipeline.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let input_universe = Universe::new(config.input_universe)?;
        let output_universe = Universe::new(config.output_universe)?;

        let pos = LinguisticVariable::new("pos", input_universe.clone(), config.input_terms());
        let neg = LinguisticVariable::new("neg", input_universe, config.input_terms());
        let output = LinguisticVariable::new("output", output_universe, config.output_terms());

        let mut curves = Map::new();
        for label in SentimentLabel::ALL {
            let curve = output.term_curve(label).expect("output terms are total");
            curves.insert(label, curve);
        }

        let labels = LabelMap::new(output.universe());
        let fallback = output.universe().mean();

        debug!(
            input_samples = pos.universe().samples().len(),
            output_samples = output.universe().samples().len(),
            "sentiment engine initialized"
        );

        Ok(Self {
            pos,
            neg,
            output,
            curves,
            rules: config.rules,
            and_op: config.and_op,
            or_op: config.or_op,
            defuzz: config.defuzz,
            labels,
            fallback,
        })
    }

    /// An engine with the fixed production constants.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default()).expect("default configuration is valid")
    }

    /// Run the full pipeline for one (pos, neg) reading.
    pub fn infer(&self, pos: f64, neg: f64) -> Inference {
        let pos_degrees = self.pos.fuzzify(pos);
        let neg_degrees = self.neg.fuzzify(neg);
        let strengths = self.rules.fire(&pos_degrees, &neg_degrees, self.and_op, self.or_op);
        let score = self.defuzzify(&strengths);

        Inference {
            score,
            label: self.labels.label(score),
            strengths,
        }
    }

    /// Independent readings, mapped in order. Each inference is stateless,
    /// so callers may shard this however they like instead.
    pub fn infer_batch(&self, pairs: &[(f64, f64)]) -> Vec<Inference> {
        pairs.iter().map(|&(pos, neg)| self.infer(pos, neg)).collect()
    }

    /// Clip each output curve by its firing strength, union the clipped
    /// sets pointwise and collapse the aggregate to a crisp score.
    ///
    /// An all-zero aggregate has no centroid; the engine then substitutes
    /// the mean of the output grid (Neutral on the default configuration)
    /// and logs a warning instead of raising a numeric fault.
    pub fn defuzzify(&self, strengths: &Strengths) -> f64 {
        let samples = self.output.universe().samples();
        let mut aggregated = vec![0.0; samples.len()];

        for (label, curve) in self.curves.iter() {
            let strength = strengths.get(label).copied().unwrap_or(0.0);

            for (acc, &m) in aggregated.iter_mut().zip(curve.iter()) {
                *acc = self.or_op.apply(*acc, m.min(strength));
            }
        }

        match self.defuzz.apply(samples, &aggregated) {
            Some(score) => score,
            None => {
                warn!(
                    fallback = self.fallback,
                    "aggregated output set carries no mass, substituting grid mean"
                );
                self.fallback
            },
        }
    }

    pub fn output_universe(&self) -> &Universe {
        self.output.universe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strengths_of(negative: f64, neutral: f64, positive: f64) -> Strengths {
        let mut strengths = Strengths::new();
        strengths.insert(SentimentLabel::Negative, negative);
        strengths.insert(SentimentLabel::Neutral, neutral);
        strengths.insert(SentimentLabel::Positive, positive);
        strengths
    }

    #[test]
    fn strong_positive_signal() {
        let engine = SentimentEngine::with_defaults();
        let result = engine.infer(1.0, 0.0);

        assert!((result.score - 8.0).abs() < 1e-9);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn strong_negative_signal() {
        let engine = SentimentEngine::with_defaults();
        let result = engine.infer(0.0, 1.0);

        assert!((result.score - 10.0 / 7.0).abs() < 1e-9);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn silent_signals_are_neutral() {
        let engine = SentimentEngine::with_defaults();
        let result = engine.infer(0.0, 0.0);

        assert!((result.score - 5.0).abs() < 1e-9);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn moderate_positive_stays_neutral() {
        // 0.4 positive with no negative: the Medium/Low rule fires Positive
        // at 0.8, but the Neutral floor from the Low/Low rule keeps the
        // centroid below the Positive threshold.
        let engine = SentimentEngine::with_defaults();
        let result = engine.infer(0.4, 0.0);

        assert!((result.score - 19.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert!((result.strengths.get(SentimentLabel::Positive).copied().unwrap() - 0.8).abs() < 1e-9);
        assert!((result.strengths.get(SentimentLabel::Neutral).copied().unwrap() - 0.2).abs() < 1e-9);
        assert_eq!(result.strengths.get(SentimentLabel::Negative).copied().unwrap(), 0.0);
    }

    #[test]
    fn inference_is_bit_identical() {
        let engine = SentimentEngine::with_defaults();
        let first = engine.infer(0.37, 0.21);
        let second = engine.infer(0.37, 0.21);

        assert_eq!(first.score.to_bits(), second.score.to_bits());
        assert_eq!(first.label, second.label);
    }

    #[test]
    fn upper_bound_reading_clamps_to_last_sample() {
        let engine = SentimentEngine::with_defaults();
        let edge = engine.infer(1.0, 0.0);
        let inside = engine.infer(0.9, 0.0);

        assert_eq!(edge.score.to_bits(), inside.score.to_bits());
    }

    #[test]
    fn zero_mass_falls_back_to_grid_mean() {
        let engine = SentimentEngine::with_defaults();

        let score = engine.defuzzify(&strengths_of(0.0, 0.0, 0.0));
        assert!((score - 4.5).abs() < 1e-12);

        // A reading that fires nothing takes the same path end to end.
        let result = engine.infer(f64::NAN, 0.0);
        assert!((result.score - 4.5).abs() < 1e-12);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn batch_matches_single_inferences() {
        let engine = SentimentEngine::with_defaults();
        let pairs = [(0.9, 0.1), (0.2, 0.8), (0.5, 0.5)];

        let batch = engine.infer_batch(&pairs);

        assert_eq!(batch.len(), pairs.len());
        for (&(pos, neg), result) in pairs.iter().zip(batch.iter()) {
            assert_eq!(result.score.to_bits(), engine.infer(pos, neg).score.to_bits());
        }
    }

    #[test]
    fn centroid_tracks_strength_direction() {
        // Raising the Positive strength may only move the centroid up,
        // raising the Negative strength only down, everything else fixed.
        let engine = SentimentEngine::with_defaults();
        let grid: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();

        for &sn in &grid {
            for &su in &grid {
                for &sp in &grid {
                    let base = engine.defuzzify(&strengths_of(sn, su, sp));

                    for &bump in &grid {
                        if bump > sp {
                            let raised = engine.defuzzify(&strengths_of(sn, su, bump));
                            assert!(
                                raised >= base - 1e-9,
                                "positive {sp} -> {bump} moved centroid {base} -> {raised}"
                            );
                        }
                        if bump > sn {
                            let raised = engine.defuzzify(&strengths_of(bump, su, sp));
                            assert!(
                                raised <= base + 1e-9,
                                "negative {sn} -> {bump} moved centroid {base} -> {raised}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SentimentEngine>();
    }
}
