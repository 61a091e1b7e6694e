use fixed_map::Map;
use serde::{Deserialize, Serialize};

use crate::ops::{TConorm, TNorm};
use crate::terms::{InputLevel, SentimentLabel};

/// Firing strengths per output term, recomputed for every input pair.
pub type Strengths = Map<SentimentLabel, f64>;

/// The fixed rule matrix: one consequent per (pos level, neg level) pair.
///
/// Rows are positive-signal levels, columns negative-signal levels, both in
/// Low/Medium/High order. The default table is antisymmetric under swapping
/// the two signals together with Negative and Positive, so neither input
/// direction is privileged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    table: [[SentimentLabel; 3]; 3],
}

impl Default for RuleTable {
    fn default() -> Self {
        use SentimentLabel::{Negative, Neutral, Positive};

        Self {
            table: [
                [Neutral, Negative, Negative],
                [Positive, Neutral, Negative],
                [Positive, Positive, Neutral],
            ],
        }
    }
}

impl RuleTable {
    pub fn new(table: [[SentimentLabel; 3]; 3]) -> Self {
        Self { table }
    }

    /// The output term fired by a (pos, neg) level pair.
    pub fn consequent(&self, pos: InputLevel, neg: InputLevel) -> SentimentLabel {
        self.table[pos.index()][neg.index()]
    }

    /// Evaluate all nine rules against the fuzzified inputs.
    ///
    /// Each rule's strength is `and_op` over its two antecedent degrees;
    /// rules sharing a consequent are folded with `or_op`. Every output
    /// term is present in the result, at strength 0 when none of its rules
    /// fire.
    pub fn fire(
        &self,
        pos: &Map<InputLevel, f64>,
        neg: &Map<InputLevel, f64>,
        and_op: TNorm,
        or_op: TConorm,
    ) -> Strengths {
        let mut strengths = Strengths::new();
        for label in SentimentLabel::ALL {
            strengths.insert(label, 0.0);
        }

        for p in InputLevel::ALL {
            let pos_degree = pos.get(p).copied().unwrap_or(0.0);

            for n in InputLevel::ALL {
                let neg_degree = neg.get(n).copied().unwrap_or(0.0);
                let strength = and_op.apply(pos_degree, neg_degree);
                let target = self.consequent(p, n);
                let folded = or_op.apply(strengths.get(target).copied().unwrap_or(0.0), strength);

                strengths.insert(target, folded);
            }
        }

        strengths
    }
}
