use crate::terms::SentimentLabel;
use crate::universe::Universe;

/// Buckets a defuzzified score into one of the three labels by exact thirds
/// of the declared output range.
///
/// Total over the reals with boundary scores landing on the upper side, so
/// on the default `[0, 10)` range 10/3 is Neutral and 20/3 is Positive.
/// There is no gap between the buckets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelMap {
    lo: f64,
    hi: f64,
}

impl LabelMap {
    pub fn new(universe: &Universe) -> Self {
        let def = universe.def();
        let span = def.stop - def.start;

        Self {
            lo: def.start + span / 3.0,
            hi: def.start + 2.0 * span / 3.0,
        }
    }

    pub fn label(&self, score: f64) -> SentimentLabel {
        if score < self.lo {
            SentimentLabel::Negative
        } else if score < self.hi {
            SentimentLabel::Neutral
        } else {
            SentimentLabel::Positive
        }
    }
}
