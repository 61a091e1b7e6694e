use std::fmt;

use fixed_map::Key;
use serde::{Deserialize, Serialize};

/// Linguistic levels of a crisp input signal.
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum InputLevel {
    Low,
    Medium,
    High,
}

impl InputLevel {
    pub const ALL: [InputLevel; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Output linguistic terms, doubling as the final sentiment labels.
///
/// Ordered from most negative to most positive so the variant order matches
/// the direction of the output universe.
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [Self::Negative, Self::Neutral, Self::Positive];

    pub fn index(self) -> usize {
        match self {
            Self::Negative => 0,
            Self::Neutral => 1,
            Self::Positive => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
