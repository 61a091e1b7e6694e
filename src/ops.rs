use std::iter::Sum;

use num::Float;
use serde::{Deserialize, Serialize};

/// And method combining the two antecedent degrees of a rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TNorm {
    Min,
    Product,
}

impl TNorm {
    pub fn apply<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Min => F::min(u, v),
            Self::Product => u * v,
        }
    }
}

/// Or method folding rules that share a consequent, also used for the
/// pointwise union of clipped output sets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TConorm {
    Max,
    ProbabilisticSum,
}

impl TConorm {
    pub fn apply<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => F::max(u, v),
            Self::ProbabilisticSum => u + v - u * v,
        }
    }
}

/// Method for collapsing an aggregated membership curve to a crisp value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Defuzz {
    /// Center of gravity over the sample grid.
    Centroid,
    /// Mean of the samples at which the curve attains its maximum.
    MeanOfMaximum,
}

impl Defuzz {
    /// Collapse `membership` over `universe`, or `None` when the curve
    /// carries no mass to defuzzify.
    pub fn apply<F: Float + Sum>(self, universe: &[F], membership: &[F]) -> Option<F> {
        debug_assert_eq!(universe.len(), membership.len());

        let eps = F::from(1e-10).expect("unreachable");

        match self {
            Self::Centroid => {
                let den = membership.iter().copied().sum::<F>();
                if den < eps {
                    return None;
                }

                let num = universe
                    .iter()
                    .copied()
                    .zip(membership.iter().copied())
                    .map(|(x, m)| x * m)
                    .sum::<F>();

                Some(num / den)
            },
            Self::MeanOfMaximum => {
                let peak = membership.iter().copied().reduce(F::max)?;
                if peak < eps {
                    return None;
                }

                let (len, sum) = universe
                    .iter()
                    .copied()
                    .zip(membership.iter().copied())
                    .filter(|&(_, m)| m == peak)
                    .fold((0usize, F::zero()), |(n, acc), (x, _)| (n + 1, acc + x));

                Some(sum / F::from(len).expect("unreachable"))
            },
        }
    }
}

#[test]
fn tnorm_combinators() {
    assert_eq!(TNorm::Min.apply(0.3, 0.7), 0.3);
    assert_eq!(TNorm::Product.apply(0.5, 0.6), 0.3);
}

#[test]
fn tconorm_combinators() {
    assert_eq!(TConorm::Max.apply(0.3, 0.7), 0.7);
    assert!((TConorm::ProbabilisticSum.apply(0.5, 0.6) - 0.8).abs() < 1e-12);
}

#[test]
fn centroid_of_symmetric_triangle() {
    let universe = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let membership = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0, 0.8, 0.6, 0.4, 0.2];

    let c = Defuzz::Centroid.apply(&universe, &membership).unwrap();

    assert!((c - 5.0).abs() < 1e-9);
}

#[test]
fn centroid_of_uniform_mass_is_grid_mean() {
    let universe = [0.0, 1.0, 2.0, 3.0];
    let membership = [0.5, 0.5, 0.5, 0.5];

    let c = Defuzz::Centroid.apply(&universe, &membership).unwrap();

    assert!((c - 1.5).abs() < 1e-12);
}

#[test]
fn zero_mass_has_no_centroid() {
    let universe = [0.0, 1.0, 2.0];
    let membership = [0.0, 0.0, 0.0];

    assert_eq!(Defuzz::Centroid.apply(&universe, &membership), None);
    assert_eq!(Defuzz::MeanOfMaximum.apply(&universe, &membership), None);
}

#[test]
fn mean_of_maximum_averages_the_plateau() {
    let universe = [0.0, 1.0, 2.0, 3.0, 4.0];
    let membership = [0.1, 0.8, 0.8, 0.8, 0.2];

    let c = Defuzz::MeanOfMaximum.apply(&universe, &membership).unwrap();

    assert!((c - 2.0).abs() < 1e-12);
}
