use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::universe::Universe;

/// Triangular membership function with vertices `a <= b <= c`.
///
/// Zero outside `[a, c]`, rising linearly to 1 at `b`, falling linearly back
/// to 0 at `c`. A degenerate vertex pair (`a == b` or `b == c`) forms a
/// vertical edge that evaluates to 1 at the shared abscissa, which is what
/// lets shoulder terms like `[0, 0, 0.5]` fire fully at the range boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ConfigError> {
        let tri = Self { a, b, c };
        tri.validate()?;
        Ok(tri)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Self { a, b, c } = *self;
        if a.is_finite() && b.is_finite() && c.is_finite() && a <= b && b <= c {
            Ok(())
        } else {
            Err(ConfigError::InvalidTriangle { a, b, c })
        }
    }

    /// Membership degree at a single point.
    pub fn degree(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;

        if x < a || x > c {
            0.0
        } else if x <= b {
            if b == a {
                1.0
            } else {
                (x - a) / (b - a)
            }
        } else if x < c {
            (c - x) / (c - b)
        } else {
            // x == c on a falling edge
            0.0
        }
    }

    /// Membership curve over an entire sample grid.
    ///
    /// Same evaluator as [`Triangle::degree`] applied per sample, so the
    /// batch and single-point shapes agree exactly at grid points.
    pub fn sample(&self, universe: &Universe) -> Vec<f64> {
        universe.samples().iter().map(|&x| self.degree(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::universe::UniverseDef;

    #[test]
    fn peak_and_feet() {
        let tri = Triangle::new(0.0, 5.0, 10.0).unwrap();

        assert_eq!(tri.degree(0.0), 0.0);
        assert_eq!(tri.degree(2.5), 0.5);
        assert_eq!(tri.degree(5.0), 1.0);
        assert_eq!(tri.degree(7.5), 0.5);
        assert_eq!(tri.degree(10.0), 0.0);
        assert_eq!(tri.degree(-1.0), 0.0);
        assert_eq!(tri.degree(11.0), 0.0);
    }

    #[test]
    fn degenerate_left_shoulder() {
        let tri = Triangle::new(0.0, 0.0, 0.5).unwrap();

        assert_eq!(tri.degree(0.0), 1.0);
        assert_eq!(tri.degree(0.25), 0.5);
        assert_eq!(tri.degree(0.5), 0.0);
    }

    #[test]
    fn degenerate_right_shoulder() {
        let tri = Triangle::new(0.5, 1.0, 1.0).unwrap();

        assert_eq!(tri.degree(0.5), 0.0);
        assert_eq!(tri.degree(0.75), 0.5);
        assert_eq!(tri.degree(1.0), 1.0);
    }

    #[test]
    fn rejects_out_of_order_vertices() {
        assert!(Triangle::new(0.6, 0.5, 1.0).is_err());
        assert!(Triangle::new(0.0, 1.0, 0.5).is_err());
        assert!(Triangle::new(0.0, f64::NAN, 1.0).is_err());
        assert!(Triangle::new(0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn batch_matches_point_evaluation() {
        let universe = Universe::new(UniverseDef::new(0.0, 1.0, 0.1)).unwrap();
        let tri = Triangle::new(0.0, 0.5, 1.0).unwrap();

        let curve = tri.sample(&universe);

        for (&x, &m) in universe.samples().iter().zip(curve.iter()) {
            assert_eq!(m.to_bits(), tri.degree(x).to_bits());
        }
    }

    fn sorted(mut vs: [f64; 3]) -> [f64; 3] {
        vs.sort_by(|x, y| x.total_cmp(y));
        vs
    }

    proptest! {
        #[test]
        fn zero_strictly_outside_support(
            vs in prop::array::uniform3(0.0..10.0f64),
            x in -5.0..15.0f64,
        ) {
            let [a, b, c] = sorted(vs);
            let tri = Triangle::new(a, b, c).unwrap();

            if x < a || x > c {
                prop_assert_eq!(tri.degree(x), 0.0);
            }
        }

        #[test]
        fn peak_is_exactly_one(vs in prop::array::uniform3(0.0..10.0f64)) {
            let [a, b, c] = sorted(vs);
            let tri = Triangle::new(a, b, c).unwrap();

            prop_assert_eq!(tri.degree(b), 1.0);
        }

        #[test]
        fn degree_stays_in_unit_interval(
            vs in prop::array::uniform3(0.0..10.0f64),
            x in -5.0..15.0f64,
        ) {
            let [a, b, c] = sorted(vs);
            let tri = Triangle::new(a, b, c).unwrap();
            let d = tri.degree(x);

            prop_assert!((0.0..=1.0).contains(&d));
        }
    }
}
