use fixed_map::Key;
use fixed_map::Map;

use crate::membership::Triangle;
use crate::universe::Universe;

/// A named input or output dimension: a universe plus one triangular
/// membership function per linguistic term.
///
/// Built once at engine construction and read-only afterwards, so shared
/// references are safe across threads without locking.
pub struct LinguisticVariable<T>
where
    T: Key,
{
    name: &'static str,
    universe: Universe,
    terms: Map<T, Triangle>,
}

impl<T> LinguisticVariable<T>
where
    T: Key + Copy,
{
    pub fn new(name: &'static str, universe: Universe, terms: Map<T, Triangle>) -> Self {
        Self {
            name,
            universe,
            terms,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Map a crisp reading to one membership degree per term.
    ///
    /// The reading is clamped onto the sample grid first, so values at or
    /// past the exclusive upper bound evaluate at the last sample rather
    /// than off the grid. Degrees are not normalized across terms; with
    /// overlapping triangles they may sum to more or less than 1.
    pub fn fuzzify(&self, x: f64) -> Map<T, f64> {
        let x = self.universe.clamp(x);
        let mut degrees = Map::new();

        for (term, tri) in self.terms.iter() {
            degrees.insert(term, tri.degree(x));
        }

        degrees
    }

    /// The membership curve of one term sampled over the variable's grid.
    pub fn term_curve(&self, term: T) -> Option<Vec<f64>> {
        self.terms.get(term).map(|tri| tri.sample(&self.universe))
    }
}
