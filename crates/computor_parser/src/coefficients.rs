use std::collections::BTreeMap;

/// Accumulated coefficients of a reduced polynomial, keyed by degree.
///
/// Like-degree terms merge by addition on insert. Iteration is always by
/// ascending degree. A zero-valued entry may exist after cancellation
/// (e.g. `x - x`); it is semantically absent for display purposes but
/// still visible to degree and vector extraction logic.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Coefficients(BTreeMap<u32, f64>);

impl Coefficients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `coefficient` into the entry for `degree`, creating it if absent.
    pub fn accumulate(&mut self, degree: u32, coefficient: f64) {
        *self.0.entry(degree).or_insert(0.0) += coefficient;
    }

    /// Coefficient at `degree`, 0.0 when no entry exists.
    pub fn get(&self, degree: u32) -> f64 {
        self.0.get(&degree).copied().unwrap_or(0.0)
    }

    /// Entries in ascending degree order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(&degree, &coeff)| (degree, coeff))
    }

    /// Highest degree carrying a nonzero coefficient, or 0 if none.
    pub fn degree(&self) -> u32 {
        self.0
            .iter()
            .rev()
            .find(|&(_, &coeff)| coeff != 0.0)
            .map(|(&degree, _)| degree)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u32, f64)> for Coefficients {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        let mut coeffs = Self::new();
        for (degree, coefficient) in iter {
            coeffs.accumulate(degree, coefficient);
        }
        coeffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_merges_like_degrees() {
        let mut coeffs = Coefficients::new();
        coeffs.accumulate(2, 1.0);
        coeffs.accumulate(2, 2.0);
        assert_eq!(coeffs.get(2), 3.0);
    }

    #[test]
    fn degree_skips_cancelled_entries() {
        let mut coeffs = Coefficients::new();
        coeffs.accumulate(3, 1.0);
        coeffs.accumulate(3, -1.0);
        coeffs.accumulate(1, 4.0);
        assert_eq!(coeffs.degree(), 1);
    }

    #[test]
    fn degree_of_empty_map_is_zero() {
        assert_eq!(Coefficients::new().degree(), 0);
    }

    #[test]
    fn iteration_is_ascending() {
        let coeffs: Coefficients = [(2, 1.0), (0, 5.0), (1, -3.0)].into_iter().collect();
        let degrees: Vec<u32> = coeffs.iter().map(|(d, _)| d).collect();
        assert_eq!(degrees, vec![0, 1, 2]);
    }
}
