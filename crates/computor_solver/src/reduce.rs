use computor_parser::Coefficients;

use crate::error::SolveError;
use crate::format::format_value;

/// Highest degree the solver will accept.
pub const MAX_DEGREE: u32 = 2;

/// Canonical reduced form of an equation: display string, effective
/// degree, and the bounded coefficient vector the solver runs on.
///
/// The vector is derived once from the coefficient map and never mutated;
/// it only becomes observable through [`Reduction::coefficient_vector`],
/// which enforces the degree ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    canonical: String,
    degree: u32,
    vector: [f64; 3],
}

impl Reduction {
    pub fn from_coefficients(coefficients: &Coefficients) -> Self {
        let mut rendered = String::new();
        for (degree, coefficient) in coefficients.iter() {
            if coefficient == 0.0 {
                continue;
            }
            if rendered.is_empty() {
                if coefficient < 0.0 {
                    rendered.push('-');
                }
            } else {
                rendered.push_str(if coefficient < 0.0 { " - " } else { " + " });
            }
            if coefficient.abs() != 1.0 {
                // Precision is derived from the signed value, so the sign
                // character widens the significant-digit budget; the sign
                // itself is carried by the joiner above.
                let formatted = format_value(coefficient);
                rendered.push_str(formatted.trim_start_matches('-'));
                rendered.push_str(" * ");
            }
            rendered.push_str(&format!("x^{degree}"));
        }

        let canonical = if rendered.is_empty() {
            "0 = 0".to_string()
        } else {
            format!("{rendered} = 0")
        };

        let mut vector = [0.0; 3];
        for (degree, coefficient) in coefficients.iter() {
            if coefficient != 0.0 && degree <= MAX_DEGREE {
                vector[degree as usize] = coefficient;
            }
        }

        Self {
            canonical,
            degree: coefficients.degree(),
            vector,
        }
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// The `[c0, c1, c2]` vector, refused when the effective degree
    /// exceeds the solvable ceiling.
    pub fn coefficient_vector(&self) -> Result<[f64; 3], SolveError> {
        if self.degree > MAX_DEGREE {
            return Err(SolveError::DegreeTooHigh(self.degree));
        }
        Ok(self.vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduction(entries: &[(u32, f64)]) -> Reduction {
        Reduction::from_coefficients(&entries.iter().copied().collect())
    }

    #[test]
    fn terms_render_ascending_with_joined_signs() {
        let r = reduction(&[(2, 1.0), (0, 6.0), (1, -5.0)]);
        assert_eq!(r.canonical(), "6 * x^0 - 5 * x^1 + x^2 = 0");
        assert_eq!(r.degree(), 2);
    }

    #[test]
    fn unit_coefficients_drop_their_prefix() {
        assert_eq!(reduction(&[(1, 1.0)]).canonical(), "x^1 = 0");
        assert_eq!(reduction(&[(1, -1.0)]).canonical(), "-x^1 = 0");
        assert_eq!(reduction(&[(0, 2.0), (1, -1.0)]).canonical(), "2 * x^0 - x^1 = 0");
    }

    #[test]
    fn negative_coefficients_keep_the_signed_precision_width() {
        // -0.123456789 displays as "-0": an 8-significant-digit budget,
        // one more than its positive counterpart gets.
        let r = reduction(&[(0, 1.0), (1, -0.123456789)]);
        assert_eq!(r.canonical(), "x^0 - 0.12345679 * x^1 = 0");
        let r = reduction(&[(0, 1.0), (1, 0.123456789)]);
        assert_eq!(r.canonical(), "x^0 + 0.1234568 * x^1 = 0");
    }

    #[test]
    fn zero_coefficients_are_invisible() {
        let r = reduction(&[(0, 0.0), (2, 3.0)]);
        assert_eq!(r.canonical(), "3 * x^2 = 0");
        assert_eq!(r.degree(), 2);
    }

    #[test]
    fn all_zero_map_is_the_null_equation() {
        let r = reduction(&[(0, 0.0)]);
        assert_eq!(r.canonical(), "0 = 0");
        assert_eq!(r.degree(), 0);
        assert_eq!(r.coefficient_vector().unwrap(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn vector_holds_the_first_three_degrees() {
        let r = reduction(&[(0, 6.0), (1, -5.0), (2, 1.0)]);
        assert_eq!(r.coefficient_vector().unwrap(), [6.0, -5.0, 1.0]);
    }

    #[test]
    fn vector_is_refused_above_the_ceiling() {
        let r = reduction(&[(3, 1.0), (0, -1.0)]);
        assert_eq!(r.degree(), 3);
        assert_eq!(r.coefficient_vector(), Err(SolveError::DegreeTooHigh(3)));
    }

    #[test]
    fn cancelled_high_degree_does_not_trip_the_ceiling() {
        let r = reduction(&[(5, 2.0), (5, -2.0), (1, 1.0)]);
        assert_eq!(r.degree(), 1);
        assert!(r.coefficient_vector().is_ok());
    }
}
