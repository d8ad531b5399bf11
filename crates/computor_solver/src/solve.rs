use std::fmt;

use tracing::debug;

use crate::error::SolveError;
use crate::format::format_value;
use crate::reduce::Reduction;
use crate::sqrt::newton_sqrt;

/// Root set of a reduced equation of degree at most 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    /// `0 = 0`: every real satisfies the equation.
    AllReals,
    /// `c = 0` with `c != 0`: a contradiction.
    Impossible,
    /// A single real root (degree 1, or a quadratic double root).
    One(f64),
    /// Two real roots, the `+sqrt(delta)` root first.
    Two { first: f64, second: f64 },
    /// Complex conjugate pair `real ± i * imaginary`.
    ComplexPair { real: f64, imaginary: f64 },
}

/// Solve a reduced equation. Fails when the degree exceeds the ceiling,
/// which the coefficient vector extraction enforces.
pub fn solve(reduction: &Reduction) -> Result<Solution, SolveError> {
    let [c0, c1, c2] = reduction.coefficient_vector()?;
    let degree = reduction.degree();
    debug!(degree, c0, c1, c2, "solving reduced equation");

    let solution = match degree {
        0 => {
            if c0 == 0.0 {
                Solution::AllReals
            } else {
                Solution::Impossible
            }
        }
        1 => {
            if c0 == 0.0 {
                Solution::One(0.0)
            } else {
                Solution::One(-c0 / c1)
            }
        }
        _ => solve_quadratic(c0, c1, c2)?,
    };
    Ok(solution)
}

fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> Result<Solution, SolveError> {
    if c0 == 0.0 && c1 == 0.0 {
        // Double root at the origin, reported as the single value 0.
        return Ok(Solution::One(0.0));
    }
    if c0 == 0.0 {
        return Ok(Solution::Two {
            first: 0.0,
            second: -c1 / c2,
        });
    }

    let discriminant = c1 * c1 - 4.0 * c2 * c0;
    debug!(discriminant, "quadratic dispatch");

    if discriminant > 0.0 {
        let sqrt_delta = newton_sqrt(discriminant)?;
        Ok(Solution::Two {
            first: (-c1 + sqrt_delta) / (2.0 * c2),
            second: (-c1 - sqrt_delta) / (2.0 * c2),
        })
    } else if discriminant < 0.0 {
        let sqrt_delta = newton_sqrt(-discriminant)?;
        Ok(Solution::ComplexPair {
            real: -c1 / (2.0 * c2),
            imaginary: sqrt_delta / (2.0 * c2),
        })
    } else {
        Ok(Solution::One(-c1 / (2.0 * c2)))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::AllReals => write!(f, "Solution:\nx = any real"),
            Solution::Impossible => write!(f, "Solution:\nThis is impossible to solve."),
            Solution::One(root) => write!(f, "Solution:\nx = {}", format_value(*root)),
            Solution::Two { first, second } => write!(
                f,
                "Solutions:\nx1 = {} and x2 = {}",
                format_value(*first),
                format_value(*second)
            ),
            Solution::ComplexPair { real, imaginary } => {
                let re = format_value(*real);
                if *imaginary == 1.0 {
                    write!(f, "Solutions:\nx1 = {re} + i and x2 = {re} - i")
                } else {
                    let im = format_value(*imaginary);
                    write!(f, "Solutions:\nx1 = {re} + i * {im} and x2 = {re} - i * {im}")
                }
            }
        }
    }
}
