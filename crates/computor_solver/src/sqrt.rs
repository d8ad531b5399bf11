use crate::error::SolveError;

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 10;

/// Fixed-point square root: Newton iteration from `value / 2`, at most
/// ten rounds, converged once `max(guess, value/guess)` and
/// `min(guess, value/guess)` are within `1e-10` of each other. After the
/// tenth round the last guess is returned as-is, best effort.
///
/// Call sites only pass `|Δ|` with `Δ ≠ 0`, but non-positive input is
/// still refused.
pub fn newton_sqrt(value: f64) -> Result<f64, SolveError> {
    if value <= 0.0 {
        return Err(SolveError::SqrtDomain(value));
    }
    let mut guess = value / 2.0;
    for _ in 0..MAX_ITERATIONS {
        let quotient = value / guess;
        let (bigger, smaller) = if quotient >= guess {
            (quotient, guess)
        } else {
            (guess, quotient)
        };
        if bigger - smaller < TOLERANCE {
            return Ok(guess);
        }
        guess = (guess + quotient) / 2.0;
    }
    Ok(guess)
}
