use crate::error::ParseError;

/// Every character an equation may contain once whitespace is stripped.
const VALID_CHARSET: &str = "0123456789.*-+=x^";

/// Normalize a raw equation into an ordered sequence of signed monomial
/// tokens representing `lhs - rhs = 0`.
///
/// Lowercases, strips whitespace, validates the charset and the single
/// `=`, collapses sign runs (`--x` reads as `+x`), then merges both sides
/// with the right-hand side negated. Every returned token starts with an
/// explicit `+` or `-`.
pub fn normalize(raw: &str) -> Result<Vec<String>, ParseError> {
    let mut compact: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if compact.matches('=').count() != 1 {
        return Err(ParseError::MalformedEquation);
    }
    if let Some(bad) = compact.chars().find(|c| !VALID_CHARSET.contains(*c)) {
        return Err(ParseError::InvalidCharacter(bad));
    }

    compact = collapse_sign_runs(compact);

    let Some((lhs, rhs)) = compact.split_once('=') else {
        return Err(ParseError::MalformedEquation);
    };

    let mut tokens = Vec::new();
    for term in split_terms(lhs) {
        if term.starts_with(['+', '-']) {
            tokens.push(term);
        } else {
            tokens.push(format!("+{term}"));
        }
    }
    for term in split_terms(rhs) {
        tokens.push(flip_sign(&term));
    }
    Ok(tokens)
}

/// Reduce adjacent sign pairs until none remains, so a run of any length
/// collapses to the sign of its parity: `++`/`--` become `+`, `+-`/`-+`
/// become `-`.
fn collapse_sign_runs(mut text: String) -> String {
    loop {
        let collapsed = text
            .replace("++", "+")
            .replace("--", "+")
            .replace("+-", "-")
            .replace("-+", "-");
        if collapsed == text {
            return collapsed;
        }
        text = collapsed;
    }
}

/// Split one side of the equation into monomial fragments. A `+`/`-`
/// opens a new fragment (and stays attached to it) unless it is the
/// side's leading character. Empty fragments are dropped.
fn split_terms(side: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    for c in side.chars() {
        if (c == '+' || c == '-') && !current.is_empty() {
            terms.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        terms.push(current);
    }
    terms
}

fn flip_sign(term: &str) -> String {
    if let Some(rest) = term.strip_prefix('-') {
        format!("+{rest}")
    } else if let Some(rest) = term.strip_prefix('+') {
        format!("-{rest}")
    } else {
        format!("-{term}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_signs_both_sides() {
        let tokens = normalize("5 + 4 * x = x^2").unwrap();
        assert_eq!(tokens, vec!["+5", "+4*x", "-x^2"]);
    }

    #[test]
    fn rhs_signs_are_inverted() {
        let tokens = normalize("0 = -3 + x - 2").unwrap();
        assert_eq!(tokens, vec!["+0", "+3", "-x", "+2"]);
    }

    #[test]
    fn sign_runs_collapse_by_parity() {
        assert_eq!(normalize("5 - - x = 0").unwrap(), normalize("5 + x = 0").unwrap());
        assert_eq!(normalize("5 --- x = 0").unwrap(), normalize("5 - x = 0").unwrap());
        assert_eq!(normalize("-+-+x = 0").unwrap(), vec!["+x", "-0"]);
    }

    #[test]
    fn uppercase_variable_is_accepted() {
        let tokens = normalize("2 * X^2 = 0").unwrap();
        assert_eq!(tokens, vec!["+2*x^2", "-0"]);
    }

    #[test]
    fn missing_equals_is_rejected() {
        assert_eq!(normalize("x + 1"), Err(ParseError::MalformedEquation));
    }

    #[test]
    fn double_equals_is_rejected() {
        assert_eq!(normalize("x = 1 = 2"), Err(ParseError::MalformedEquation));
    }

    #[test]
    fn foreign_characters_are_rejected() {
        assert_eq!(normalize("y + 1 = 0"), Err(ParseError::InvalidCharacter('y')));
        assert_eq!(normalize("2x / 3 = 0"), Err(ParseError::InvalidCharacter('/')));
    }

    #[test]
    fn exponent_sign_detaches_into_its_own_fragment() {
        // "x^-2" cannot be a monomial; the minus opens a new fragment and
        // the dangling "x^" is left for the term parser to reject.
        let tokens = normalize("x^-2 = 0").unwrap();
        assert_eq!(tokens, vec!["+x^", "-2", "-0"]);
    }
}
