use nom::branch::alt;
use nom::bytes::complete::{tag, take_while_m_n};
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;

use crate::coefficients::Coefficients;
use crate::error::ParseError;

/// One classified monomial token: `coefficient * x^degree`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monomial {
    pub degree: u32,
    pub coefficient: f64,
}

// Optional leading sign, as a multiplier.
fn sign(input: &str) -> IResult<&str, f64> {
    let (rest, s) = opt(one_of("+-"))(input)?;
    Ok((rest, if s == Some('-') { -1.0 } else { 1.0 }))
}

// `\d*(\.\d+)?` — may match empty.
fn optional_decimal(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit0, opt(preceded(char('.'), digit1))))(input)
}

// `\d+(\.\d+)?` — integer digits required, so a bare `.5` or a trailing
// `3.` is not a standalone number.
fn required_decimal(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(preceded(char('.'), digit1))))(input)
}

fn parse_magnitude<'a>(origin: &'a str, digits: &str) -> Result<f64, nom::Err<nom::error::Error<&'a str>>> {
    digits.parse().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(origin, nom::error::ErrorKind::Float))
    })
}

/// `[+-]?\d+(\.\d+)?` — a complete signed numeric literal.
fn signed_number(input: &str) -> IResult<&str, f64> {
    let (rest, sign_val) = sign(input)?;
    let (rest, digits) = required_decimal(rest)?;
    let magnitude = parse_magnitude(input, digits)?;
    Ok((rest, sign_val * magnitude))
}

/// `[+-]?\d*(\.\d+)?\*?` — the optional coefficient in front of a
/// variable part. An absent literal (or a bare sign) means magnitude 1.
fn coefficient_prefix(input: &str) -> IResult<&str, f64> {
    let (rest, sign_val) = sign(input)?;
    let (rest, digits) = optional_decimal(rest)?;
    let (rest, _) = opt(char('*'))(rest)?;
    let magnitude = if digits.is_empty() {
        1.0
    } else {
        parse_magnitude(input, digits)?
    };
    Ok((rest, sign_val * magnitude))
}

// One or two exponent digits, per the accepted `x^0`..`x^99` syntax.
fn exponent(input: &str) -> IResult<&str, u32> {
    let (rest, digits) = take_while_m_n(1, 2, |c: char| c.is_ascii_digit())(input)?;
    let value = digits.parse().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    Ok((rest, value))
}

fn degree_zero(token: &str) -> Option<Monomial> {
    // A bare signed number, or a coefficient against `x^0` / the literal `1`.
    if let Ok((_, coefficient)) = all_consuming(signed_number)(token) {
        return Some(Monomial { degree: 0, coefficient });
    }
    let unit = terminated(coefficient_prefix, alt((tag("x^0"), tag("1"))));
    all_consuming(unit)(token)
        .ok()
        .map(|(_, coefficient)| Monomial { degree: 0, coefficient })
}

fn degree_one(token: &str) -> Option<Monomial> {
    let linear = terminated(coefficient_prefix, alt((tag("x^1"), tag("x"))));
    all_consuming(linear)(token)
        .ok()
        .map(|(_, coefficient)| Monomial { degree: 1, coefficient })
}

fn degree_two(token: &str) -> Option<Monomial> {
    let quadratic = terminated(coefficient_prefix, tag("x^2"));
    all_consuming(quadratic)(token)
        .ok()
        .map(|(_, coefficient)| Monomial { degree: 2, coefficient })
}

fn degree_general(token: &str) -> Option<Monomial> {
    let power = pair(coefficient_prefix, preceded(tag("x^"), exponent));
    all_consuming(power)(token)
        .ok()
        .map(|(_, (coefficient, degree))| Monomial { degree, coefficient })
}

/// Classify a signed monomial token, trying the degree-0, degree-1,
/// degree-2 and general `x^n` shapes in that order; first full match
/// wins. Returns `None` when no shape consumes the whole token.
pub fn classify(token: &str) -> Option<Monomial> {
    degree_zero(token)
        .or_else(|| degree_one(token))
        .or_else(|| degree_two(token))
        .or_else(|| degree_general(token))
}

/// Accumulate a normalized token sequence into a coefficient map.
///
/// Unrecognizable tokens are collected across the whole sequence and
/// reported together, never dropped.
pub fn parse_terms(tokens: &[String]) -> Result<Coefficients, ParseError> {
    let mut coefficients = Coefficients::new();
    let mut rejected = Vec::new();
    for token in tokens {
        match classify(token) {
            Some(monomial) => coefficients.accumulate(monomial.degree, monomial.coefficient),
            None => rejected.push(token.clone()),
        }
    }
    if rejected.is_empty() {
        Ok(coefficients)
    } else {
        Err(ParseError::UnparsedTerms(rejected))
    }
}
