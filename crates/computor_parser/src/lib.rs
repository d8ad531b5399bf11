pub mod coefficients;
pub mod error;
pub mod normalize;
pub mod term;

pub use coefficients::Coefficients;
pub use error::ParseError;
pub use normalize::normalize;
pub use term::{classify, parse_terms, Monomial};

/// Parse a raw equation string all the way to an accumulated coefficient
/// map: normalization into signed monomial tokens, then per-token
/// classification and like-degree merging.
pub fn parse_equation(raw: &str) -> Result<Coefficients, ParseError> {
    let tokens = normalize(raw)?;
    parse_terms(&tokens)
}
