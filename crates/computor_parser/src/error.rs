use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error(
        "the provided expression is not a polynomial equation, or contains unexpected characters"
    )]
    MalformedEquation,

    #[error("unexpected character '{0}' in expression")]
    InvalidCharacter(char),

    #[error(
        "it seems that following term(s) could not be parsed:\n{}\nPlease check them before retrying",
        .0.join("\n")
    )]
    UnparsedTerms(Vec<String>),
}
