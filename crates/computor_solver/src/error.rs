use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error(
        "polynomial degree is {0}, greater than 2; this solver will not attempt to solve the equation"
    )]
    DegreeTooHigh(u32),

    #[error("cannot take the square root of {0}: the value is not > 0")]
    SqrtDomain(f64),
}
