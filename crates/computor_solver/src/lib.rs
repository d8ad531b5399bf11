pub mod error;
pub mod format;
pub mod reduce;
pub mod solve;
pub mod sqrt;

pub use error::SolveError;
pub use format::format_value;
pub use reduce::Reduction;
pub use solve::{solve, Solution};
pub use sqrt::newton_sqrt;
