//! Single missing digit solver

mod core;
mod types;

pub use self::core::LuhnSolver;
pub use types::{MissingDigit, SolveResult};
