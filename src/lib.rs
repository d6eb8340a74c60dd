//! Luhnix - recover unknown digits in Luhn-checked numbers
//!
//! A masked number uses a wildcard (`?` by default) for each unknown digit.
//! A single wildcard is solved directly; with several wildcards every
//! combination of all but the last is enumerated and the last one is solved,
//! yielding every Luhn-valid completion.

pub mod completer;
pub mod config;
pub mod diagnostics;
pub mod luhn;
pub mod query;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export the main public API
pub use completer::{Completer, Completion};
pub use config::{DEFAULT_WILDCARD, MaskConfig};
pub use diagnostics::Diagnostic;
pub use luhn::{LuhnSolver, MissingDigit, SolveResult};
pub use query::{Expansion, QueryExpander, QueryString};
pub use utils::{UtilsError, is_luhn_valid, validate_masked_number};

/// Solve the single wildcard of `input` using the default `?` marker
///
/// # Examples
///
/// ```
/// let result = luhnix::solve("7992739871?");
/// assert!(result.is_eligible());
/// assert_eq!(result.missing_value(), Some(3));
/// assert_eq!(result.completed(), Some("79927398713"));
/// ```
pub fn solve(input: &str) -> SolveResult {
    LuhnSolver::new().solve(input)
}

/// Expand `input` into query strings that each keep only the last wildcard
///
/// Returns an empty list if the input contains anything other than digits
/// and wildcards.
///
/// # Examples
///
/// ```
/// let queries = luhnix::expand("12??34");
/// assert_eq!(queries.len(), 10);
/// assert_eq!(queries.first().map(String::as_str), Some("120?34"));
/// assert_eq!(queries.last().map(String::as_str), Some("129?34"));
/// ```
pub fn expand(input: &str) -> Vec<String> {
    QueryExpander::new().expand(input).into_strings()
}

/// Every Luhn-valid completion of `input`, in enumeration order
///
/// # Examples
///
/// ```
/// let candidates = luhnix::complete("79927398?1?");
/// assert_eq!(candidates.len(), 10);
/// assert!(candidates.iter().any(|c| c == "79927398713"));
/// ```
pub fn complete(input: &str) -> Vec<String> {
    Completer::new().complete(input).into_candidates()
}

/// The digit that makes `input` Luhn-valid, if it has a wildcard to resolve
pub fn find_missing_digit(input: &str) -> Option<u8> {
    solve(input).missing_value()
}

/// `input` with its wildcard replaced by the digit that makes it Luhn-valid
pub fn valid_number(input: &str) -> Option<String> {
    solve(input).into_completed()
}

/// Validate `input` and return its Luhn-valid completions
///
/// # Errors
///
/// This function will return an error if:
/// * The input is empty
/// * The input contains characters other than ASCII digits and `?`
///
/// # Examples
///
/// ```
/// use luhnix::find_completions;
///
/// match find_completions("3798721411?????") {
///     Ok(candidates) => println!("{} candidates", candidates.len()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_completions(input: &str) -> Result<Vec<String>, UtilsError> {
    validate_masked_number(input, DEFAULT_WILDCARD)?;
    Ok(complete(input))
}
