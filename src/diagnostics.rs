use thiserror::Error;

/// Advisory notes produced while validating or solving a masked number.
///
/// Positions are 1-indexed from the left.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("Invalid character '{character}' at position {position}; only digits and the wildcard are allowed")]
    InvalidCharacter { character: char, position: usize },
    #[error("Extra '{character}' at position {position} ignored; only one missing digit can be solved")]
    ToleratedExtraWildcard { character: char, position: usize },
    #[error("Checksum is already a multiple of 10 and there is no wildcard to resolve")]
    AmbiguousZeroModulus,
    #[error("No wildcard to resolve; checksum modulus is {modulus}")]
    NoWildcard { modulus: u8 },
    #[error("Too many wildcards to enumerate: {count} (limit {limit})")]
    TooManyWildcards { count: usize, limit: usize },
}

impl Diagnostic {
    /// Whether this note makes the input ineligible
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Diagnostic::InvalidCharacter { .. } | Diagnostic::TooManyWildcards { .. }
        )
    }
}
