use thiserror::Error;

/// Errors that can occur while validating masked numbers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Masked number cannot be empty")]
    EmptyInput,
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Wildcard marker cannot be a digit: '{0}'")]
    InvalidWildcard(char),
}
