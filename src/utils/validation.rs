use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Locate the first character that is neither an ASCII digit nor the wildcard.
///
/// Returns the 1-indexed position and the offending character.
pub fn find_invalid_character(input: &str, wildcard: char) -> Option<(usize, char)> {
    input
        .chars()
        .enumerate()
        .find(|&(_, c)| !c.is_ascii_digit() && c != wildcard)
        .map(|(index, c)| (index + 1, c))
}

/// Validate a masked number and return how many wildcards it contains.
///
/// # Errors
///
/// Returns an error if the string is empty or contains a character other than
/// an ASCII digit or the wildcard.
pub fn validate_masked_number(input: &str, wildcard: char) -> Result<usize, UtilsError> {
    debug!("Validating masked number: '{}'", input);

    if input.is_empty() {
        warn!("Masked number is empty");
        return Err(UtilsError::EmptyInput);
    }

    if let Some((position, character)) = find_invalid_character(input, wildcard) {
        warn!(
            "Masked number '{}' has invalid character '{}' at position {}",
            input, character, position
        );
        return Err(UtilsError::InvalidCharacter {
            character,
            position,
        });
    }

    let wildcards = input.chars().filter(|&c| c == wildcard).count();
    debug!("Masked number validation successful ({} wildcards)", wildcards);
    Ok(wildcards)
}
