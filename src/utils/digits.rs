//! Luhn checksum arithmetic.
//!
//! Checksum positions are 1-indexed from the rightmost digit. Digits at even
//! checksum positions are doubled and the result folded back to one digit
//! (`7 -> 14 -> 1 + 4 = 5`).

use log::debug;

/// Fold-doubled value of a digit: `0 1 2 3 4 5 6 7 8 9 -> 0 2 4 6 8 1 3 5 7 9`
///
/// `digit` must be in `0..=9`.
pub(crate) fn fold_double(digit: u8) -> u8 {
    let doubled = digit * 2;
    doubled / 10 + doubled % 10
}

/// Inverse of [`fold_double`]; `value` must be in `0..=9`
pub(crate) fn unfold_double(value: u8) -> u8 {
    let scaled = value * 5;
    scaled / 10 + scaled % 10
}

/// Contribution of `digit` to the checksum at the given checksum position
pub(crate) fn place_value(digit: u8, checksum_position: usize) -> u8 {
    if checksum_position % 2 == 0 {
        fold_double(digit)
    } else {
        digit
    }
}

/// Convert a right-to-left checksum position into a left-to-right display position.
///
/// `checksum_position` must be in `1..=length`.
pub(crate) fn display_position(length: usize, checksum_position: usize) -> usize {
    length + 1 - checksum_position
}

/// Sum of the checksum place values of a digit string, or `None` if any
/// character is not an ASCII digit
pub fn luhn_total(digits: &str) -> Option<u32> {
    digits
        .chars()
        .rev()
        .enumerate()
        .try_fold(0u32, |total, (offset, character)| {
            let digit = u8::try_from(character.to_digit(10)?).ok()?;
            Some(total + u32::from(place_value(digit, offset + 1)))
        })
}

/// Standard Luhn check: a non-empty digit string whose total is a multiple of 10
pub fn is_luhn_valid(number: &str) -> bool {
    let valid = !number.is_empty() && luhn_total(number).is_some_and(|total| total % 10 == 0);
    debug!("Luhn check of '{}': {}", number, valid);
    valid
}
