//! Checksum arithmetic and input validation

mod digits;
mod errors;
mod validation;

pub(crate) use digits::{display_position, fold_double, place_value, unfold_double};
pub use digits::{is_luhn_valid, luhn_total};
pub use errors::UtilsError;
pub use validation::{find_invalid_character, validate_masked_number};
