//! Shared helpers and strategies for property tests.

use proptest::prelude::*;
use proptest::sample::Index;

use crate::utils::luhn_total;

/// Append the check digit that makes `prefix` Luhn-valid
pub fn with_check_digit(prefix: &str) -> String {
    let total = luhn_total(&format!("{prefix}0")).unwrap_or_default();
    format!("{prefix}{}", (10 - total % 10) % 10)
}

/// Replace the characters at the given indices with `?`
pub fn mask(number: &str, indices: &[usize]) -> String {
    number
        .chars()
        .enumerate()
        .map(|(i, c)| if indices.contains(&i) { '?' } else { c })
        .collect()
}

/// Insert a `?` into `digits` at each index in turn
pub fn insert_wildcards(digits: &str, positions: &[Index]) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    for position in positions {
        let at = position.index(chars.len() + 1);
        chars.insert(at, '?');
    }
    chars.into_iter().collect()
}

/// Luhn-valid digit strings of 2 to 19 characters
pub fn valid_number() -> impl Strategy<Value = String> {
    "[0-9]{1,18}".prop_map(|prefix| with_check_digit(&prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::is_luhn_valid;

    #[test]
    fn test_with_check_digit() {
        assert_eq!(with_check_digit("7992739871"), "79927398713");
        assert!(is_luhn_valid(&with_check_digit("")));
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("12345", &[0, 3]), "?23?5");
    }
}
