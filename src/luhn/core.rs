use log::{debug, warn};

use crate::config::MaskConfig;
use crate::diagnostics::Diagnostic;
use crate::luhn::types::{MissingDigit, SolveResult};
use crate::utils::{display_position, place_value, unfold_double};

/// Solver for a single missing digit in a Luhn-checked number
#[derive(Debug, Clone, Default)]
pub struct LuhnSolver {
    config: MaskConfig,
}

impl LuhnSolver {
    /// Create a solver using the default `?` wildcard
    pub fn new() -> Self {
        Self::with_config(MaskConfig::default())
    }

    pub fn with_config(config: MaskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Compute the digit that makes `input` Luhn-valid.
    ///
    /// The string is scanned once from the rightmost character. The first
    /// wildcard becomes the missing position. Any non-digit after that is
    /// recorded as a note and skipped; a non-digit before it stops the scan
    /// and makes the input ineligible.
    pub fn solve(&self, input: &str) -> SolveResult {
        let chars: Vec<char> = input.chars().collect();
        let length = chars.len();
        let mut odd_sum = 0u32;
        let mut even_sum = 0u32;
        let mut missing_position: Option<usize> = None;
        let mut diagnostics = Vec::new();

        for (offset, &character) in chars.iter().rev().enumerate() {
            let checksum_position = offset + 1;

            if let Some(digit) = character.to_digit(10)
                && let Ok(digit) = u8::try_from(digit)
            {
                let value = u32::from(place_value(digit, checksum_position));
                if checksum_position % 2 == 0 {
                    even_sum += value;
                } else {
                    odd_sum += value;
                }
                continue;
            }

            let position = display_position(length, checksum_position);
            if character == self.config.wildcard() && missing_position.is_none() {
                debug!("Missing digit at position {} of '{}'", position, input);
                missing_position = Some(checksum_position);
            } else if missing_position.is_some() {
                let note = Diagnostic::ToleratedExtraWildcard {
                    character,
                    position,
                };
                warn!("'{}': {}", input, note);
                diagnostics.push(note);
            } else {
                let note = Diagnostic::InvalidCharacter {
                    character,
                    position,
                };
                warn!("'{}': {}", input, note);
                diagnostics.push(note);
                return SolveResult::ineligible(diagnostics);
            }
        }

        let total = odd_sum + even_sum;
        let modulus = u8::try_from(total % 10).unwrap_or_default();
        debug!(
            "'{}': odd sum {}, even sum {}, modulus {}",
            input, odd_sum, even_sum, modulus
        );

        let Some(checksum_position) = missing_position else {
            let note = if modulus == 0 {
                Diagnostic::AmbiguousZeroModulus
            } else {
                Diagnostic::NoWildcard { modulus }
            };
            warn!("'{}': {}", input, note);
            diagnostics.push(note);
            return SolveResult::unresolved(modulus, diagnostics);
        };

        // With a wildcard present a zero modulus has exactly one answer: 0.
        let raw = (10 - modulus) % 10;
        let value = if checksum_position % 2 == 0 {
            unfold_double(raw)
        } else {
            raw
        };
        let missing = MissingDigit {
            value,
            display_position: display_position(length, checksum_position),
            checksum_position,
        };

        let completed = reconstruct(&chars, missing);
        debug!("Solved '{}' as '{}'", input, completed);
        SolveResult::resolved(modulus, missing, completed, diagnostics)
    }
}

/// Replace the character at the missing position with the resolved digit
fn reconstruct(chars: &[char], missing: MissingDigit) -> String {
    let digit = char::from(b'0' + missing.value);
    chars
        .iter()
        .enumerate()
        .map(|(index, &c)| {
            if index + 1 == missing.display_position {
                digit
            } else {
                c
            }
        })
        .collect()
}
