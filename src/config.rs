use crate::utils::UtilsError;

/// Marker used for an unknown digit unless configured otherwise
pub const DEFAULT_WILDCARD: char = '?';

/// Largest number of wildcards (excluding the last) the expander will enumerate.
/// Every query is held in memory, so this caps an expansion at 10^6 strings.
pub const MAX_ENUMERATED_WILDCARDS: usize = 6;

/// Configuration shared by the solver, the expander and the completer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskConfig {
    wildcard: char,
}

impl MaskConfig {
    /// # Errors
    ///
    /// Returns an error if the wildcard is an ASCII digit.
    pub fn new(wildcard: char) -> Result<Self, UtilsError> {
        if wildcard.is_ascii_digit() {
            return Err(UtilsError::InvalidWildcard(wildcard));
        }
        Ok(Self { wildcard })
    }

    /// Character marking an unknown digit; never an ASCII digit
    pub fn wildcard(&self) -> char {
        self.wildcard
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wildcard() {
        assert_eq!(MaskConfig::default().wildcard(), '?');
    }

    #[test]
    fn test_custom_wildcard() {
        assert_eq!(MaskConfig::new('x'), Ok(MaskConfig { wildcard: 'x' }));
        assert_eq!(MaskConfig::new('7'), Err(UtilsError::InvalidWildcard('7')));
        assert_eq!(MaskConfig::new('x').map(|c| c.wildcard()), Ok('x'));
    }
}
