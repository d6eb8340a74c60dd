use log::{debug, info, warn};

use crate::config::{MAX_ENUMERATED_WILDCARDS, MaskConfig};
use crate::diagnostics::Diagnostic;
use crate::query::segments::{Segments, split_segments};
use crate::query::types::{Expansion, QueryString};
use crate::utils::find_invalid_character;

/// Expands a masked number with several wildcards into single-wildcard queries
#[derive(Debug, Clone, Default)]
pub struct QueryExpander {
    config: MaskConfig,
}

impl QueryExpander {
    pub fn new() -> Self {
        Self::with_config(MaskConfig::default())
    }

    pub fn with_config(config: MaskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Fill every wildcard but the last with each digit combination.
    ///
    /// Combinations are enumerated in ascending numeric order, so the query at
    /// index `n` has the zero-padded digits of `n` in its first `w - 1`
    /// wildcard slots. Inputs with fewer than two wildcards are returned as is.
    pub fn expand(&self, input: &str) -> Expansion {
        let wildcard = self.config.wildcard();

        if let Some((position, character)) = find_invalid_character(input, wildcard) {
            let note = Diagnostic::InvalidCharacter {
                character,
                position,
            };
            warn!("'{}': {}", input, note);
            return Expansion::ineligible(note);
        }

        let segments = split_segments(input, wildcard);
        let wildcards = segments.leading.len();
        if wildcards < 2 {
            debug!("'{}' has {} wildcards, nothing to expand", input, wildcards);
            return Expansion::eligible(vec![QueryString {
                index: 0,
                text: input.to_string(),
            }]);
        }

        let free = wildcards - 1;
        let Some(combinations) = u32::try_from(free)
            .ok()
            .filter(|_| free <= MAX_ENUMERATED_WILDCARDS)
            .and_then(|exponent| 10u64.checked_pow(exponent))
        else {
            let note = Diagnostic::TooManyWildcards {
                count: wildcards,
                limit: MAX_ENUMERATED_WILDCARDS + 1,
            };
            warn!("'{}': {}", input, note);
            return Expansion::ineligible(note);
        };

        info!(
            "Expanding '{}': {} wildcards into {} query strings",
            input, wildcards, combinations
        );

        let capacity = usize::try_from(combinations).unwrap_or_default();
        let mut queries = Vec::with_capacity(capacity);
        for index in 0..combinations {
            queries.push(QueryString {
                index,
                text: build_query(&segments, index, free, input.len(), wildcard),
            });
        }

        Expansion::eligible(queries)
    }
}

/// Interleave the leading segments with the zero-padded digits of `index`,
/// then close with the last segment, the wildcard and the trailing digits
fn build_query(
    segments: &Segments,
    index: u64,
    width: usize,
    length: usize,
    wildcard: char,
) -> String {
    let digits = format!("{index:0width$}");
    let mut query = String::with_capacity(length);

    for (segment, digit) in segments.leading.iter().zip(digits.chars()) {
        query.push_str(segment);
        query.push(digit);
    }
    if let Some(last) = segments.leading.last() {
        query.push_str(last);
    }
    query.push(wildcard);
    if let Some(trailing) = &segments.trailing {
        query.push_str(trailing);
    }

    query
}
