use crate::diagnostics::Diagnostic;

/// A masked number with at most one wildcard, tagged with the combination
/// index that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryString {
    pub index: u64,
    pub text: String,
}

/// Ordered query strings produced by [`QueryExpander::expand`](super::QueryExpander::expand)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    eligible: bool,
    queries: Vec<QueryString>,
    diagnostics: Vec<Diagnostic>,
}

impl Expansion {
    pub(crate) fn ineligible(diagnostic: Diagnostic) -> Self {
        Self {
            eligible: false,
            queries: Vec::new(),
            diagnostics: vec![diagnostic],
        }
    }

    pub(crate) fn eligible(queries: Vec<QueryString>) -> Self {
        Self {
            eligible: true,
            queries,
            diagnostics: Vec::new(),
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    pub fn queries(&self) -> &[QueryString] {
        &self.queries
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Vec<QueryString>, Vec<Diagnostic>) {
        (self.queries, self.diagnostics)
    }

    /// Query texts in enumeration order
    pub fn into_strings(self) -> Vec<String> {
        self.queries.into_iter().map(|q| q.text).collect()
    }
}
