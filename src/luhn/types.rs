use crate::diagnostics::Diagnostic;

/// Location and value of a resolved wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingDigit {
    pub value: u8,
    /// 1-indexed from the left
    pub display_position: usize,
    /// 1-indexed from the right
    pub checksum_position: usize,
}

/// Outcome of a single [`LuhnSolver::solve`](super::LuhnSolver::solve) call.
///
/// Check [`SolveResult::is_eligible`] before reading the other fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    eligible: bool,
    checksum_modulus: Option<u8>,
    missing: Option<MissingDigit>,
    completed: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl SolveResult {
    pub(crate) fn ineligible(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            eligible: false,
            checksum_modulus: None,
            missing: None,
            completed: None,
            diagnostics,
        }
    }

    pub(crate) fn unresolved(checksum_modulus: u8, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            eligible: true,
            checksum_modulus: Some(checksum_modulus),
            missing: None,
            completed: None,
            diagnostics,
        }
    }

    pub(crate) fn resolved(
        checksum_modulus: u8,
        missing: MissingDigit,
        completed: String,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            eligible: true,
            checksum_modulus: Some(checksum_modulus),
            missing: Some(missing),
            completed: Some(completed),
            diagnostics,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    /// Total of the known digits' place values, modulo 10
    pub fn checksum_modulus(&self) -> Option<u8> {
        self.checksum_modulus
    }

    pub fn missing(&self) -> Option<MissingDigit> {
        self.missing
    }

    pub fn missing_value(&self) -> Option<u8> {
        self.missing.map(|m| m.value)
    }

    pub fn missing_display_position(&self) -> Option<usize> {
        self.missing.map(|m| m.display_position)
    }

    pub fn completed(&self) -> Option<&str> {
        self.completed.as_deref()
    }

    pub fn into_completed(self) -> Option<String> {
        self.completed
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
