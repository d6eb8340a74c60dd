use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::MaskConfig;
use crate::diagnostics::Diagnostic;
use crate::luhn::LuhnSolver;
use crate::query::QueryExpander;

/// Every Luhn-valid completion of a masked number, in enumeration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    eligible: bool,
    candidates: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Completion {
    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_candidates(self) -> Vec<String> {
        self.candidates
    }
}

/// Expands a masked number and solves the last wildcard of every query
#[derive(Debug, Clone, Default)]
pub struct Completer {
    expander: QueryExpander,
    solver: LuhnSolver,
}

impl Completer {
    pub fn new() -> Self {
        Self::with_config(MaskConfig::default())
    }

    pub fn with_config(config: MaskConfig) -> Self {
        Self {
            expander: QueryExpander::with_config(config),
            solver: LuhnSolver::with_config(config),
        }
    }

    pub fn config(&self) -> &MaskConfig {
        self.solver.config()
    }

    /// Complete `input`, solving the generated queries in parallel
    pub fn complete(&self, input: &str) -> Completion {
        let expansion = self.expander.expand(input);
        let eligible = expansion.is_eligible();
        let (queries, mut diagnostics) = expansion.into_parts();

        if !eligible {
            warn!("'{}' cannot be expanded", input);
            return Completion {
                eligible,
                candidates: Vec::new(),
                diagnostics,
            };
        }

        let solved: Vec<_> = queries
            .par_iter()
            .map(|query| self.solver.solve(&query.text))
            .collect();

        let mut candidates = Vec::with_capacity(solved.len());
        for result in solved {
            diagnostics.extend(result.diagnostics().iter().cloned());
            if result.is_eligible()
                && let Some(completed) = result.into_completed()
            {
                candidates.push(completed);
            }
        }

        if candidates.len() < queries.len() {
            debug!(
                "'{}': {} of {} queries produced no candidate",
                input,
                queries.len() - candidates.len(),
                queries.len()
            );
        }
        info!("'{}': {} candidates", input, candidates.len());

        Completion {
            eligible,
            candidates,
            diagnostics,
        }
    }
}
