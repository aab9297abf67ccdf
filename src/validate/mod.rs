//! Validation-gateway boundary.
//!
//! Business-rule validation runs in an external declarative rule engine
//! against the serialized reported document. This module only fixes the
//! contract: what a rule set is named, what one diagnostic entry looks
//! like, and the [`RuleValidator`] seam an engine plugs into. Nothing here
//! interprets diagnostics; they are surfaced verbatim to the caller.

use serde::{Deserialize, Serialize};

use crate::core::TddError;

/// Rule set for the SK Tax Data Document 1.0.0 business rules.
pub const SK_TDD_100: &str = "sk-tdd-1.0.0";

/// Severity of one rule diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// One entry of a validation report, as reported by the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Identifier of the violated rule within the rule set.
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn error(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// The diagnostics a rule engine produced for one serialized document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Whether any diagnostic carries error severity. Warnings alone do
    /// not block transmission.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }
}

/// External rule engine seam.
///
/// Implementations receive the fully serialized reported document and the
/// name of the rule set to evaluate (e.g. [`SK_TDD_100`]), and return the
/// engine's diagnostics. An engine failure (rule set unavailable, document
/// not parseable) is a [`TddError::RuleValidation`], distinct from a
/// report that merely contains error diagnostics.
pub trait RuleValidator {
    fn validate(&self, serialized_document: &str, rule_set: &str)
        -> Result<ValidationReport, TddError>;
}
