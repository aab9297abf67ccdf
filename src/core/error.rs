use thiserror::Error;

/// Errors that can occur outside normal field validation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TddError {
    /// A mandatory field was missing and the document could not be assembled.
    #[error("incomplete document: {0}")]
    IncompleteDocument(String),

    /// The external rule validator could not process the document.
    #[error("rule validation error: {0}")]
    RuleValidation(String),
}

/// A single missing-field or business-rule diagnostic produced by a builder.
///
/// `context` names the owning builder (e.g. "ReportedTransaction"),
/// `field` the offending field (e.g. "PayableAmount").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The builder that detected the problem.
    pub context: &'static str,
    /// The field the diagnostic refers to.
    pub field: &'static str,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} builder: {}", self.context, self.message)
    }
}

impl ValidationError {
    /// A plain mandatory-field diagnostic.
    pub fn missing(context: &'static str, field: &'static str) -> Self {
        Self {
            context,
            field,
            message: format!("{field} is missing"),
        }
    }

    /// A conditional-mandatoriness or consistency diagnostic.
    pub fn rule(context: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            context,
            field,
            message: message.into(),
        }
    }
}
