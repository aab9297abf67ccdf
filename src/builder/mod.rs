//! The normalization-and-validation builder tree.
//!
//! One builder per structural concept of the reported document. Every
//! builder is a plain mutable draft: fluent setters accumulate fields
//! without validating, [`TddBuilder::missing_fields`] is the pure
//! mandatory-field check, and [`TddBuilder::build`] assembles the
//! immutable entity only when that check passes.
//!
//! Builders that emit currency-tagged amounts (`AllowanceChargeBuilder`,
//! `TaxSubtotalBuilder`, `TaxTotalBuilder`, `DocumentLineBuilder`) take
//! the currency code as a constructor parameter, so the "currency before
//! children" ordering is a compile-time precondition rather than a
//! runtime error.

mod line;
mod parts;
mod tax;
mod transaction;

pub use line::{DocumentLineBuilder, ItemBuilder};
pub use parts::{
    AllowanceChargeBuilder, BillingReferenceBuilder, CommodityClassificationBuilder,
    PaymentMeansBuilder,
};
pub use tax::{TaxCategoryBuilder, TaxSubtotalBuilder, TaxTotalBuilder};
pub use transaction::TransactionBuilder;

use crate::core::ValidationError;

/// Uniform contract of all TDD builders.
pub trait TddBuilder: Sized {
    /// The immutable entity this builder assembles.
    type Output;

    /// Name of the owning builder, used as diagnostic context.
    const CONTEXT: &'static str;

    /// Pure mandatory-field check: one entry per missing field or violated
    /// conditional-mandatoriness rule. Never mutates.
    fn missing_fields(&self) -> Vec<ValidationError>;

    /// Assemble the entity. Re-runs the mandatory-field check with logging
    /// forced on; returns `None` (and a summary diagnostic) when any field
    /// is missing — never a partial entity.
    fn build(self) -> Option<Self::Output>;

    /// Whether every mandatory field is present. With `log_on_error`, emits
    /// one `log::error!` diagnostic per missing field.
    fn is_every_required_field_set(&self, log_on_error: bool) -> bool {
        let errors = self.missing_fields();
        if log_on_error {
            log_errors(&errors);
        }
        errors.is_empty()
    }
}

pub(crate) fn log_errors(errors: &[ValidationError]) {
    for e in errors {
        log::error!("{e}");
    }
}

/// Shared `build()` preamble: log every diagnostic plus the summary
/// failure. Returns `true` when the build must yield an absent result.
pub(crate) fn report_build_failure(errors: &[ValidationError], context: &str) -> bool {
    if errors.is_empty() {
        return false;
    }
    log_errors(errors);
    log::error!("at least one mandatory field is not set, the TDD {context} cannot be built");
    true
}
