//! Source document shapes — typed, read-only UBL 2.1 trees.
//!
//! Parsing the XML wire format into these trees is out of scope; an
//! upstream parser (or a test) constructs them directly. The extraction in
//! [`crate::builder`] touches the trees exclusively through the
//! [`SourceDocument`] and [`SourceLine`] accessor traits, which is what
//! lets an Invoice and a CreditNote resolve to the same normalized target
//! without duplicating the mapping.

mod types;

pub use types::*;

use chrono::{NaiveDate, NaiveTime};

/// Accessors common to the Invoice and CreditNote shapes.
///
/// "First-of-list" accessors mirror the cardinality the reporting format
/// keeps: only the first note, invoice period and delivery entry survive
/// normalization.
pub trait SourceDocument {
    type Line: SourceLine;

    fn customization_id(&self) -> Option<&str>;
    fn profile_id(&self) -> Option<&str>;
    fn id(&self) -> Option<&str>;
    fn issue_date(&self) -> Option<NaiveDate>;
    fn issue_time(&self) -> Option<NaiveTime>;
    /// `cbc:InvoiceTypeCode` or `cbc:CreditNoteTypeCode` depending on shape.
    fn document_type_code(&self) -> Option<&str>;
    fn first_note(&self) -> Option<&str>;
    fn document_currency_code(&self) -> Option<&str>;
    fn tax_currency_code(&self) -> Option<&str>;
    fn first_invoice_period(&self) -> Option<&Period>;
    fn billing_references(&self) -> &[BillingReference];
    fn supplier_party(&self) -> Option<&Party>;
    fn customer_party(&self) -> Option<&Party>;
    fn tax_representative_party(&self) -> Option<&Party>;
    fn first_delivery_date(&self) -> Option<NaiveDate>;
    fn payment_means(&self) -> &[PaymentMeans];
    fn allowance_charges(&self) -> &[AllowanceCharge];
    fn tax_totals(&self) -> &[TaxTotal];
    fn legal_monetary_total(&self) -> Option<&MonetaryTotal>;
    fn lines(&self) -> &[Self::Line];
}

/// Accessors common to `cac:InvoiceLine` and `cac:CreditNoteLine`.
pub trait SourceLine {
    fn id(&self) -> Option<&str>;
    fn first_note(&self) -> Option<&str>;
    /// Invoiced or credited quantity depending on shape.
    fn quantity(&self) -> Option<&Quantity>;
    fn line_extension_amount(&self) -> Option<&Amount>;
    fn first_invoice_period(&self) -> Option<&Period>;
    fn allowance_charges(&self) -> &[AllowanceCharge];
    fn item(&self) -> Option<&Item>;
    fn price_amount(&self) -> Option<&Amount>;
}

impl SourceDocument for Invoice {
    type Line = InvoiceLine;

    fn customization_id(&self) -> Option<&str> {
        self.customization_id.as_deref()
    }

    fn profile_id(&self) -> Option<&str> {
        self.profile_id.as_deref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn issue_date(&self) -> Option<NaiveDate> {
        self.issue_date
    }

    fn issue_time(&self) -> Option<NaiveTime> {
        self.issue_time
    }

    fn document_type_code(&self) -> Option<&str> {
        self.invoice_type_code.as_deref()
    }

    fn first_note(&self) -> Option<&str> {
        self.notes.first().map(String::as_str)
    }

    fn document_currency_code(&self) -> Option<&str> {
        self.document_currency_code.as_deref()
    }

    fn tax_currency_code(&self) -> Option<&str> {
        self.tax_currency_code.as_deref()
    }

    fn first_invoice_period(&self) -> Option<&Period> {
        self.invoice_periods.first()
    }

    fn billing_references(&self) -> &[BillingReference] {
        &self.billing_references
    }

    fn supplier_party(&self) -> Option<&Party> {
        self.accounting_supplier_party
            .as_ref()
            .and_then(|sp| sp.party.as_ref())
    }

    fn customer_party(&self) -> Option<&Party> {
        self.accounting_customer_party
            .as_ref()
            .and_then(|cp| cp.party.as_ref())
    }

    fn tax_representative_party(&self) -> Option<&Party> {
        self.tax_representative_party.as_ref()
    }

    fn first_delivery_date(&self) -> Option<NaiveDate> {
        self.deliveries.first().and_then(|d| d.actual_delivery_date)
    }

    fn payment_means(&self) -> &[PaymentMeans] {
        &self.payment_means
    }

    fn allowance_charges(&self) -> &[AllowanceCharge] {
        &self.allowance_charges
    }

    fn tax_totals(&self) -> &[TaxTotal] {
        &self.tax_totals
    }

    fn legal_monetary_total(&self) -> Option<&MonetaryTotal> {
        self.legal_monetary_total.as_ref()
    }

    fn lines(&self) -> &[InvoiceLine] {
        &self.invoice_lines
    }
}

impl SourceDocument for CreditNote {
    type Line = CreditNoteLine;

    fn customization_id(&self) -> Option<&str> {
        self.customization_id.as_deref()
    }

    fn profile_id(&self) -> Option<&str> {
        self.profile_id.as_deref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn issue_date(&self) -> Option<NaiveDate> {
        self.issue_date
    }

    fn issue_time(&self) -> Option<NaiveTime> {
        self.issue_time
    }

    fn document_type_code(&self) -> Option<&str> {
        self.credit_note_type_code.as_deref()
    }

    fn first_note(&self) -> Option<&str> {
        self.notes.first().map(String::as_str)
    }

    fn document_currency_code(&self) -> Option<&str> {
        self.document_currency_code.as_deref()
    }

    fn tax_currency_code(&self) -> Option<&str> {
        self.tax_currency_code.as_deref()
    }

    fn first_invoice_period(&self) -> Option<&Period> {
        self.invoice_periods.first()
    }

    fn billing_references(&self) -> &[BillingReference] {
        &self.billing_references
    }

    fn supplier_party(&self) -> Option<&Party> {
        self.accounting_supplier_party
            .as_ref()
            .and_then(|sp| sp.party.as_ref())
    }

    fn customer_party(&self) -> Option<&Party> {
        self.accounting_customer_party
            .as_ref()
            .and_then(|cp| cp.party.as_ref())
    }

    fn tax_representative_party(&self) -> Option<&Party> {
        self.tax_representative_party.as_ref()
    }

    fn first_delivery_date(&self) -> Option<NaiveDate> {
        self.deliveries.first().and_then(|d| d.actual_delivery_date)
    }

    fn payment_means(&self) -> &[PaymentMeans] {
        &self.payment_means
    }

    fn allowance_charges(&self) -> &[AllowanceCharge] {
        &self.allowance_charges
    }

    fn tax_totals(&self) -> &[TaxTotal] {
        &self.tax_totals
    }

    fn legal_monetary_total(&self) -> Option<&MonetaryTotal> {
        self.legal_monetary_total.as_ref()
    }

    fn lines(&self) -> &[CreditNoteLine] {
        &self.credit_note_lines
    }
}

impl SourceLine for InvoiceLine {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn first_note(&self) -> Option<&str> {
        self.notes.first().map(String::as_str)
    }

    fn quantity(&self) -> Option<&Quantity> {
        self.invoiced_quantity.as_ref()
    }

    fn line_extension_amount(&self) -> Option<&Amount> {
        self.line_extension_amount.as_ref()
    }

    fn first_invoice_period(&self) -> Option<&Period> {
        self.invoice_periods.first()
    }

    fn allowance_charges(&self) -> &[AllowanceCharge] {
        &self.allowance_charges
    }

    fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    fn price_amount(&self) -> Option<&Amount> {
        self.price.as_ref().and_then(|p| p.price_amount.as_ref())
    }
}

impl SourceLine for CreditNoteLine {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn first_note(&self) -> Option<&str> {
        self.notes.first().map(String::as_str)
    }

    fn quantity(&self) -> Option<&Quantity> {
        self.credited_quantity.as_ref()
    }

    fn line_extension_amount(&self) -> Option<&Amount> {
        self.line_extension_amount.as_ref()
    }

    fn first_invoice_period(&self) -> Option<&Period> {
        self.invoice_periods.first()
    }

    fn allowance_charges(&self) -> &[AllowanceCharge] {
        &self.allowance_charges
    }

    fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    fn price_amount(&self) -> Option<&Amount> {
        self.price.as_ref().and_then(|p| p.price_amount.as_ref())
    }
}
