use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;

use super::parts::{AllowanceChargeBuilder, BillingReferenceBuilder, PaymentMeansBuilder};
use super::tax::TaxTotalBuilder;
use super::{report_build_failure, DocumentLineBuilder, TddBuilder};
use crate::core::{
    derive_transaction_uuid, AllowanceCharge, Amount, BillingReference, BusinessKey, DocumentLine,
    DocumentTypeCode, InvoicePeriod, MonetaryTotal, PartySummary, PaymentMeans,
    ReportedDocument, ReportedTransaction, TaxTotal, ValidationError,
};
use crate::ubl::{self, SourceDocument};

/// Root builder normalizing one source document into a
/// [`ReportedTransaction`].
///
/// Populate it either field by field or through [`init_from_invoice`] /
/// [`init_from_credit_note`], which extract the common field set out of the
/// two source shapes. Extraction never fails: missing source substructures
/// simply leave the corresponding target field unset, which surfaces as a
/// missing-field diagnostic at [`build`] time.
///
/// [`init_from_invoice`]: TransactionBuilder::init_from_invoice
/// [`init_from_credit_note`]: TransactionBuilder::init_from_credit_note
/// [`build`]: TransactionBuilder::build
pub struct TransactionBuilder {
    type_code: DocumentTypeCode,
    customization_id: Option<String>,
    profile_id: Option<String>,
    id: Option<String>,
    issue_date: Option<NaiveDate>,
    issue_time: Option<NaiveTime>,
    document_type_code: Option<String>,
    note: Option<String>,
    document_currency_code: Option<String>,
    tax_currency_code: Option<String>,
    invoice_period_start: Option<NaiveDate>,
    invoice_period_end: Option<NaiveDate>,
    invoice_period_description_code: Option<String>,
    billing_references: Vec<BillingReference>,
    seller_tax_id: Option<String>,
    seller_country_code: Option<String>,
    buyer_tax_id: Option<String>,
    buyer_country_code: Option<String>,
    tax_representative_id: Option<String>,
    tax_representative_country_code: Option<String>,
    delivery_date: Option<NaiveDate>,
    payment_means: Vec<PaymentMeans>,
    allowance_charges: Vec<AllowanceCharge>,
    tax_total_document_currency: Option<TaxTotal>,
    tax_total_tax_currency: Option<TaxTotal>,
    line_extension_amount: Option<Decimal>,
    tax_exclusive_amount: Option<Decimal>,
    tax_inclusive_amount: Option<Decimal>,
    allowance_total_amount: Option<Decimal>,
    charge_total_amount: Option<Decimal>,
    prepaid_amount: Option<Decimal>,
    payable_rounding_amount: Option<Decimal>,
    payable_amount: Option<Decimal>,
    lines: Vec<DocumentLine>,
}

impl TransactionBuilder {
    pub fn new(type_code: DocumentTypeCode) -> Self {
        Self {
            type_code,
            customization_id: None,
            profile_id: None,
            id: None,
            issue_date: None,
            issue_time: None,
            document_type_code: None,
            note: None,
            document_currency_code: None,
            tax_currency_code: None,
            invoice_period_start: None,
            invoice_period_end: None,
            invoice_period_description_code: None,
            billing_references: Vec::new(),
            seller_tax_id: None,
            seller_country_code: None,
            buyer_tax_id: None,
            buyer_country_code: None,
            tax_representative_id: None,
            tax_representative_country_code: None,
            delivery_date: None,
            payment_means: Vec::new(),
            allowance_charges: Vec::new(),
            tax_total_document_currency: None,
            tax_total_tax_currency: None,
            line_extension_amount: None,
            tax_exclusive_amount: None,
            tax_inclusive_amount: None,
            allowance_total_amount: None,
            charge_total_amount: None,
            prepaid_amount: None,
            payable_rounding_amount: None,
            payable_amount: None,
            lines: Vec::new(),
        }
    }

    /// Set all fields from the provided UBL 2.1 Invoice.
    pub fn init_from_invoice(self, invoice: &ubl::Invoice) -> Self {
        self.init_from_source(invoice)
    }

    /// Set all fields from the provided UBL 2.1 CreditNote.
    pub fn init_from_credit_note(self, credit_note: &ubl::CreditNote) -> Self {
        self.init_from_source(credit_note)
    }

    /// The one extraction both source shapes resolve to, so the two entry
    /// points cannot diverge.
    fn init_from_source<S: SourceDocument>(mut self, doc: &S) -> Self {
        if let Some(v) = doc.customization_id() {
            self.customization_id = Some(v.to_owned());
        }
        if let Some(v) = doc.profile_id() {
            self.profile_id = Some(v.to_owned());
        }
        if let Some(v) = doc.id() {
            self.id = Some(v.to_owned());
        }
        if let Some(date) = doc.issue_date() {
            self.issue_date = Some(date);
        }
        if let Some(time) = doc.issue_time() {
            self = self.issue_time(time);
        }
        if let Some(v) = doc.document_type_code() {
            self.document_type_code = Some(v.to_owned());
        }
        if let Some(v) = doc.first_note() {
            self.note = Some(v.to_owned());
        }
        if let Some(v) = doc.document_currency_code() {
            self.document_currency_code = Some(v.to_owned());
        }
        if let Some(v) = doc.tax_currency_code() {
            self.tax_currency_code = Some(v.to_owned());
        }

        if let Some(period) = doc.first_invoice_period() {
            self.invoice_period_start = period.start_date;
            self.invoice_period_end = period.end_date;
            if let Some(code) = period.description_codes.first() {
                self.invoice_period_description_code = Some(code.clone());
            }
        }

        for reference in doc.billing_references() {
            match BillingReferenceBuilder::new().init_from_ubl(reference).build() {
                Some(built) => self.billing_references.push(built),
                None => log::warn!("dropping invalid BillingReference from source document"),
            }
        }

        if let Some(party) = doc.supplier_party() {
            let (tax_id, country) = extract_party(party);
            self.seller_tax_id = tax_id.or(self.seller_tax_id);
            self.seller_country_code = country.or(self.seller_country_code);
        }
        if let Some(party) = doc.customer_party() {
            let (tax_id, country) = extract_party(party);
            self.buyer_tax_id = tax_id.or(self.buyer_tax_id);
            self.buyer_country_code = country.or(self.buyer_country_code);
        }
        if let Some(party) = doc.tax_representative_party() {
            let (tax_id, country) = extract_party(party);
            self.tax_representative_id = tax_id.or(self.tax_representative_id);
            self.tax_representative_country_code = country.or(self.tax_representative_country_code);
        }

        if let Some(date) = doc.first_delivery_date() {
            self.delivery_date = Some(date);
        }

        for payment_means in doc.payment_means() {
            match PaymentMeansBuilder::new().init_from_ubl(payment_means).build() {
                Some(built) => self.payment_means.push(built),
                None => log::warn!("dropping invalid PaymentMeans from source document"),
            }
        }

        // Everything below carries currency-tagged amounts; without a
        // document currency there is nothing to tag against and the
        // substructures stay unset (reported as missing at build time).
        if let Some(currency) = self.document_currency_code.clone() {
            for allowance_charge in doc.allowance_charges() {
                match AllowanceChargeBuilder::new(currency.as_str())
                    .init_from_ubl(allowance_charge)
                    .build()
                {
                    Some(built) => self.allowance_charges.push(built),
                    None => log::warn!("dropping invalid AllowanceCharge from source document"),
                }
            }

            if let Some(total) = select_tax_total(doc.tax_totals(), &currency) {
                match TaxTotalBuilder::new(currency.as_str()).init_from_ubl(total).build() {
                    Some(built) => self.tax_total_document_currency = Some(built),
                    None => log::warn!("dropping invalid document-currency TaxTotal"),
                }
            }

            for line in doc.lines() {
                match DocumentLineBuilder::new(currency.as_str())
                    .init_from_line(line)
                    .build()
                {
                    Some(built) => self.lines.push(built),
                    None => log::warn!("dropping invalid DocumentLine from source document"),
                }
            }
        }

        if let Some(tax_currency) = self.tax_currency_code.clone() {
            if let Some(total) = select_tax_total(doc.tax_totals(), &tax_currency) {
                match TaxTotalBuilder::new(tax_currency.as_str()).init_from_ubl(total).build() {
                    Some(built) => self.tax_total_tax_currency = Some(built),
                    None => log::warn!("dropping invalid tax-currency TaxTotal"),
                }
            }
        }

        if let Some(total) = doc.legal_monetary_total() {
            if let Some(amount) = &total.line_extension_amount {
                self.line_extension_amount = Some(amount.value);
            }
            if let Some(amount) = &total.tax_exclusive_amount {
                self.tax_exclusive_amount = Some(amount.value);
            }
            if let Some(amount) = &total.tax_inclusive_amount {
                self.tax_inclusive_amount = Some(amount.value);
            }
            if let Some(amount) = &total.allowance_total_amount {
                self.allowance_total_amount = Some(amount.value);
            }
            if let Some(amount) = &total.charge_total_amount {
                self.charge_total_amount = Some(amount.value);
            }
            if let Some(amount) = &total.prepaid_amount {
                self.prepaid_amount = Some(amount.value);
            }
            if let Some(amount) = &total.payable_rounding_amount {
                self.payable_rounding_amount = Some(amount.value);
            }
            if let Some(amount) = &total.payable_amount {
                self.payable_amount = Some(amount.value);
            }
        }

        self
    }

    pub fn customization_id(mut self, s: impl Into<String>) -> Self {
        self.customization_id = Some(s.into());
        self
    }

    pub fn profile_id(mut self, s: impl Into<String>) -> Self {
        self.profile_id = Some(s.into());
        self
    }

    pub fn id(mut self, s: impl Into<String>) -> Self {
        self.id = Some(s.into());
        self
    }

    pub fn issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Set the issue time, truncated to millisecond precision (finer
    /// precision does not survive the reporting format).
    pub fn issue_time(mut self, time: NaiveTime) -> Self {
        let nanos = time.nanosecond();
        self.issue_time = Some(
            time.with_nanosecond(nanos - nanos % 1_000_000)
                .unwrap_or(time),
        );
        self
    }

    /// Set issue date and time in one call.
    pub fn issue_date_time(self, date_time: NaiveDateTime) -> Self {
        self.issue_date(date_time.date()).issue_time(date_time.time())
    }

    pub fn document_type_code(mut self, s: impl Into<String>) -> Self {
        self.document_type_code = Some(s.into());
        self
    }

    pub fn note(mut self, s: impl Into<String>) -> Self {
        self.note = Some(s.into());
        self
    }

    pub fn document_currency_code(mut self, s: impl Into<String>) -> Self {
        self.document_currency_code = Some(s.into());
        self
    }

    pub fn tax_currency_code(mut self, s: impl Into<String>) -> Self {
        self.tax_currency_code = Some(s.into());
        self
    }

    /// Document currency, once known. Children tagged with it
    /// ([`DocumentLineBuilder`], [`AllowanceChargeBuilder`],
    /// [`TaxTotalBuilder`]) are constructed from this value.
    pub fn document_currency(&self) -> Option<&str> {
        self.document_currency_code.as_deref()
    }

    /// Tax currency, once known.
    pub fn tax_currency(&self) -> Option<&str> {
        self.tax_currency_code.as_deref()
    }

    pub fn invoice_period_start(mut self, date: NaiveDate) -> Self {
        self.invoice_period_start = Some(date);
        self
    }

    pub fn invoice_period_end(mut self, date: NaiveDate) -> Self {
        self.invoice_period_end = Some(date);
        self
    }

    pub fn invoice_period_description_code(mut self, s: impl Into<String>) -> Self {
        self.invoice_period_description_code = Some(s.into());
        self
    }

    pub fn add_billing_reference(mut self, reference: BillingReference) -> Self {
        self.billing_references.push(reference);
        self
    }

    pub fn seller_tax_id(mut self, s: impl Into<String>) -> Self {
        self.seller_tax_id = Some(s.into());
        self
    }

    pub fn seller_country_code(mut self, s: impl Into<String>) -> Self {
        self.seller_country_code = Some(s.into());
        self
    }

    pub fn buyer_tax_id(mut self, s: impl Into<String>) -> Self {
        self.buyer_tax_id = Some(s.into());
        self
    }

    pub fn buyer_country_code(mut self, s: impl Into<String>) -> Self {
        self.buyer_country_code = Some(s.into());
        self
    }

    pub fn tax_representative_id(mut self, s: impl Into<String>) -> Self {
        self.tax_representative_id = Some(s.into());
        self
    }

    pub fn tax_representative_country_code(mut self, s: impl Into<String>) -> Self {
        self.tax_representative_country_code = Some(s.into());
        self
    }

    pub fn delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    pub fn add_payment_means(mut self, payment_means: PaymentMeans) -> Self {
        self.payment_means.push(payment_means);
        self
    }

    pub fn add_allowance_charge(mut self, allowance_charge: AllowanceCharge) -> Self {
        self.allowance_charges.push(allowance_charge);
        self
    }

    pub fn tax_total_document_currency(mut self, total: TaxTotal) -> Self {
        self.tax_total_document_currency = Some(total);
        self
    }

    pub fn tax_total_tax_currency(mut self, total: TaxTotal) -> Self {
        self.tax_total_tax_currency = Some(total);
        self
    }

    pub fn line_extension_amount(mut self, amount: Decimal) -> Self {
        self.line_extension_amount = Some(amount);
        self
    }

    pub fn tax_exclusive_amount(mut self, amount: Decimal) -> Self {
        self.tax_exclusive_amount = Some(amount);
        self
    }

    pub fn tax_inclusive_amount(mut self, amount: Decimal) -> Self {
        self.tax_inclusive_amount = Some(amount);
        self
    }

    pub fn allowance_total_amount(mut self, amount: Decimal) -> Self {
        self.allowance_total_amount = Some(amount);
        self
    }

    pub fn charge_total_amount(mut self, amount: Decimal) -> Self {
        self.charge_total_amount = Some(amount);
        self
    }

    pub fn prepaid_amount(mut self, amount: Decimal) -> Self {
        self.prepaid_amount = Some(amount);
        self
    }

    pub fn payable_rounding_amount(mut self, amount: Decimal) -> Self {
        self.payable_rounding_amount = Some(amount);
        self
    }

    pub fn payable_amount(mut self, amount: Decimal) -> Self {
        self.payable_amount = Some(amount);
        self
    }

    pub fn add_document_line(mut self, line: DocumentLine) -> Self {
        self.lines.push(line);
        self
    }

    fn assemble_document(self) -> Option<ReportedDocument> {
        let document_currency = self.document_currency_code?;
        let uuid = derive_transaction_uuid(&BusinessKey {
            document_type_code: self.document_type_code.as_deref(),
            id: self.id.as_deref(),
            issue_date: self.issue_date,
            seller_tax_id: self.seller_tax_id.as_deref(),
        });

        let invoice_period = InvoicePeriod {
            start_date: self.invoice_period_start,
            end_date: self.invoice_period_end,
            description_code: self.invoice_period_description_code,
        };
        let tax_representative = PartySummary {
            tax_id: self.tax_representative_id,
            country_code: self.tax_representative_country_code,
        };

        let tag = |value: Option<Decimal>| {
            value.map(|v| Amount::new(v, document_currency.clone()))
        };
        let monetary_total = MonetaryTotal {
            line_extension_amount: Amount::new(
                self.line_extension_amount?,
                document_currency.clone(),
            ),
            tax_exclusive_amount: Amount::new(
                self.tax_exclusive_amount?,
                document_currency.clone(),
            ),
            tax_inclusive_amount: Amount::new(
                self.tax_inclusive_amount?,
                document_currency.clone(),
            ),
            allowance_total_amount: tag(self.allowance_total_amount),
            charge_total_amount: tag(self.charge_total_amount),
            prepaid_amount: tag(self.prepaid_amount),
            payable_rounding_amount: tag(self.payable_rounding_amount),
            payable_amount: Amount::new(self.payable_amount?, document_currency.clone()),
        };

        Some(ReportedDocument {
            customization_id: self.customization_id?,
            profile_id: self.profile_id?,
            id: self.id?,
            uuid,
            issue_date: self.issue_date?,
            issue_time: self.issue_time,
            document_type_code: self.document_type_code?,
            note: self.note,
            document_currency_code: document_currency,
            tax_currency_code: self.tax_currency_code,
            invoice_period: (!invoice_period.is_empty()).then_some(invoice_period),
            billing_references: self.billing_references,
            seller: PartySummary {
                tax_id: self.seller_tax_id,
                country_code: self.seller_country_code,
            },
            buyer: PartySummary {
                tax_id: self.buyer_tax_id,
                country_code: self.buyer_country_code,
            },
            tax_representative: (!tax_representative.is_empty()).then_some(tax_representative),
            delivery_date: self.delivery_date,
            payment_means: self.payment_means,
            allowance_charges: self.allowance_charges,
            tax_total: self.tax_total_document_currency?,
            tax_total_tax_currency: self.tax_total_tax_currency,
            monetary_total,
            lines: self.lines,
        })
    }
}

impl TddBuilder for TransactionBuilder {
    type Output = ReportedTransaction;

    const CONTEXT: &'static str = "ReportedTransaction";

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.customization_id.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "CustomizationID"));
        }
        if self.profile_id.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "ProfileID"));
        }
        if self.id.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "ID"));
        }
        if self.issue_date.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "IssueDate"));
        }
        // issue_time is optional
        if self.document_type_code.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "DocumentTypeCode"));
        }
        // note and the invoice period are optional
        if self.document_currency_code.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "DocumentCurrencyCode"));
        }
        // billing references, parties, delivery date, payment means and
        // allowance charges are optional or may be empty

        match &self.tax_total_document_currency {
            None => {
                errors.push(ValidationError::missing(
                    Self::CONTEXT,
                    "TaxTotalDocumentCurrency",
                ));
            }
            Some(total) => {
                if let Some(currency) = &self.document_currency_code {
                    if &total.tax_amount.currency_id != currency {
                        errors.push(ValidationError::rule(
                            Self::CONTEXT,
                            "TaxTotalDocumentCurrency",
                            format!(
                                "TaxTotalDocumentCurrency is tagged with '{}' but the document currency is '{currency}'",
                                total.tax_amount.currency_id
                            ),
                        ));
                    }
                }
            }
        }
        match (&self.tax_total_tax_currency, &self.tax_currency_code) {
            (Some(_), None) => {
                errors.push(ValidationError::rule(
                    Self::CONTEXT,
                    "TaxCurrencyCode",
                    "if TaxTotalTaxCurrency is provided, TaxCurrencyCode must also be provided",
                ));
            }
            (None, Some(_)) => {
                errors.push(ValidationError::rule(
                    Self::CONTEXT,
                    "TaxTotalTaxCurrency",
                    "if TaxCurrencyCode is provided, TaxTotalTaxCurrency must also be provided",
                ));
            }
            (Some(total), Some(currency)) => {
                if &total.tax_amount.currency_id != currency {
                    errors.push(ValidationError::rule(
                        Self::CONTEXT,
                        "TaxTotalTaxCurrency",
                        format!(
                            "TaxTotalTaxCurrency is tagged with '{}' but the tax currency is '{currency}'",
                            total.tax_amount.currency_id
                        ),
                    ));
                }
            }
            (None, None) => {}
        }

        if self.line_extension_amount.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "LineExtensionAmount"));
        }
        if self.tax_exclusive_amount.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "TaxExclusiveAmount"));
        }
        if self.tax_inclusive_amount.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "TaxInclusiveAmount"));
        }
        // allowance/charge/prepaid/rounding totals are optional
        if self.payable_amount.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "PayableAmount"));
        }

        if self.lines.is_empty() {
            errors.push(ValidationError::rule(
                Self::CONTEXT,
                "DocumentLine",
                "at least one DocumentLine is needed",
            ));
        } else if let Some(currency) = &self.document_currency_code {
            for line in &self.lines {
                if &line.line_extension_amount.currency_id != currency {
                    errors.push(ValidationError::rule(
                        Self::CONTEXT,
                        "DocumentLine",
                        format!(
                            "DocumentLine '{}' is tagged with '{}' but the document currency is '{currency}'",
                            line.id, line.line_extension_amount.currency_id
                        ),
                    ));
                }
            }
        }

        errors
    }

    /// Assemble the transaction.
    ///
    /// Two outcomes exist besides success: a transaction whose mandatory
    /// fields are incomplete yields `None` — unless its type code is
    /// [`DocumentTypeCode::Disregard`], in which case it is still reported,
    /// with the document absent, as not reconstructable.
    fn build(self) -> Option<ReportedTransaction> {
        let errors = self.missing_fields();
        if !errors.is_empty() {
            if self.type_code != DocumentTypeCode::Disregard {
                report_build_failure(&errors, Self::CONTEXT);
                return None;
            }
            super::log_errors(&errors);
            log::warn!(
                "disregarded transaction failed the mandatory-field check; reporting it without a document"
            );
            return Some(ReportedTransaction {
                reported_document: None,
            });
        }
        Some(ReportedTransaction {
            reported_document: self.assemble_document(),
        })
    }
}

fn extract_party(party: &ubl::Party) -> (Option<String>, Option<String>) {
    // Only the first tax scheme entry is reported.
    let tax_id = party
        .party_tax_schemes
        .first()
        .and_then(|pts| pts.company_id.clone());
    let country = party
        .postal_address
        .as_ref()
        .and_then(|address| address.country.as_ref())
        .and_then(|country| country.identification_code.clone());
    (tax_id, country)
}

/// Pick the source tax total whose amount is tagged with `currency`.
/// First match wins; further matches are dropped with a warning, since two
/// totals in one currency indicate a malformed source document.
fn select_tax_total<'a>(totals: &'a [ubl::TaxTotal], currency: &str) -> Option<&'a ubl::TaxTotal> {
    let mut matches = totals.iter().filter(|total| {
        total
            .tax_amount
            .as_ref()
            .and_then(|amount| amount.currency_id.as_deref())
            == Some(currency)
    });
    let first = matches.next();
    if matches.next().is_some() {
        log::warn!("multiple source TaxTotals tagged with '{currency}'; keeping the first");
    }
    first
}
