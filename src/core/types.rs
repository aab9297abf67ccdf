use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monetary amount tagged with its ISO 4217 currency code.
///
/// Every amount inside a [`ReportedDocument`] carries the currency it is
/// expressed in; amounts in the document currency all carry the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: Decimal,
    pub currency_id: String,
}

impl Amount {
    pub fn new(value: Decimal, currency_id: impl Into<String>) -> Self {
        Self {
            value,
            currency_id: currency_id.into(),
        }
    }
}

/// Classification of a reported transaction's fate.
///
/// `Disregard` marks a transaction that is reported specifically as not
/// further processable; see [`TransactionBuilder::build`] for how it
/// changes the build outcome.
///
/// [`TransactionBuilder::build`]: crate::builder::TransactionBuilder::build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentTypeCode {
    /// A normally reported invoice.
    Invoice,
    /// A normally reported credit note.
    CreditNote,
    /// Reported as disregarded / not reconstructable.
    Disregard,
}

/// The root normalized artifact handed to the serializer.
///
/// The contained document is absent only for a [`DocumentTypeCode::Disregard`]
/// transaction that also failed mandatory-field validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedTransaction {
    pub reported_document: Option<ReportedDocument>,
}

/// The normalized, validated tax-reporting representation of one source
/// invoice or credit note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedDocument {
    pub customization_id: String,
    pub profile_id: String,
    /// Business identifier of the source document.
    pub id: String,
    /// Deterministic name-based UUID derived from the business key.
    pub uuid: Uuid,
    pub issue_date: NaiveDate,
    pub issue_time: Option<NaiveTime>,
    /// Document type code as carried by the source document (UNTDID 1001).
    pub document_type_code: String,
    pub note: Option<String>,
    pub document_currency_code: String,
    /// Present exactly when `tax_total_tax_currency` is present.
    pub tax_currency_code: Option<String>,
    pub invoice_period: Option<InvoicePeriod>,
    pub billing_references: Vec<BillingReference>,
    pub seller: PartySummary,
    pub buyer: PartySummary,
    pub tax_representative: Option<PartySummary>,
    pub delivery_date: Option<NaiveDate>,
    pub payment_means: Vec<PaymentMeans>,
    pub allowance_charges: Vec<AllowanceCharge>,
    /// Tax total in the document currency (mandatory).
    pub tax_total: TaxTotal,
    /// Tax total in the tax currency, paired with `tax_currency_code`.
    pub tax_total_tax_currency: Option<TaxTotal>,
    pub monetary_total: MonetaryTotal,
    /// At least one line.
    pub lines: Vec<DocumentLine>,
}

/// Seller/buyer/tax-representative summary — tax ID and country only.
///
/// The tax identifier belongs to the fixed "VAT" tax scheme; the scheme is
/// re-attached by the serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySummary {
    pub tax_id: Option<String>,
    pub country_code: Option<String>,
}

impl PartySummary {
    pub fn is_empty(&self) -> bool {
        self.tax_id.is_none() && self.country_code.is_none()
    }
}

/// Invoicing period at document or line level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicePeriod {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description_code: Option<String>,
}

impl InvoicePeriod {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.description_code.is_none()
    }
}

/// Reference to a preceding billing document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingReference {
    pub id: String,
    pub scheme_id: Option<String>,
    pub issue_date: Option<NaiveDate>,
}

/// Payment means entry (UNTDID 4461 code plus optional card/account data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMeans {
    pub code: String,
    pub code_name: Option<String>,
    pub payment_id: Option<String>,
    pub card: Option<CardAccount>,
    pub payee_account: Option<PayeeAccount>,
}

/// Card payment details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAccount {
    pub primary_account_number: String,
    pub network_id: Option<String>,
    pub holder_name: Option<String>,
}

/// Payee financial account with optional institution branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeeAccount {
    pub id: String,
    pub scheme_id: Option<String>,
    pub branch_id: Option<String>,
    pub branch_scheme_id: Option<String>,
}

/// Document-level or line-level allowance (false) or charge (true).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceCharge {
    pub charge: bool,
    pub reason_code: Option<String>,
    pub reason: Option<String>,
    pub multiplier_factor: Option<Decimal>,
    pub amount: Amount,
    pub base_amount: Option<Amount>,
    pub tax_category: Option<TaxCategory>,
}

/// Tax category (UNTDID 5305 identifier plus scheme and exemption details).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxCategory {
    pub id: String,
    pub scheme_id: Option<String>,
    pub percent: Option<Decimal>,
    pub exemption_reason_code: Option<String>,
    pub exemption_reason: Option<String>,
    pub tax_scheme_id: String,
}

/// Aggregate tax amount in one currency, with per-category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxTotal {
    pub tax_amount: Amount,
    pub subtotals: Vec<TaxSubtotal>,
}

/// Per-category tax breakdown entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSubtotal {
    pub taxable_amount: Amount,
    pub tax_amount: Amount,
    pub tax_category: TaxCategory,
}

/// The 8-amount monetary total block. Four amounts are mandatory, the rest
/// optional; all are tagged with the document currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetaryTotal {
    pub line_extension_amount: Amount,
    pub tax_exclusive_amount: Amount,
    pub tax_inclusive_amount: Amount,
    pub allowance_total_amount: Option<Amount>,
    pub charge_total_amount: Option<Amount>,
    pub prepaid_amount: Option<Amount>,
    pub payable_rounding_amount: Option<Amount>,
    pub payable_amount: Amount,
}

/// One normalized document line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLine {
    pub id: String,
    pub note: Option<String>,
    pub quantity: Decimal,
    pub quantity_unit: String,
    pub line_extension_amount: Amount,
    pub invoice_period: Option<InvoicePeriod>,
    pub allowance_charges: Vec<AllowanceCharge>,
    pub item: Item,
    pub price_amount: Amount,
}

/// Item sold on a document line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub description: Option<String>,
    pub name: String,
    pub commodity_classifications: Vec<CommodityClassification>,
    pub classified_tax_category: TaxCategory,
}

/// Commodity classification code within a code list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommodityClassification {
    pub code: String,
    pub list_id: String,
    pub list_version_id: Option<String>,
}
