use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier with an optional scheme attribute (`cbc:ID/@schemeID`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub value: String,
    pub scheme_id: Option<String>,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            scheme_id: None,
        }
    }

    pub fn with_scheme(value: impl Into<String>, scheme_id: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            scheme_id: Some(scheme_id.into()),
        }
    }
}

/// Amount with an optional currency attribute (`@currencyID`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: Decimal,
    pub currency_id: Option<String>,
}

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Self {
            value,
            currency_id: None,
        }
    }

    pub fn in_currency(value: Decimal, currency_id: impl Into<String>) -> Self {
        Self {
            value,
            currency_id: Some(currency_id.into()),
        }
    }
}

/// Quantity with an optional unit code attribute (`@unitCode`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: Decimal,
    pub unit_code: Option<String>,
}

/// `cac:InvoicePeriod`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description_codes: Vec<String>,
}

/// `cac:Country`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub identification_code: Option<String>,
}

/// `cac:PostalAddress` — only the country matters for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub country: Option<Country>,
}

/// `cac:TaxScheme`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxScheme {
    pub id: Option<String>,
}

/// `cac:PartyTaxScheme`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyTaxScheme {
    pub company_id: Option<String>,
    pub tax_scheme: Option<TaxScheme>,
}

/// `cac:Party`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub party_tax_schemes: Vec<PartyTaxScheme>,
    pub postal_address: Option<Address>,
}

/// `cac:AccountingSupplierParty`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierParty {
    pub party: Option<Party>,
}

/// `cac:AccountingCustomerParty`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerParty {
    pub party: Option<Party>,
}

/// `cac:Delivery`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub actual_delivery_date: Option<NaiveDate>,
}

/// `cac:InvoiceDocumentReference`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    pub id: Option<Identifier>,
    pub issue_date: Option<NaiveDate>,
}

/// `cac:BillingReference`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingReference {
    pub invoice_document_reference: Option<DocumentReference>,
}

/// `cbc:PaymentMeansCode` with its `@name` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMeansCode {
    pub value: Option<String>,
    pub name: Option<String>,
}

/// `cac:CardAccount`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAccount {
    pub primary_account_number_id: Option<String>,
    pub network_id: Option<String>,
    pub holder_name: Option<String>,
}

/// `cac:FinancialInstitutionBranch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: Option<Identifier>,
}

/// `cac:PayeeFinancialAccount`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialAccount {
    pub id: Option<Identifier>,
    pub financial_institution_branch: Option<Branch>,
}

/// `cac:PaymentMeans`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMeans {
    pub payment_means_code: Option<PaymentMeansCode>,
    pub payment_ids: Vec<String>,
    pub card_account: Option<CardAccount>,
    pub payee_financial_account: Option<FinancialAccount>,
}

/// `cac:TaxCategory` / `cac:ClassifiedTaxCategory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxCategory {
    pub id: Option<Identifier>,
    pub percent: Option<Decimal>,
    pub tax_exemption_reason_code: Option<String>,
    pub tax_exemption_reasons: Vec<String>,
    pub tax_scheme: Option<TaxScheme>,
}

/// `cac:TaxSubtotal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxSubtotal {
    pub taxable_amount: Option<Amount>,
    pub tax_amount: Option<Amount>,
    pub tax_category: Option<TaxCategory>,
}

/// `cac:TaxTotal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxTotal {
    pub tax_amount: Option<Amount>,
    pub tax_subtotals: Vec<TaxSubtotal>,
}

/// `cac:AllowanceCharge`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllowanceCharge {
    pub charge_indicator: Option<bool>,
    pub allowance_charge_reason_code: Option<String>,
    pub allowance_charge_reasons: Vec<String>,
    pub multiplier_factor_numeric: Option<Decimal>,
    pub amount: Option<Amount>,
    pub base_amount: Option<Amount>,
    pub tax_categories: Vec<TaxCategory>,
}

/// `cbc:ItemClassificationCode` with its list attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemClassificationCode {
    pub value: String,
    pub list_id: Option<String>,
    pub list_version_id: Option<String>,
}

/// `cac:CommodityClassification`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommodityClassification {
    pub item_classification_code: Option<ItemClassificationCode>,
}

/// `cac:Item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub descriptions: Vec<String>,
    pub name: Option<String>,
    pub commodity_classifications: Vec<CommodityClassification>,
    pub classified_tax_categories: Vec<TaxCategory>,
}

/// `cac:Price`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub price_amount: Option<Amount>,
}

/// `cac:LegalMonetaryTotal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonetaryTotal {
    pub line_extension_amount: Option<Amount>,
    pub tax_exclusive_amount: Option<Amount>,
    pub tax_inclusive_amount: Option<Amount>,
    pub allowance_total_amount: Option<Amount>,
    pub charge_total_amount: Option<Amount>,
    pub prepaid_amount: Option<Amount>,
    pub payable_rounding_amount: Option<Amount>,
    pub payable_amount: Option<Amount>,
}

/// `cac:InvoiceLine`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub id: Option<String>,
    pub notes: Vec<String>,
    pub invoiced_quantity: Option<Quantity>,
    pub line_extension_amount: Option<Amount>,
    pub invoice_periods: Vec<Period>,
    pub allowance_charges: Vec<AllowanceCharge>,
    pub item: Option<Item>,
    pub price: Option<Price>,
}

/// `cac:CreditNoteLine` — identical to [`InvoiceLine`] except the quantity
/// element is `cbc:CreditedQuantity`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditNoteLine {
    pub id: Option<String>,
    pub notes: Vec<String>,
    pub credited_quantity: Option<Quantity>,
    pub line_extension_amount: Option<Amount>,
    pub invoice_periods: Vec<Period>,
    pub allowance_charges: Vec<AllowanceCharge>,
    pub item: Option<Item>,
    pub price: Option<Price>,
}

/// UBL 2.1 Invoice, reduced to the fields the reporting extraction reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub customization_id: Option<String>,
    pub profile_id: Option<String>,
    pub id: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub issue_time: Option<NaiveTime>,
    pub invoice_type_code: Option<String>,
    pub notes: Vec<String>,
    pub document_currency_code: Option<String>,
    pub tax_currency_code: Option<String>,
    pub invoice_periods: Vec<Period>,
    pub billing_references: Vec<BillingReference>,
    pub accounting_supplier_party: Option<SupplierParty>,
    pub accounting_customer_party: Option<CustomerParty>,
    pub tax_representative_party: Option<Party>,
    pub deliveries: Vec<Delivery>,
    pub payment_means: Vec<PaymentMeans>,
    pub allowance_charges: Vec<AllowanceCharge>,
    pub tax_totals: Vec<TaxTotal>,
    pub legal_monetary_total: Option<MonetaryTotal>,
    pub invoice_lines: Vec<InvoiceLine>,
}

/// UBL 2.1 CreditNote, reduced to the fields the reporting extraction reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditNote {
    pub customization_id: Option<String>,
    pub profile_id: Option<String>,
    pub id: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub issue_time: Option<NaiveTime>,
    pub credit_note_type_code: Option<String>,
    pub notes: Vec<String>,
    pub document_currency_code: Option<String>,
    pub tax_currency_code: Option<String>,
    pub invoice_periods: Vec<Period>,
    pub billing_references: Vec<BillingReference>,
    pub accounting_supplier_party: Option<SupplierParty>,
    pub accounting_customer_party: Option<CustomerParty>,
    pub tax_representative_party: Option<Party>,
    pub deliveries: Vec<Delivery>,
    pub payment_means: Vec<PaymentMeans>,
    pub allowance_charges: Vec<AllowanceCharge>,
    pub tax_totals: Vec<TaxTotal>,
    pub legal_monetary_total: Option<MonetaryTotal>,
    pub credit_note_lines: Vec<CreditNoteLine>,
}
