use chrono::{NaiveDate, NaiveTime};
use peppol_tdd::builder::*;
use peppol_tdd::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn standard_rate_category() -> TaxCategory {
    TaxCategoryBuilder::new()
        .id("S")
        .percent(dec!(20))
        .tax_scheme_id("VAT")
        .build()
        .unwrap()
}

fn eur_tax_total() -> TaxTotal {
    TaxTotalBuilder::new("EUR")
        .tax_amount(dec!(20.00))
        .add_subtotal(
            TaxSubtotalBuilder::new("EUR")
                .taxable_amount(dec!(100.00))
                .tax_amount(dec!(20.00))
                .tax_category_id("S")
                .percent(dec!(20))
                .tax_scheme_id("VAT")
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

fn widget_line() -> DocumentLine {
    DocumentLineBuilder::new("EUR")
        .id("1")
        .quantity(dec!(10), "C62")
        .line_extension_amount(dec!(100.00))
        .item(
            ItemBuilder::new()
                .name("Widget")
                .classified_tax_category(standard_rate_category())
                .build()
                .unwrap(),
        )
        .price_amount(dec!(10.00))
        .build()
        .unwrap()
}

/// A transaction builder with every mandatory field present.
fn complete_transaction() -> TransactionBuilder {
    TransactionBuilder::new(DocumentTypeCode::Invoice)
        .customization_id("urn:peppol:pint:taxdata-1@sk-1")
        .profile_id("urn:peppol:bis:taxreporting")
        .id("INV-1")
        .issue_date(date(2026, 2, 17))
        .document_type_code("380")
        .document_currency_code("EUR")
        .seller_tax_id("SK2021234567")
        .seller_country_code("SK")
        .buyer_tax_id("SK2029876543")
        .buyer_country_code("SK")
        .tax_total_document_currency(eur_tax_total())
        .line_extension_amount(dec!(100.00))
        .tax_exclusive_amount(dec!(100.00))
        .tax_inclusive_amount(dec!(120.00))
        .payable_amount(dec!(120.00))
        .add_document_line(widget_line())
}

// --- Value builders ---

#[test]
fn tax_category_requires_id_and_scheme() {
    let builder = TaxCategoryBuilder::new().percent(dec!(20));
    let missing = builder.missing_fields();
    let fields: Vec<&str> = missing.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["ID", "TaxSchemeID"]);
    assert!(!builder.is_every_required_field_set(false));
    assert!(builder.build().is_none());
}

#[test]
fn tax_category_round_trip() {
    let category = TaxCategoryBuilder::new()
        .id("E")
        .id_scheme("UNCL5305")
        .exemption_reason_code("VATEX-EU-132")
        .exemption_reason("Exempt hospital care")
        .tax_scheme_id("VAT")
        .build()
        .unwrap();
    assert_eq!(category.id, "E");
    assert_eq!(category.scheme_id.as_deref(), Some("UNCL5305"));
    assert_eq!(category.percent, None);
    assert_eq!(category.exemption_reason_code.as_deref(), Some("VATEX-EU-132"));
    assert_eq!(category.exemption_reason.as_deref(), Some("Exempt hospital care"));
    assert_eq!(category.tax_scheme_id, "VAT");
}

#[test]
fn billing_reference_requires_id() {
    assert!(BillingReferenceBuilder::new().build().is_none());

    let reference = BillingReferenceBuilder::new()
        .id("INV-2025-044")
        .issue_date(date(2025, 12, 1))
        .build()
        .unwrap();
    assert_eq!(reference.id, "INV-2025-044");
    assert_eq!(reference.issue_date, Some(date(2025, 12, 1)));
}

#[test]
fn commodity_classification_requires_code_and_list() {
    let builder = CommodityClassificationBuilder::new().code("09111");
    let fields: Vec<&str> = builder.missing_fields().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["ListID"]);

    let classification = CommodityClassificationBuilder::new()
        .code("09111")
        .list_id("STI")
        .list_version_id("20.0601")
        .build()
        .unwrap();
    assert_eq!(classification.code, "09111");
    assert_eq!(classification.list_id, "STI");
    assert_eq!(classification.list_version_id.as_deref(), Some("20.0601"));
}

#[test]
fn payment_means_requires_code() {
    assert!(PaymentMeansBuilder::new().build().is_none());

    let means = PaymentMeansBuilder::new()
        .code("30")
        .code_name("Credit transfer")
        .payment_id("INV-1")
        .payee_account_id("SK3112000000198742637541")
        .build()
        .unwrap();
    assert_eq!(means.code, "30");
    assert_eq!(means.payment_id.as_deref(), Some("INV-1"));
    let account = means.payee_account.unwrap();
    assert_eq!(account.id, "SK3112000000198742637541");
    assert!(means.card.is_none());
}

#[test]
fn allowance_charge_amounts_tagged_with_constructor_currency() {
    let allowance = AllowanceChargeBuilder::new("EUR")
        .amount(dec!(5.00))
        .base_amount(dec!(100.00))
        .multiplier_factor(dec!(5))
        .reason("Volume discount")
        .build()
        .unwrap();
    assert!(!allowance.charge);
    assert_eq!(allowance.amount, Amount::new(dec!(5.00), "EUR"));
    assert_eq!(allowance.base_amount, Some(Amount::new(dec!(100.00), "EUR")));
}

// --- Composite builders ---

#[test]
fn tax_subtotal_flattens_category() {
    let subtotal = TaxSubtotalBuilder::new("EUR")
        .taxable_amount(dec!(100.00))
        .tax_amount(dec!(20.00))
        .tax_category_id("S")
        .percent(dec!(20))
        .tax_scheme_id("VAT")
        .build()
        .unwrap();
    assert_eq!(subtotal.taxable_amount.currency_id, "EUR");
    assert_eq!(subtotal.tax_amount.value, dec!(20.00));
    assert_eq!(subtotal.tax_category.id, "S");
    assert_eq!(subtotal.tax_category.percent, Some(dec!(20)));
}

#[test]
fn tax_total_requires_tax_amount_but_not_subtotals() {
    let builder = TaxTotalBuilder::new("EUR");
    assert_eq!(builder.currency_code(), "EUR");
    assert!(builder.build().is_none());

    let total = TaxTotalBuilder::new("EUR").tax_amount(dec!(0)).build().unwrap();
    assert!(total.subtotals.is_empty());
    assert_eq!(total.tax_amount, Amount::new(dec!(0), "EUR"));
}

#[test]
fn document_line_reports_every_missing_field() {
    let builder = DocumentLineBuilder::new("EUR");
    assert_eq!(builder.currency_code(), "EUR");
    let fields: Vec<&str> = builder.missing_fields().iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["ID", "Quantity", "QuantityUnit", "LineExtensionAmount", "Item", "PriceAmount"]
    );
}

#[test]
fn document_line_round_trip() {
    let line = DocumentLineBuilder::new("EUR")
        .id("7")
        .note("rush order")
        .quantity(dec!(2.5), "KGM")
        .line_extension_amount(dec!(42.50))
        .invoice_period_start(date(2026, 1, 1))
        .invoice_period_end(date(2026, 1, 31))
        .item(
            ItemBuilder::new()
                .name("Bulk flour")
                .description("Type 650")
                .classified_tax_category(standard_rate_category())
                .build()
                .unwrap(),
        )
        .price_amount(dec!(17.00))
        .build()
        .unwrap();

    assert_eq!(line.id, "7");
    assert_eq!(line.note.as_deref(), Some("rush order"));
    assert_eq!(line.quantity, dec!(2.5));
    assert_eq!(line.quantity_unit, "KGM");
    assert_eq!(line.line_extension_amount, Amount::new(dec!(42.50), "EUR"));
    let period = line.invoice_period.unwrap();
    assert_eq!(period.start_date, Some(date(2026, 1, 1)));
    assert_eq!(period.end_date, Some(date(2026, 1, 31)));
    assert_eq!(line.item.name, "Bulk flour");
    assert_eq!(line.price_amount, Amount::new(dec!(17.00), "EUR"));
}

#[test]
fn item_requires_classified_tax_category() {
    let fields: Vec<&str> = ItemBuilder::new()
        .name("Widget")
        .missing_fields()
        .iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(fields, vec!["ClassifiedTaxCategory"]);
}

// --- Transaction: mandatory fields ---

#[test]
fn complete_transaction_builds() {
    let builder = complete_transaction();
    assert!(builder.is_every_required_field_set(false));

    let transaction = builder.build().unwrap();
    let document = transaction.reported_document.unwrap();
    assert_eq!(document.id, "INV-1");
    assert_eq!(document.document_type_code, "380");
    assert_eq!(document.document_currency_code, "EUR");
    assert_eq!(document.seller.tax_id.as_deref(), Some("SK2021234567"));
    assert_eq!(document.lines.len(), 1);
    assert_eq!(document.tax_total.tax_amount, Amount::new(dec!(20.00), "EUR"));
}

#[test]
fn missing_payable_amount_is_the_only_diagnostic() {
    let builder = TransactionBuilder::new(DocumentTypeCode::Invoice)
        .customization_id("urn:peppol:pint:taxdata-1@sk-1")
        .profile_id("urn:peppol:bis:taxreporting")
        .id("INV-1")
        .issue_date(date(2026, 2, 17))
        .document_type_code("380")
        .document_currency_code("EUR")
        .tax_total_document_currency(eur_tax_total())
        .line_extension_amount(dec!(100.00))
        .tax_exclusive_amount(dec!(100.00))
        .tax_inclusive_amount(dec!(120.00))
        .add_document_line(widget_line());

    let missing = builder.missing_fields();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].field, "PayableAmount");
    assert_eq!(missing[0].context, "ReportedTransaction");
    assert!(builder.build().is_none());
}

#[test]
fn empty_transaction_lists_all_mandatory_fields() {
    let fields: Vec<&str> = TransactionBuilder::new(DocumentTypeCode::Invoice)
        .missing_fields()
        .iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(
        fields,
        vec![
            "CustomizationID",
            "ProfileID",
            "ID",
            "IssueDate",
            "DocumentTypeCode",
            "DocumentCurrencyCode",
            "TaxTotalDocumentCurrency",
            "LineExtensionAmount",
            "TaxExclusiveAmount",
            "TaxInclusiveAmount",
            "PayableAmount",
            "DocumentLine",
        ]
    );
}

#[test]
fn monetary_amounts_tagged_with_document_currency() {
    let document = complete_transaction()
        .allowance_total_amount(dec!(5.00))
        .prepaid_amount(dec!(50.00))
        .build()
        .unwrap()
        .reported_document
        .unwrap();

    let totals = &document.monetary_total;
    assert_eq!(totals.line_extension_amount, Amount::new(dec!(100.00), "EUR"));
    assert_eq!(totals.tax_exclusive_amount, Amount::new(dec!(100.00), "EUR"));
    assert_eq!(totals.tax_inclusive_amount, Amount::new(dec!(120.00), "EUR"));
    assert_eq!(totals.payable_amount, Amount::new(dec!(120.00), "EUR"));
    assert_eq!(totals.allowance_total_amount, Some(Amount::new(dec!(5.00), "EUR")));
    assert_eq!(totals.prepaid_amount, Some(Amount::new(dec!(50.00), "EUR")));
    assert_eq!(totals.charge_total_amount, None);
    assert_eq!(totals.payable_rounding_amount, None);
}

// --- Transaction: tax currency pairing ---

#[test]
fn tax_currency_code_without_total_is_rejected() {
    let builder = complete_transaction().tax_currency_code("CZK");
    let missing = builder.missing_fields();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].field, "TaxTotalTaxCurrency");
    assert!(builder.build().is_none());
}

#[test]
fn tax_currency_total_without_code_is_rejected() {
    let czk_total = TaxTotalBuilder::new("CZK").tax_amount(dec!(500.00)).build().unwrap();
    let builder = complete_transaction().tax_total_tax_currency(czk_total);
    let missing = builder.missing_fields();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].field, "TaxCurrencyCode");
    assert!(builder.build().is_none());
}

#[test]
fn matching_tax_currency_pair_builds() {
    let czk_total = TaxTotalBuilder::new("CZK").tax_amount(dec!(500.00)).build().unwrap();
    let document = complete_transaction()
        .tax_currency_code("CZK")
        .tax_total_tax_currency(czk_total)
        .build()
        .unwrap()
        .reported_document
        .unwrap();
    assert_eq!(document.tax_currency_code.as_deref(), Some("CZK"));
    let total = document.tax_total_tax_currency.unwrap();
    assert_eq!(total.tax_amount, Amount::new(dec!(500.00), "CZK"));
}

#[test]
fn mismatched_tax_currency_tag_is_rejected() {
    // Total tagged EUR attached to the CZK tax-currency slot.
    let builder = complete_transaction()
        .tax_currency_code("CZK")
        .tax_total_tax_currency(eur_tax_total());
    let missing = builder.missing_fields();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].field, "TaxTotalTaxCurrency");
}

#[test]
fn mismatched_document_currency_tag_is_rejected() {
    let usd_total = TaxTotalBuilder::new("USD").tax_amount(dec!(20.00)).build().unwrap();
    let builder = complete_transaction().tax_total_document_currency(usd_total);
    let missing = builder.missing_fields();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].field, "TaxTotalDocumentCurrency");
}

// --- Transaction: disregard state machine ---

#[test]
fn incomplete_disregarded_transaction_reports_without_document() {
    let transaction = TransactionBuilder::new(DocumentTypeCode::Disregard)
        .id("INV-VOID-1")
        .build()
        .unwrap();
    assert!(transaction.reported_document.is_none());
}

#[test]
fn complete_disregarded_transaction_keeps_its_document() {
    let transaction = TransactionBuilder::new(DocumentTypeCode::Disregard)
        .customization_id("urn:peppol:pint:taxdata-1@sk-1")
        .profile_id("urn:peppol:bis:taxreporting")
        .id("INV-VOID-2")
        .issue_date(date(2026, 2, 17))
        .document_type_code("380")
        .document_currency_code("EUR")
        .tax_total_document_currency(eur_tax_total())
        .line_extension_amount(dec!(100.00))
        .tax_exclusive_amount(dec!(100.00))
        .tax_inclusive_amount(dec!(120.00))
        .payable_amount(dec!(120.00))
        .add_document_line(widget_line())
        .build()
        .unwrap();
    assert!(transaction.reported_document.is_some());
}

#[test]
fn incomplete_regular_transaction_yields_nothing() {
    assert!(TransactionBuilder::new(DocumentTypeCode::CreditNote).build().is_none());
}

// --- Transaction: identifier derivation ---

#[test]
fn uuid_matches_business_key_derivation() {
    let document = complete_transaction().build().unwrap().reported_document.unwrap();
    let expected = derive_transaction_uuid(&BusinessKey {
        document_type_code: Some("380"),
        id: Some("INV-1"),
        issue_date: Some(date(2026, 2, 17)),
        seller_tax_id: Some("SK2021234567"),
    });
    assert_eq!(document.uuid, expected);
}

#[test]
fn uuid_changes_with_seller_tax_id() {
    let a = complete_transaction().build().unwrap().reported_document.unwrap();
    let b = complete_transaction()
        .seller_tax_id("SK7020000746")
        .build()
        .unwrap()
        .reported_document
        .unwrap();
    assert_ne!(a.uuid, b.uuid);
}

// --- Transaction: optional structure ---

#[test]
fn issue_time_truncated_to_milliseconds() {
    let time = NaiveTime::from_hms_nano_opt(10, 30, 15, 123_456_789).unwrap();
    let document = complete_transaction()
        .issue_time(time)
        .build()
        .unwrap()
        .reported_document
        .unwrap();
    assert_eq!(
        document.issue_time,
        NaiveTime::from_hms_nano_opt(10, 30, 15, 123_000_000)
    );
}

#[test]
fn empty_optional_parties_stay_absent() {
    let document = complete_transaction().build().unwrap().reported_document.unwrap();
    assert!(document.tax_representative.is_none());
    assert!(document.invoice_period.is_none());
    assert!(document.note.is_none());
    assert!(document.delivery_date.is_none());
    assert!(document.billing_references.is_empty());
}

#[test]
fn partial_invoice_period_is_kept() {
    let document = complete_transaction()
        .invoice_period_start(date(2026, 1, 1))
        .build()
        .unwrap()
        .reported_document
        .unwrap();
    let period = document.invoice_period.unwrap();
    assert_eq!(period.start_date, Some(date(2026, 1, 1)));
    assert_eq!(period.end_date, None);
    assert_eq!(period.description_code, None);
}

#[test]
fn setters_overwrite_idempotently() {
    let document = complete_transaction()
        .id("FIRST")
        .id("SECOND")
        .build()
        .unwrap()
        .reported_document
        .unwrap();
    assert_eq!(document.id, "SECOND");
}
