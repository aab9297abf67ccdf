//! Property-based tests for the builder tree and identifier derivation.

use chrono::NaiveDate;
use peppol_tdd::builder::*;
use peppol_tdd::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
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
    TaxTotalBuilder::new("EUR").tax_amount(dec!(20.00)).build().unwrap()
}

fn widget_line(currency: &str) -> DocumentLine {
    DocumentLineBuilder::new(currency)
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

/// Decimal in a realistic invoice range with two fraction digits.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn id_string() -> impl Strategy<Value = String> {
    "[A-Z0-9][A-Z0-9-]{0,19}"
}

fn currency() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

proptest! {
    // --- build() agrees with the mandatory-field check ---

    #[test]
    fn build_succeeds_iff_every_required_field_set(
        set_customization in any::<bool>(),
        set_profile in any::<bool>(),
        set_id in any::<bool>(),
        set_issue_date in any::<bool>(),
        set_type_code in any::<bool>(),
        set_currency in any::<bool>(),
        set_tax_total in any::<bool>(),
        set_line_extension in any::<bool>(),
        set_tax_exclusive in any::<bool>(),
        set_tax_inclusive in any::<bool>(),
        set_payable in any::<bool>(),
        set_line in any::<bool>(),
    ) {
        let mut builder = TransactionBuilder::new(DocumentTypeCode::Invoice);
        if set_customization {
            builder = builder.customization_id("urn:peppol:pint:taxdata-1@sk-1");
        }
        if set_profile {
            builder = builder.profile_id("urn:peppol:bis:taxreporting");
        }
        if set_id {
            builder = builder.id("INV-1");
        }
        if set_issue_date {
            builder = builder.issue_date(date(2026, 2, 17));
        }
        if set_type_code {
            builder = builder.document_type_code("380");
        }
        if set_currency {
            builder = builder.document_currency_code("EUR");
        }
        if set_tax_total {
            builder = builder.tax_total_document_currency(eur_tax_total());
        }
        if set_line_extension {
            builder = builder.line_extension_amount(dec!(100.00));
        }
        if set_tax_exclusive {
            builder = builder.tax_exclusive_amount(dec!(100.00));
        }
        if set_tax_inclusive {
            builder = builder.tax_inclusive_amount(dec!(120.00));
        }
        if set_payable {
            builder = builder.payable_amount(dec!(120.00));
        }
        if set_line {
            builder = builder.add_document_line(widget_line("EUR"));
        }

        let complete = builder.is_every_required_field_set(false);
        let missing = builder.missing_fields().len();
        prop_assert_eq!(complete, missing == 0);
        prop_assert_eq!(builder.build().is_some(), complete);
    }

    #[test]
    fn missing_field_count_matches_unset_count(
        set_id in any::<bool>(),
        set_issue_date in any::<bool>(),
        set_payable in any::<bool>(),
    ) {
        let mut builder = TransactionBuilder::new(DocumentTypeCode::Invoice)
            .customization_id("urn:peppol:pint:taxdata-1@sk-1")
            .profile_id("urn:peppol:bis:taxreporting")
            .document_type_code("380")
            .document_currency_code("EUR")
            .tax_total_document_currency(eur_tax_total())
            .line_extension_amount(dec!(100.00))
            .tax_exclusive_amount(dec!(100.00))
            .tax_inclusive_amount(dec!(120.00))
            .add_document_line(widget_line("EUR"));
        let mut expected = 0;
        if set_id {
            builder = builder.id("INV-1");
        } else {
            expected += 1;
        }
        if set_issue_date {
            builder = builder.issue_date(date(2026, 2, 17));
        } else {
            expected += 1;
        }
        if set_payable {
            builder = builder.payable_amount(dec!(120.00));
        } else {
            expected += 1;
        }
        prop_assert_eq!(builder.missing_fields().len(), expected);
    }

    // --- Identifier derivation ---

    #[test]
    fn uuid_derivation_is_deterministic(
        type_code in id_string(),
        id in id_string(),
        seller in id_string(),
    ) {
        let key = BusinessKey {
            document_type_code: Some(&type_code),
            id: Some(&id),
            issue_date: Some(date(2026, 2, 17)),
            seller_tax_id: Some(&seller),
        };
        prop_assert_eq!(derive_transaction_uuid(&key), derive_transaction_uuid(&key));
    }

    #[test]
    fn uuid_depends_on_document_id(id in id_string()) {
        let base = BusinessKey {
            document_type_code: Some("380"),
            id: Some(&id),
            issue_date: Some(date(2026, 2, 17)),
            seller_tax_id: Some("SK2021234567"),
        };
        let altered_id = format!("{id}X");
        let altered = BusinessKey {
            id: Some(&altered_id),
            ..base.clone()
        };
        prop_assert_ne!(derive_transaction_uuid(&base), derive_transaction_uuid(&altered));
    }

    #[test]
    fn uuid_treats_absent_members_as_empty(id in id_string()) {
        let absent = BusinessKey {
            document_type_code: None,
            id: Some(&id),
            issue_date: Some(date(2026, 2, 17)),
            seller_tax_id: None,
        };
        let empty = BusinessKey {
            document_type_code: Some(""),
            id: Some(&id),
            issue_date: Some(date(2026, 2, 17)),
            seller_tax_id: Some(""),
        };
        prop_assert_eq!(derive_transaction_uuid(&absent), derive_transaction_uuid(&empty));
    }

    // --- Currency tagging ---

    #[test]
    fn line_amounts_carry_constructor_currency(
        cur in currency(),
        extension in money(),
        price in money(),
    ) {
        let line = DocumentLineBuilder::new(cur.as_str())
            .id("1")
            .quantity(dec!(1), "C62")
            .line_extension_amount(extension)
            .item(
                ItemBuilder::new()
                    .name("Widget")
                    .classified_tax_category(standard_rate_category())
                    .build()
                    .unwrap(),
            )
            .price_amount(price)
            .build()
            .unwrap();
        prop_assert_eq!(&line.line_extension_amount.currency_id, &cur);
        prop_assert_eq!(&line.price_amount.currency_id, &cur);
        prop_assert_eq!(line.line_extension_amount.value, extension);
        prop_assert_eq!(line.price_amount.value, price);
    }

    #[test]
    fn tax_total_amounts_carry_constructor_currency(
        cur in currency(),
        taxable in money(),
        tax in money(),
    ) {
        let total = TaxTotalBuilder::new(cur.as_str())
            .tax_amount(tax)
            .add_subtotal(
                TaxSubtotalBuilder::new(cur.as_str())
                    .taxable_amount(taxable)
                    .tax_amount(tax)
                    .tax_category_id("S")
                    .tax_scheme_id("VAT")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        prop_assert_eq!(&total.tax_amount.currency_id, &cur);
        prop_assert_eq!(&total.subtotals[0].taxable_amount.currency_id, &cur);
        prop_assert_eq!(&total.subtotals[0].tax_amount.currency_id, &cur);
    }

    // --- Setter semantics ---

    #[test]
    fn last_setter_call_wins(first in id_string(), second in id_string()) {
        let document = TransactionBuilder::new(DocumentTypeCode::Invoice)
            .customization_id("urn:peppol:pint:taxdata-1@sk-1")
            .profile_id("urn:peppol:bis:taxreporting")
            .id(first.as_str())
            .id(second.as_str())
            .issue_date(date(2026, 2, 17))
            .document_type_code("380")
            .document_currency_code("EUR")
            .tax_total_document_currency(eur_tax_total())
            .line_extension_amount(dec!(100.00))
            .tax_exclusive_amount(dec!(100.00))
            .tax_inclusive_amount(dec!(120.00))
            .payable_amount(dec!(120.00))
            .add_document_line(widget_line("EUR"))
            .build()
            .unwrap()
            .reported_document
            .unwrap();
        prop_assert_eq!(document.id, second);
    }
}
