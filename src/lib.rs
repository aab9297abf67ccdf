//! # peppol-tdd
//!
//! Normalization of UBL 2.1 Invoice and CreditNote documents into the
//! Peppol ViDA Tax Data Document (TDD) reporting representation used by
//! the Slovak pilot.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. The builder tree mirrors the structure of the reported document:
//! every builder accumulates fields without validating, exposes a pure
//! mandatory-field check, and assembles the immutable entity only when
//! that check passes.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use peppol_tdd::builder::*;
//! use peppol_tdd::core::DocumentTypeCode;
//! use rust_decimal_macros::dec;
//!
//! let category = TaxCategoryBuilder::new()
//!     .id("S")
//!     .percent(dec!(20))
//!     .tax_scheme_id("VAT")
//!     .build()
//!     .unwrap();
//!
//! let tax_total = TaxTotalBuilder::new("EUR")
//!     .tax_amount(dec!(20.00))
//!     .add_subtotal(
//!         TaxSubtotalBuilder::new("EUR")
//!             .taxable_amount(dec!(100.00))
//!             .tax_amount(dec!(20.00))
//!             .tax_category_id("S")
//!             .percent(dec!(20))
//!             .tax_scheme_id("VAT")
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let line = DocumentLineBuilder::new("EUR")
//!     .id("1")
//!     .quantity(dec!(10), "C62")
//!     .line_extension_amount(dec!(100.00))
//!     .item(ItemBuilder::new().name("Widget").classified_tax_category(category).build().unwrap())
//!     .price_amount(dec!(10.00))
//!     .build()
//!     .unwrap();
//!
//! let builder = TransactionBuilder::new(DocumentTypeCode::Invoice)
//!     .customization_id("urn:peppol:pint:taxdata-1@sk-1")
//!     .profile_id("urn:peppol:bis:taxreporting")
//!     .id("INV-1")
//!     .issue_date(NaiveDate::from_ymd_opt(2026, 2, 17).unwrap())
//!     .document_type_code("380")
//!     .document_currency_code("EUR")
//!     .seller_tax_id("SK2021234567")
//!     .tax_total_document_currency(tax_total)
//!     .line_extension_amount(dec!(100.00))
//!     .tax_exclusive_amount(dec!(100.00))
//!     .tax_inclusive_amount(dec!(120.00))
//!     .payable_amount(dec!(120.00))
//!     .add_document_line(line);
//!
//! assert!(builder.is_every_required_field_set(false));
//! let transaction = builder.build().unwrap();
//! let document = transaction.reported_document.unwrap();
//! assert_eq!(document.id, "INV-1");
//! assert_eq!(document.monetary_total.payable_amount.value, dec!(120.00));
//! ```

pub mod builder;
pub mod core;
pub mod ubl;
pub mod validate;

// Re-export the normalized model and the builder tree at crate root for
// convenience. The UBL source shapes stay behind `ubl::` since several of
// their names (Amount, TaxTotal, ...) mirror the normalized ones.
pub use crate::builder::*;
pub use crate::core::*;
