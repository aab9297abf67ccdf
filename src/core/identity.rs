//! Deterministic transaction identifier derivation.
//!
//! The reporting rules require the document UUID to be reproducible: the
//! same source document must yield the same identifier on every run, so the
//! authority can deduplicate re-submissions. The identifier is a name-based
//! (version 5) UUID over the business key.

use chrono::NaiveDate;
use uuid::Uuid;

/// Namespace for the name-based transaction UUIDs.
///
/// Fixed by the ViDA pilot solution architecture; treat as configuration,
/// never derive it.
pub const TDD_UUID_NAMESPACE: Uuid = uuid::uuid!("e0bc4ac8-b025-46e5-a76d-0c893fc3027e");

/// The tuple that uniquely identifies a reported transaction.
///
/// Absent members contribute an empty string to the derivation, so a key
/// with a missing seller tax ID still derives a stable identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessKey<'a> {
    pub document_type_code: Option<&'a str>,
    pub id: Option<&'a str>,
    pub issue_date: Option<NaiveDate>,
    pub seller_tax_id: Option<&'a str>,
}

/// Derive the transaction UUID from the business key.
///
/// Pure function: identical inputs always produce the identical UUID.
/// The issue date enters in ISO calendar-date form (`YYYY-MM-DD`).
pub fn derive_transaction_uuid(key: &BusinessKey<'_>) -> Uuid {
    let mut name = String::new();
    name.push_str(key.document_type_code.unwrap_or(""));
    name.push_str(key.id.unwrap_or(""));
    if let Some(date) = key.issue_date {
        name.push_str(&date.format("%Y-%m-%d").to_string());
    }
    name.push_str(key.seller_tax_id.unwrap_or(""));
    Uuid::new_v5(&TDD_UUID_NAMESPACE, name.as_bytes())
}
