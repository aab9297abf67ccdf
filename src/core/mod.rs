//! Normalized target model, error types, and identifier derivation.
//!
//! The types here are the immutable output of the builder hierarchy in
//! [`crate::builder`]; they follow the Peppol TDD 1.0.0 structure.

mod error;
pub mod identity;
mod types;

pub use error::*;
pub use identity::{derive_transaction_uuid, BusinessKey, TDD_UUID_NAMESPACE};
pub use types::*;
