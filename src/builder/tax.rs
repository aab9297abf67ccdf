use rust_decimal::Decimal;

use super::{report_build_failure, TddBuilder};
use crate::core::{Amount, TaxCategory, TaxSubtotal, TaxTotal, ValidationError};
use crate::ubl;

/// Builder for a tax category, nested inside tax subtotals, items and
/// allowance/charges.
pub struct TaxCategoryBuilder {
    id: Option<String>,
    id_scheme: Option<String>,
    percent: Option<Decimal>,
    exemption_reason_code: Option<String>,
    exemption_reason: Option<String>,
    tax_scheme_id: Option<String>,
}

impl Default for TaxCategoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxCategoryBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            id_scheme: None,
            percent: None,
            exemption_reason_code: None,
            exemption_reason: None,
            tax_scheme_id: None,
        }
    }

    /// Copy all fields from the UBL tax category.
    pub fn init_from_ubl(mut self, source: &ubl::TaxCategory) -> Self {
        if let Some(id) = &source.id {
            self.id = Some(id.value.clone());
            self.id_scheme = id.scheme_id.clone();
        }
        if let Some(percent) = source.percent {
            self.percent = Some(percent);
        }
        if let Some(code) = &source.tax_exemption_reason_code {
            self.exemption_reason_code = Some(code.clone());
        }
        if let Some(reason) = source.tax_exemption_reasons.first() {
            self.exemption_reason = Some(reason.clone());
        }
        if let Some(id) = source.tax_scheme.as_ref().and_then(|s| s.id.as_ref()) {
            self.tax_scheme_id = Some(id.clone());
        }
        self
    }

    pub fn id(mut self, s: impl Into<String>) -> Self {
        self.id = Some(s.into());
        self
    }

    pub fn id_scheme(mut self, s: impl Into<String>) -> Self {
        self.id_scheme = Some(s.into());
        self
    }

    pub fn percent(mut self, percent: Decimal) -> Self {
        self.percent = Some(percent);
        self
    }

    pub fn exemption_reason_code(mut self, s: impl Into<String>) -> Self {
        self.exemption_reason_code = Some(s.into());
        self
    }

    pub fn exemption_reason(mut self, s: impl Into<String>) -> Self {
        self.exemption_reason = Some(s.into());
        self
    }

    pub fn tax_scheme_id(mut self, s: impl Into<String>) -> Self {
        self.tax_scheme_id = Some(s.into());
        self
    }
}

impl TddBuilder for TaxCategoryBuilder {
    type Output = TaxCategory;

    const CONTEXT: &'static str = "TaxCategory";

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.id.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "ID"));
        }
        // id_scheme, percent and the exemption reason fields are optional
        if self.tax_scheme_id.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "TaxSchemeID"));
        }
        errors
    }

    fn build(self) -> Option<TaxCategory> {
        if report_build_failure(&self.missing_fields(), Self::CONTEXT) {
            return None;
        }
        Some(TaxCategory {
            id: self.id?,
            scheme_id: self.id_scheme,
            percent: self.percent,
            exemption_reason_code: self.exemption_reason_code,
            exemption_reason: self.exemption_reason,
            tax_scheme_id: self.tax_scheme_id?,
        })
    }
}

/// Builder for one per-category tax breakdown entry. Constructed with the
/// currency code its amounts are tagged with.
pub struct TaxSubtotalBuilder {
    currency_code: String,
    taxable_amount: Option<Decimal>,
    tax_amount: Option<Decimal>,
    tax_category_id: Option<String>,
    tax_category_id_scheme: Option<String>,
    percent: Option<Decimal>,
    exemption_reason_code: Option<String>,
    exemption_reason: Option<String>,
    tax_scheme_id: Option<String>,
}

impl TaxSubtotalBuilder {
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            taxable_amount: None,
            tax_amount: None,
            tax_category_id: None,
            tax_category_id_scheme: None,
            percent: None,
            exemption_reason_code: None,
            exemption_reason: None,
            tax_scheme_id: None,
        }
    }

    /// Copy all fields from the UBL tax subtotal, flattening the nested tax
    /// category.
    pub fn init_from_ubl(mut self, source: &ubl::TaxSubtotal) -> Self {
        if let Some(amount) = &source.taxable_amount {
            self.taxable_amount = Some(amount.value);
        }
        if let Some(amount) = &source.tax_amount {
            self.tax_amount = Some(amount.value);
        }
        if let Some(category) = &source.tax_category {
            if let Some(id) = &category.id {
                self.tax_category_id = Some(id.value.clone());
                self.tax_category_id_scheme = id.scheme_id.clone();
            }
            if let Some(percent) = category.percent {
                self.percent = Some(percent);
            }
            if let Some(code) = &category.tax_exemption_reason_code {
                self.exemption_reason_code = Some(code.clone());
            }
            if let Some(reason) = category.tax_exemption_reasons.first() {
                self.exemption_reason = Some(reason.clone());
            }
            if let Some(id) = category.tax_scheme.as_ref().and_then(|s| s.id.as_ref()) {
                self.tax_scheme_id = Some(id.clone());
            }
        }
        self
    }

    pub fn taxable_amount(mut self, amount: Decimal) -> Self {
        self.taxable_amount = Some(amount);
        self
    }

    pub fn tax_amount(mut self, amount: Decimal) -> Self {
        self.tax_amount = Some(amount);
        self
    }

    pub fn tax_category_id(mut self, s: impl Into<String>) -> Self {
        self.tax_category_id = Some(s.into());
        self
    }

    pub fn tax_category_id_scheme(mut self, s: impl Into<String>) -> Self {
        self.tax_category_id_scheme = Some(s.into());
        self
    }

    pub fn percent(mut self, percent: Decimal) -> Self {
        self.percent = Some(percent);
        self
    }

    pub fn exemption_reason_code(mut self, s: impl Into<String>) -> Self {
        self.exemption_reason_code = Some(s.into());
        self
    }

    pub fn exemption_reason(mut self, s: impl Into<String>) -> Self {
        self.exemption_reason = Some(s.into());
        self
    }

    pub fn tax_scheme_id(mut self, s: impl Into<String>) -> Self {
        self.tax_scheme_id = Some(s.into());
        self
    }
}

impl TddBuilder for TaxSubtotalBuilder {
    type Output = TaxSubtotal;

    const CONTEXT: &'static str = "TaxSubtotal";

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.taxable_amount.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "TaxableAmount"));
        }
        if self.tax_amount.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "TaxAmount"));
        }
        if self.tax_category_id.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "TaxCategoryID"));
        }
        // tax_category_id_scheme, percent and exemption reasons are optional
        if self.tax_scheme_id.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "TaxSchemeID"));
        }
        errors
    }

    fn build(self) -> Option<TaxSubtotal> {
        if report_build_failure(&self.missing_fields(), Self::CONTEXT) {
            return None;
        }
        Some(TaxSubtotal {
            taxable_amount: Amount::new(self.taxable_amount?, self.currency_code.clone()),
            tax_amount: Amount::new(self.tax_amount?, self.currency_code.clone()),
            tax_category: TaxCategory {
                id: self.tax_category_id?,
                scheme_id: self.tax_category_id_scheme,
                percent: self.percent,
                exemption_reason_code: self.exemption_reason_code,
                exemption_reason: self.exemption_reason,
                tax_scheme_id: self.tax_scheme_id?,
            },
        })
    }
}

/// Builder for one tax total in a single currency.
pub struct TaxTotalBuilder {
    currency_code: String,
    tax_amount: Option<Decimal>,
    subtotals: Vec<TaxSubtotal>,
}

impl TaxTotalBuilder {
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            tax_amount: None,
            subtotals: Vec::new(),
        }
    }

    /// Copy the tax amount and all subtotals from the UBL tax total.
    /// Subtotals that fail their own mandatory-field check are dropped with
    /// a warning.
    pub fn init_from_ubl(mut self, source: &ubl::TaxTotal) -> Self {
        if let Some(amount) = &source.tax_amount {
            self.tax_amount = Some(amount.value);
        }
        for subtotal in &source.tax_subtotals {
            match TaxSubtotalBuilder::new(self.currency_code.as_str())
                .init_from_ubl(subtotal)
                .build()
            {
                Some(built) => self.subtotals.push(built),
                None => log::warn!("dropping invalid TaxSubtotal from source TaxTotal"),
            }
        }
        self
    }

    pub fn tax_amount(mut self, amount: Decimal) -> Self {
        self.tax_amount = Some(amount);
        self
    }

    pub fn add_subtotal(mut self, subtotal: TaxSubtotal) -> Self {
        self.subtotals.push(subtotal);
        self
    }

    /// Currency the amounts of this total are tagged with.
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }
}

impl TddBuilder for TaxTotalBuilder {
    type Output = TaxTotal;

    const CONTEXT: &'static str = "TaxTotal";

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.tax_amount.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "TaxAmount"));
        }
        // subtotals may be empty
        errors
    }

    fn build(self) -> Option<TaxTotal> {
        if report_build_failure(&self.missing_fields(), Self::CONTEXT) {
            return None;
        }
        Some(TaxTotal {
            tax_amount: Amount::new(self.tax_amount?, self.currency_code),
            subtotals: self.subtotals,
        })
    }
}
