use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{report_build_failure, TddBuilder};
use crate::core::{
    Amount, AllowanceCharge, BillingReference, CardAccount, CommodityClassification, PayeeAccount,
    PaymentMeans, TaxCategory, ValidationError,
};
use crate::ubl;

use super::tax::TaxCategoryBuilder;

/// Builder for one reference to a preceding billing document.
pub struct BillingReferenceBuilder {
    id: Option<String>,
    id_scheme: Option<String>,
    issue_date: Option<NaiveDate>,
}

impl Default for BillingReferenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BillingReferenceBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            id_scheme: None,
            issue_date: None,
        }
    }

    /// Copy all fields from the UBL billing reference. Absent source fields
    /// are skipped, never defaulted.
    pub fn init_from_ubl(mut self, source: &ubl::BillingReference) -> Self {
        if let Some(doc_ref) = &source.invoice_document_reference {
            if let Some(id) = &doc_ref.id {
                self.id = Some(id.value.clone());
                self.id_scheme = id.scheme_id.clone();
            }
            if let Some(date) = doc_ref.issue_date {
                self.issue_date = Some(date);
            }
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

    pub fn issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }
}

impl TddBuilder for BillingReferenceBuilder {
    type Output = BillingReference;

    const CONTEXT: &'static str = "BillingReference";

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.id.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "ID"));
        }
        // id_scheme and issue_date are optional
        errors
    }

    fn build(self) -> Option<BillingReference> {
        if report_build_failure(&self.missing_fields(), Self::CONTEXT) {
            return None;
        }
        Some(BillingReference {
            id: self.id?,
            scheme_id: self.id_scheme,
            issue_date: self.issue_date,
        })
    }
}

/// Builder for one commodity classification entry.
pub struct CommodityClassificationBuilder {
    code: Option<String>,
    list_id: Option<String>,
    list_version_id: Option<String>,
}

impl Default for CommodityClassificationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommodityClassificationBuilder {
    pub fn new() -> Self {
        Self {
            code: None,
            list_id: None,
            list_version_id: None,
        }
    }

    /// Copy all fields from the UBL commodity classification.
    pub fn init_from_ubl(mut self, source: &ubl::CommodityClassification) -> Self {
        if let Some(code) = &source.item_classification_code {
            self.code = Some(code.value.clone());
            self.list_id = code.list_id.clone();
            self.list_version_id = code.list_version_id.clone();
        }
        self
    }

    pub fn code(mut self, s: impl Into<String>) -> Self {
        self.code = Some(s.into());
        self
    }

    pub fn list_id(mut self, s: impl Into<String>) -> Self {
        self.list_id = Some(s.into());
        self
    }

    pub fn list_version_id(mut self, s: impl Into<String>) -> Self {
        self.list_version_id = Some(s.into());
        self
    }
}

impl TddBuilder for CommodityClassificationBuilder {
    type Output = CommodityClassification;

    const CONTEXT: &'static str = "CommodityClassification";

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.code.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "ItemClassificationCode"));
        }
        if self.list_id.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "ListID"));
        }
        // list_version_id is optional
        errors
    }

    fn build(self) -> Option<CommodityClassification> {
        if report_build_failure(&self.missing_fields(), Self::CONTEXT) {
            return None;
        }
        Some(CommodityClassification {
            code: self.code?,
            list_id: self.list_id?,
            list_version_id: self.list_version_id,
        })
    }
}

/// Builder for one payment means entry.
pub struct PaymentMeansBuilder {
    code: Option<String>,
    code_name: Option<String>,
    payment_id: Option<String>,
    card_primary_account_number: Option<String>,
    card_network_id: Option<String>,
    card_holder_name: Option<String>,
    payee_account_id: Option<String>,
    payee_account_id_scheme: Option<String>,
    payee_branch_id: Option<String>,
    payee_branch_id_scheme: Option<String>,
}

impl Default for PaymentMeansBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentMeansBuilder {
    pub fn new() -> Self {
        Self {
            code: None,
            code_name: None,
            payment_id: None,
            card_primary_account_number: None,
            card_network_id: None,
            card_holder_name: None,
            payee_account_id: None,
            payee_account_id_scheme: None,
            payee_branch_id: None,
            payee_branch_id_scheme: None,
        }
    }

    /// Copy all fields from the UBL payment means entry.
    pub fn init_from_ubl(mut self, source: &ubl::PaymentMeans) -> Self {
        if let Some(code) = &source.payment_means_code {
            self.code = code.value.clone();
            self.code_name = code.name.clone();
        }
        if let Some(payment_id) = source.payment_ids.first() {
            self.payment_id = Some(payment_id.clone());
        }
        if let Some(card) = &source.card_account {
            self.card_primary_account_number = card.primary_account_number_id.clone();
            self.card_network_id = card.network_id.clone();
            self.card_holder_name = card.holder_name.clone();
        }
        if let Some(account) = &source.payee_financial_account {
            if let Some(id) = &account.id {
                self.payee_account_id = Some(id.value.clone());
                self.payee_account_id_scheme = id.scheme_id.clone();
            }
            if let Some(id) = account
                .financial_institution_branch
                .as_ref()
                .and_then(|b| b.id.as_ref())
            {
                self.payee_branch_id = Some(id.value.clone());
                self.payee_branch_id_scheme = id.scheme_id.clone();
            }
        }
        self
    }

    pub fn code(mut self, s: impl Into<String>) -> Self {
        self.code = Some(s.into());
        self
    }

    pub fn code_name(mut self, s: impl Into<String>) -> Self {
        self.code_name = Some(s.into());
        self
    }

    pub fn payment_id(mut self, s: impl Into<String>) -> Self {
        self.payment_id = Some(s.into());
        self
    }

    pub fn card_primary_account_number(mut self, s: impl Into<String>) -> Self {
        self.card_primary_account_number = Some(s.into());
        self
    }

    pub fn card_network_id(mut self, s: impl Into<String>) -> Self {
        self.card_network_id = Some(s.into());
        self
    }

    pub fn card_holder_name(mut self, s: impl Into<String>) -> Self {
        self.card_holder_name = Some(s.into());
        self
    }

    pub fn payee_account_id(mut self, s: impl Into<String>) -> Self {
        self.payee_account_id = Some(s.into());
        self
    }

    pub fn payee_account_id_scheme(mut self, s: impl Into<String>) -> Self {
        self.payee_account_id_scheme = Some(s.into());
        self
    }

    pub fn payee_branch_id(mut self, s: impl Into<String>) -> Self {
        self.payee_branch_id = Some(s.into());
        self
    }

    pub fn payee_branch_id_scheme(mut self, s: impl Into<String>) -> Self {
        self.payee_branch_id_scheme = Some(s.into());
        self
    }
}

impl TddBuilder for PaymentMeansBuilder {
    type Output = PaymentMeans;

    const CONTEXT: &'static str = "PaymentMeans";

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.code.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "PaymentMeansCode"));
        }
        // everything else is optional
        errors
    }

    fn build(self) -> Option<PaymentMeans> {
        if report_build_failure(&self.missing_fields(), Self::CONTEXT) {
            return None;
        }
        // Card details only materialize with an account number, the payee
        // account only with an account ID; dangling attributes are dropped.
        let card = self
            .card_primary_account_number
            .map(|primary_account_number| CardAccount {
                primary_account_number,
                network_id: self.card_network_id,
                holder_name: self.card_holder_name,
            });
        let payee_account = self.payee_account_id.map(|id| PayeeAccount {
            id,
            scheme_id: self.payee_account_id_scheme,
            branch_id: self.payee_branch_id,
            branch_scheme_id: self.payee_branch_id_scheme,
        });
        Some(PaymentMeans {
            code: self.code?,
            code_name: self.code_name,
            payment_id: self.payment_id,
            card,
            payee_account,
        })
    }
}

/// Builder for one allowance or charge, at document or line level.
///
/// Constructed with the currency code of the owning document so its
/// amounts can be tagged; the owner supplies it.
pub struct AllowanceChargeBuilder {
    currency_code: String,
    charge: bool,
    reason_code: Option<String>,
    reason: Option<String>,
    multiplier_factor: Option<Decimal>,
    amount: Option<Decimal>,
    base_amount: Option<Decimal>,
    tax_category: Option<TaxCategory>,
}

impl AllowanceChargeBuilder {
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            charge: false,
            reason_code: None,
            reason: None,
            multiplier_factor: None,
            amount: None,
            base_amount: None,
            tax_category: None,
        }
    }

    /// Copy all fields from the UBL allowance/charge. An invalid nested tax
    /// category is dropped with a warning.
    pub fn init_from_ubl(mut self, source: &ubl::AllowanceCharge) -> Self {
        if let Some(indicator) = source.charge_indicator {
            self.charge = indicator;
        }
        if let Some(code) = &source.allowance_charge_reason_code {
            self.reason_code = Some(code.clone());
        }
        if let Some(reason) = source.allowance_charge_reasons.first() {
            self.reason = Some(reason.clone());
        }
        if let Some(factor) = source.multiplier_factor_numeric {
            self.multiplier_factor = Some(factor);
        }
        if let Some(amount) = &source.amount {
            self.amount = Some(amount.value);
        }
        if let Some(base) = &source.base_amount {
            self.base_amount = Some(base.value);
        }
        if let Some(category) = source.tax_categories.first() {
            match TaxCategoryBuilder::new().init_from_ubl(category).build() {
                Some(built) => self.tax_category = Some(built),
                None => log::warn!("dropping invalid TaxCategory from source AllowanceCharge"),
            }
        }
        self
    }

    pub fn charge(mut self, charge: bool) -> Self {
        self.charge = charge;
        self
    }

    pub fn reason_code(mut self, s: impl Into<String>) -> Self {
        self.reason_code = Some(s.into());
        self
    }

    pub fn reason(mut self, s: impl Into<String>) -> Self {
        self.reason = Some(s.into());
        self
    }

    pub fn multiplier_factor(mut self, factor: Decimal) -> Self {
        self.multiplier_factor = Some(factor);
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn base_amount(mut self, amount: Decimal) -> Self {
        self.base_amount = Some(amount);
        self
    }

    pub fn tax_category(mut self, category: TaxCategory) -> Self {
        self.tax_category = Some(category);
        self
    }
}

impl TddBuilder for AllowanceChargeBuilder {
    type Output = AllowanceCharge;

    const CONTEXT: &'static str = "AllowanceCharge";

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        // reason_code, reason, multiplier_factor, base_amount and
        // tax_category are optional
        if self.amount.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "Amount"));
        }
        errors
    }

    fn build(self) -> Option<AllowanceCharge> {
        if report_build_failure(&self.missing_fields(), Self::CONTEXT) {
            return None;
        }
        Some(AllowanceCharge {
            charge: self.charge,
            reason_code: self.reason_code,
            reason: self.reason,
            multiplier_factor: self.multiplier_factor,
            amount: Amount::new(self.amount?, self.currency_code.clone()),
            base_amount: self
                .base_amount
                .map(|value| Amount::new(value, self.currency_code.clone())),
            tax_category: self.tax_category,
        })
    }
}
