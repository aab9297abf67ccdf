use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::parts::AllowanceChargeBuilder;
use super::tax::TaxCategoryBuilder;
use super::{report_build_failure, CommodityClassificationBuilder, TddBuilder};
use crate::core::{
    AllowanceCharge, Amount, CommodityClassification, DocumentLine, InvoicePeriod, Item,
    TaxCategory, ValidationError,
};
use crate::ubl::{self, SourceLine};

/// Builder for the item sold on a document line.
pub struct ItemBuilder {
    description: Option<String>,
    name: Option<String>,
    commodity_classifications: Vec<CommodityClassification>,
    classified_tax_category: Option<TaxCategory>,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self {
            description: None,
            name: None,
            commodity_classifications: Vec::new(),
            classified_tax_category: None,
        }
    }

    /// Copy all fields from the UBL item. Invalid commodity classifications
    /// and an invalid classified tax category are dropped with a warning.
    pub fn init_from_ubl(mut self, source: &ubl::Item) -> Self {
        if let Some(description) = source.descriptions.first() {
            self.description = Some(description.clone());
        }
        if let Some(name) = &source.name {
            self.name = Some(name.clone());
        }
        for classification in &source.commodity_classifications {
            match CommodityClassificationBuilder::new()
                .init_from_ubl(classification)
                .build()
            {
                Some(built) => self.commodity_classifications.push(built),
                None => log::warn!("dropping invalid CommodityClassification from source Item"),
            }
        }
        if let Some(category) = source.classified_tax_categories.first() {
            match TaxCategoryBuilder::new().init_from_ubl(category).build() {
                Some(built) => self.classified_tax_category = Some(built),
                None => log::warn!("dropping invalid ClassifiedTaxCategory from source Item"),
            }
        }
        self
    }

    pub fn description(mut self, s: impl Into<String>) -> Self {
        self.description = Some(s.into());
        self
    }

    pub fn name(mut self, s: impl Into<String>) -> Self {
        self.name = Some(s.into());
        self
    }

    pub fn add_commodity_classification(mut self, classification: CommodityClassification) -> Self {
        self.commodity_classifications.push(classification);
        self
    }

    pub fn classified_tax_category(mut self, category: TaxCategory) -> Self {
        self.classified_tax_category = Some(category);
        self
    }
}

impl TddBuilder for ItemBuilder {
    type Output = Item;

    const CONTEXT: &'static str = "Item";

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        // description is optional, commodity classifications may be empty
        if self.name.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "Name"));
        }
        if self.classified_tax_category.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "ClassifiedTaxCategory"));
        }
        errors
    }

    fn build(self) -> Option<Item> {
        if report_build_failure(&self.missing_fields(), Self::CONTEXT) {
            return None;
        }
        Some(Item {
            description: self.description,
            name: self.name?,
            commodity_classifications: self.commodity_classifications,
            classified_tax_category: self.classified_tax_category?,
        })
    }
}

/// Builder for one normalized document line. Constructed with the document
/// currency its amounts are tagged with.
pub struct DocumentLineBuilder {
    currency_code: String,
    id: Option<String>,
    note: Option<String>,
    quantity: Option<Decimal>,
    quantity_unit: Option<String>,
    line_extension_amount: Option<Decimal>,
    invoice_period_start: Option<NaiveDate>,
    invoice_period_end: Option<NaiveDate>,
    invoice_period_description_code: Option<String>,
    allowance_charges: Vec<AllowanceCharge>,
    item: Option<Item>,
    price_amount: Option<Decimal>,
}

impl DocumentLineBuilder {
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            id: None,
            note: None,
            quantity: None,
            quantity_unit: None,
            line_extension_amount: None,
            invoice_period_start: None,
            invoice_period_end: None,
            invoice_period_description_code: None,
            allowance_charges: Vec::new(),
            item: None,
            price_amount: None,
        }
    }

    /// Copy all fields from a UBL 2.1 invoice line.
    pub fn init_from_invoice(self, line: &ubl::InvoiceLine) -> Self {
        self.init_from_line(line)
    }

    /// Copy all fields from a UBL 2.1 credit note line.
    pub fn init_from_credit_note(self, line: &ubl::CreditNoteLine) -> Self {
        self.init_from_line(line)
    }

    /// The shared extraction both line shapes resolve to. Invalid
    /// allowance/charges and an invalid item are dropped with a warning.
    pub(crate) fn init_from_line<L: SourceLine>(mut self, line: &L) -> Self {
        if let Some(id) = line.id() {
            self.id = Some(id.to_owned());
        }
        if let Some(note) = line.first_note() {
            self.note = Some(note.to_owned());
        }
        if let Some(quantity) = line.quantity() {
            self.quantity = Some(quantity.value);
            if let Some(unit) = &quantity.unit_code {
                self.quantity_unit = Some(unit.clone());
            }
        }
        if let Some(amount) = line.line_extension_amount() {
            self.line_extension_amount = Some(amount.value);
        }
        if let Some(period) = line.first_invoice_period() {
            self.invoice_period_start = period.start_date;
            self.invoice_period_end = period.end_date;
            if let Some(code) = period.description_codes.first() {
                self.invoice_period_description_code = Some(code.clone());
            }
        }
        for allowance_charge in line.allowance_charges() {
            match AllowanceChargeBuilder::new(self.currency_code.as_str())
                .init_from_ubl(allowance_charge)
                .build()
            {
                Some(built) => self.allowance_charges.push(built),
                None => log::warn!("dropping invalid AllowanceCharge from source line"),
            }
        }
        if let Some(item) = line.item() {
            match ItemBuilder::new().init_from_ubl(item).build() {
                Some(built) => self.item = Some(built),
                None => log::warn!("dropping invalid Item from source line"),
            }
        }
        if let Some(amount) = line.price_amount() {
            self.price_amount = Some(amount.value);
        }
        self
    }

    pub fn id(mut self, s: impl Into<String>) -> Self {
        self.id = Some(s.into());
        self
    }

    pub fn note(mut self, s: impl Into<String>) -> Self {
        self.note = Some(s.into());
        self
    }

    pub fn quantity(mut self, quantity: Decimal, unit: impl Into<String>) -> Self {
        self.quantity = Some(quantity);
        self.quantity_unit = Some(unit.into());
        self
    }

    pub fn line_extension_amount(mut self, amount: Decimal) -> Self {
        self.line_extension_amount = Some(amount);
        self
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

    pub fn add_allowance_charge(mut self, allowance_charge: AllowanceCharge) -> Self {
        self.allowance_charges.push(allowance_charge);
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    pub fn price_amount(mut self, amount: Decimal) -> Self {
        self.price_amount = Some(amount);
        self
    }

    /// Currency the amounts of this line are tagged with.
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }
}

impl TddBuilder for DocumentLineBuilder {
    type Output = DocumentLine;

    const CONTEXT: &'static str = "DocumentLine";

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.id.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "ID"));
        }
        // note is optional
        if self.quantity.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "Quantity"));
        }
        if self.quantity_unit.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "QuantityUnit"));
        }
        if self.line_extension_amount.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "LineExtensionAmount"));
        }
        // invoice period is optional, allowance charges may be empty
        if self.item.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "Item"));
        }
        if self.price_amount.is_none() {
            errors.push(ValidationError::missing(Self::CONTEXT, "PriceAmount"));
        }
        errors
    }

    fn build(self) -> Option<DocumentLine> {
        if report_build_failure(&self.missing_fields(), Self::CONTEXT) {
            return None;
        }
        let invoice_period = InvoicePeriod {
            start_date: self.invoice_period_start,
            end_date: self.invoice_period_end,
            description_code: self.invoice_period_description_code,
        };
        Some(DocumentLine {
            id: self.id?,
            note: self.note,
            quantity: self.quantity?,
            quantity_unit: self.quantity_unit?,
            line_extension_amount: Amount::new(
                self.line_extension_amount?,
                self.currency_code.clone(),
            ),
            invoice_period: (!invoice_period.is_empty()).then_some(invoice_period),
            allowance_charges: self.allowance_charges,
            item: self.item?,
            price_amount: Amount::new(self.price_amount?, self.currency_code),
        })
    }
}
