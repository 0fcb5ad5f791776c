//! Currency input field: masked keystrokes in, a number out.

use tracing::debug;

use super::{helper_text, FieldController};
use crate::constants::DEFAULT_CURRENCY_SYMBOL;
use crate::models::{MoneyAmount, Separators};
use crate::services::money::format_money;

/// Money field configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFieldConfig {
    /// Decimal and thousands separators
    pub separators: Separators,
    /// Symbol shown as an adornment in front of the text
    pub currency_symbol: String,
    /// Whether a leading `-` makes the amount negative
    pub allow_negative: bool,
}

impl Default for MoneyFieldConfig {
    fn default() -> Self {
        Self {
            separators: Separators::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            allow_negative: false,
        }
    }
}

/// Money field adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoneyField {
    config: MoneyFieldConfig,
}

impl MoneyField {
    /// Creates an adapter.
    #[must_use]
    pub const fn new(config: MoneyFieldConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &MoneyFieldConfig {
        &self.config
    }

    /// Text shown in the input for a stored value.
    #[must_use]
    pub fn display(&self, value: Option<f64>) -> String {
        format_money(value, &self.config.separators)
    }

    /// Currency adornment; never part of the numeric text.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Text shown in the input for the controller's current value.
    pub fn display_for<C>(&self, controller: &C) -> String
    where
        C: FieldController<Value = f64>,
    {
        self.display(controller.value().copied())
    }

    /// Text under the field for the controller's current error.
    pub fn helper_for<'a, C>(&self, controller: &'a C, helper: Option<&'a str>) -> Option<&'a str>
    where
        C: FieldController<Value = f64>,
    {
        helper_text(controller.error(), helper)
    }

    /// Whether the text starts with `-`, ignoring whitespace and the currency
    /// symbol in front of it.
    fn has_leading_minus(&self, raw: &str) -> bool {
        let text = raw.trim_start();
        let text = text
            .strip_prefix(self.config.currency_symbol.as_str())
            .unwrap_or(text);
        text.trim_start().starts_with('-')
    }

    /// Parses what the user typed and hands the amount to the controller.
    ///
    /// Returns the amount that was stored.
    pub fn handle_input<C>(&self, controller: &mut C, raw: &str) -> f64
    where
        C: FieldController<Value = f64>,
    {
        let magnitude = MoneyAmount::from_input(raw);
        let cents = if self.config.allow_negative && self.has_leading_minus(raw) {
            magnitude.negate()
        } else {
            magnitude
        };
        let amount = cents.to_major();
        debug!(field = controller.name(), raw, amount, "money input");
        controller.on_change(Some(amount));
        amount
    }
}
