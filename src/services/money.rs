//! Currency mask formatting and keystroke parsing.
//!
//! `format_money` renders an amount with configurable separators; `parse_money_input`
//! reads whatever the user typed as a count of cents, so digits shift into place
//! from the right as they are typed.

use crate::error::ConfigError;
use crate::models::{MoneyAmount, Separators};

/// Formats an amount as `<grouped integer><decimal separator><2 digits>`.
///
/// `None` renders as an empty string. The currency symbol is never part of the
/// output. Negative amounts get a leading `-`.
///
/// # Examples
///
/// ```
/// use fieldkit::models::Separators;
/// use fieldkit::services::money::format_money;
///
/// let seps = Separators::default();
/// assert_eq!(format_money(Some(0.0), &seps), "0,00");
/// assert_eq!(format_money(Some(100.5), &seps), "100,50");
/// assert_eq!(format_money(Some(10000.0), &seps), "10.000,00");
/// assert_eq!(format_money(None, &seps), "");
/// ```
#[must_use]
pub fn format_money(value: Option<f64>, separators: &Separators) -> String {
    value
        .map(|v| MoneyAmount::from_major(v).format(separators))
        .unwrap_or_default()
}

/// Reads keystrokes as cents: every non-digit is dropped, leading zeros are
/// stripped, and the remaining digits are divided by 100.
///
/// The result is never negative; input without digits is `0`. Digit strings
/// too long for the cent counter saturate, so the result is always finite.
///
/// # Examples
///
/// ```
/// use fieldkit::services::money::parse_money_input;
///
/// assert_eq!(parse_money_input("10.000,00"), 10000.0);
/// assert_eq!(parse_money_input("R$ 1,5"), 0.15);
/// assert_eq!(parse_money_input(""), 0.0);
/// ```
#[must_use]
pub fn parse_money_input(raw: &str) -> f64 {
    MoneyAmount::from_input(raw).to_major()
}

/// Money formatting bound to one separator configuration and currency symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormatter {
    separators: Separators,
    currency_symbol: String,
}

impl MoneyFormatter {
    /// Creates a formatter.
    pub fn new(separators: Separators, currency_symbol: impl Into<String>) -> Self {
        Self {
            separators,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Creates a formatter from raw configuration strings.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the separators are not usable.
    pub fn from_config(
        decimal_separator: &str,
        thousand_separator: &str,
        currency_symbol: &str,
    ) -> Result<Self, ConfigError> {
        let separators = Separators::parse(decimal_separator, thousand_separator)?;
        Ok(Self::new(separators, currency_symbol))
    }

    /// Separators in use.
    #[must_use]
    pub const fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Currency symbol shown in front of the field.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Formats without the currency symbol.
    #[must_use]
    pub fn format(&self, value: Option<f64>) -> String {
        format_money(value, &self.separators)
    }

    /// Formats with the currency symbol in front, separated by a space.
    ///
    /// An empty value stays empty.
    #[must_use]
    pub fn format_with_symbol(&self, value: Option<f64>) -> String {
        let text = self.format(value);
        if text.is_empty() || self.currency_symbol.is_empty() {
            text
        } else {
            format!("{} {}", self.currency_symbol, text)
        }
    }

    /// Parses keystrokes; see [`parse_money_input`].
    #[must_use]
    pub fn parse(&self, raw: &str) -> f64 {
        parse_money_input(raw)
    }
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::new(
            Separators::default(),
            crate::constants::DEFAULT_CURRENCY_SYMBOL,
        )
    }
}
