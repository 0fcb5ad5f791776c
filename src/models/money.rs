//! Monetary amounts in integer minor units and the separators used to display them.

// Float-to-integer casts here are saturating by definition and intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use std::fmt::Write as _;

use crate::constants::{
    DEFAULT_DECIMAL_SEPARATOR, DEFAULT_THOUSAND_SEPARATOR, MINOR_UNITS_PER_MAJOR,
};
use crate::error::ConfigError;

/// A pair of distinct, single-character, non-digit separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separators {
    decimal: char,
    thousand: char,
}

impl Separators {
    /// Creates a validated separator pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DigitSeparator`] if either character is an ASCII
    /// digit and [`ConfigError::SeparatorsEqual`] if both are the same.
    pub fn new(decimal: char, thousand: char) -> Result<Self, ConfigError> {
        if decimal.is_ascii_digit() {
            return Err(ConfigError::DigitSeparator {
                role: "decimal",
                value: decimal,
            });
        }
        if thousand.is_ascii_digit() {
            return Err(ConfigError::DigitSeparator {
                role: "thousand",
                value: thousand,
            });
        }
        if decimal == thousand {
            return Err(ConfigError::SeparatorsEqual(decimal));
        }
        Ok(Self { decimal, thousand })
    }

    /// Creates a separator pair from configuration strings.
    ///
    /// # Errors
    ///
    /// Fails when either string is empty or longer than one character, or for
    /// any reason [`Separators::new`] fails.
    pub fn parse(decimal: &str, thousand: &str) -> Result<Self, ConfigError> {
        let decimal = single_char("decimal", decimal)?;
        let thousand = single_char("thousand", thousand)?;
        Self::new(decimal, thousand)
    }

    /// Decimal separator.
    #[must_use]
    pub const fn decimal(&self) -> char {
        self.decimal
    }

    /// Thousands separator.
    #[must_use]
    pub const fn thousand(&self) -> char {
        self.thousand
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            decimal: DEFAULT_DECIMAL_SEPARATOR,
            thousand: DEFAULT_THOUSAND_SEPARATOR,
        }
    }
}

fn single_char(role: &'static str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(ConfigError::EmptySeparator { role }),
        (Some(c), None) => Ok(c),
        (Some(_), Some(_)) => Err(ConfigError::MultiCharSeparator {
            role,
            value: value.to_string(),
        }),
    }
}

/// A signed amount with exactly two fractional digits, stored as minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MoneyAmount(i64);

impl MoneyAmount {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Wraps a count of minor units.
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Rounds a major-unit value to cents, half away from zero.
    ///
    /// Non-finite input becomes zero; magnitudes beyond `i64` saturate.
    #[must_use]
    pub fn from_major(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        let cents = (value.abs() * MINOR_UNITS_PER_MAJOR as f64).round() as i64;
        if value.is_sign_negative() {
            Self(-cents)
        } else {
            Self(cents)
        }
    }

    /// Reads keystrokes as a count of cents.
    ///
    /// Every non-digit character is discarded, so the result is never negative.
    /// An input without digits is zero; overlong input saturates.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        let digits = input_digits(raw);
        if digits.is_empty() {
            return Self::ZERO;
        }
        Self(digits.parse::<i64>().unwrap_or(i64::MAX))
    }

    /// Count of minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Value in major units.
    #[must_use]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_MAJOR as f64
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Same magnitude with the opposite sign.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self(self.0.saturating_neg())
    }

    /// Renders the amount as `<grouped integer><decimal><2 digits>`.
    ///
    /// Negative amounts get a leading `-` before the grouped magnitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldkit::models::{MoneyAmount, Separators};
    ///
    /// let amount = MoneyAmount::from_minor(123_456_789);
    /// assert_eq!(amount.format(&Separators::default()), "1.234.567,89");
    /// ```
    #[must_use]
    pub fn format(&self, separators: &Separators) -> String {
        let magnitude = self.0.unsigned_abs();
        let per_major = MINOR_UNITS_PER_MAJOR.unsigned_abs();
        let integer = (magnitude / per_major).to_string();
        let cents = magnitude % per_major;

        let mut out = String::with_capacity(integer.len() + integer.len() / 3 + 4);
        if self.is_negative() {
            out.push('-');
        }
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push(separators.thousand());
            }
            out.push(digit);
        }
        out.push(separators.decimal());
        let _ = write!(out, "{cents:02}");
        out
    }
}

/// Keeps only ASCII digits and drops leading zeros.
#[must_use]
pub fn input_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .skip_while(|&c| c == '0')
        .collect()
}
