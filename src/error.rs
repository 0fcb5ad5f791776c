//! Typed configuration errors.
//!
//! The conversion engines never fail; these errors only surface when a
//! configuration (separators, color format, alpha) is constructed or loaded.

/// A field configuration value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A separator was given as an empty string.
    #[error("{role} separator must not be empty")]
    EmptySeparator {
        /// Which separator ("decimal" or "thousand")
        role: &'static str,
    },
    /// A separator was longer than a single character.
    #[error("{role} separator must be exactly one character, got '{value}'")]
    MultiCharSeparator {
        /// Which separator ("decimal" or "thousand")
        role: &'static str,
        /// The rejected value
        value: String,
    },
    /// A separator was an ASCII digit and would be read back as part of the amount.
    #[error("{role} separator must not be a digit, got '{value}'")]
    DigitSeparator {
        /// Which separator ("decimal" or "thousand")
        role: &'static str,
        /// The rejected character
        value: char,
    },
    /// Decimal and thousands separators were the same character.
    #[error("decimal and thousand separators must differ (both are '{0}')")]
    SeparatorsEqual(char),
    /// Unknown color output format.
    #[error("invalid color format '{0}'. Must be 'hex', 'rgb', or 'hsl'")]
    InvalidColorFormat(String),
    /// Alpha outside the closed interval [0, 1].
    #[error("alpha must be between 0 and 1, got {0}")]
    AlphaOutOfRange(String),
}
