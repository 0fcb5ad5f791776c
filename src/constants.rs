//! Application-wide constants.
//!
//! Field defaults shared by the adapters, the configuration layer, and the CLI.

/// The display name of the application.
pub const APP_NAME: &str = "fieldkit";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "fieldkit";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "FIELDKIT_CONFIG_DIR";

/// Default decimal separator for money fields.
pub const DEFAULT_DECIMAL_SEPARATOR: char = ',';

/// Default thousands separator for money fields.
pub const DEFAULT_THOUSAND_SEPARATOR: char = '.';

/// Default currency symbol shown in front of money fields.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Minor units per major unit (two fractional digits).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Group name used for color presets that declare no group.
pub const FALLBACK_PRESET_GROUP: &str = "Colors";

/// Default maximum number of files an upload field accepts.
pub const DEFAULT_MAX_FILES: usize = 1;

/// Default maximum rating value.
pub const DEFAULT_RATING_MAX: u8 = 5;
