//! Service layer for value conversion and validation.
//!
//! These services are pure: they take values in, hand values back, and keep
//! no state between calls.

pub mod color;
pub mod money;
pub mod upload;

// Re-export commonly used types and functions
pub use color::{convert_color, is_valid_hex_color, validate_alpha};
pub use money::{format_money, parse_money_input, MoneyFormatter};
pub use upload::{AcceptList, CustomVerdict, FileCandidate, FileRejection, UploadPolicy, UploadValue};
