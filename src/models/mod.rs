//! Data models for field values, colors, and options.
//!
//! This module contains the plain data structures shared by the conversion
//! services and the field adapters. Models are independent of any widget toolkit.

pub mod color;
pub mod color_preset;
pub mod money;
pub mod option;
pub mod rgb;

// Re-export all model types
pub use color::{ColorFormat, ColorValue};
pub use color_preset::{ColorPreset, PresetCatalog, PresetGroup};
pub use money::{MoneyAmount, Separators};
pub use option::{FieldOption, OptionValue};
pub use rgb::{Hsl, RgbColor};
