//! fieldkit library
//!
//! Value shaping for form fields: currency masks with configurable
//! separators, hex color conversion to hex/rgb/hsl text, upload validation,
//! and the adapters that sit between an external form-state manager and the
//! widgets it drives.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
