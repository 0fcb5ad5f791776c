//! Field adapters: value shaping between form state and widget values.
//!
//! The form-state manager is reached through [`FieldController`], which
//! exposes the stored value, a change sink, and the current validation error.
//! Each adapter translates between that stored value and what its widget
//! shows or emits. [`ControlledField`] is an in-memory controller for hosts
//! without their own form state, and for tests.

pub mod autocomplete;
pub mod choice;
pub mod color_field;
pub mod money_field;
pub mod props;
pub mod scalar;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use autocomplete::{Autocomplete, AutocompleteChange, AutocompleteItem, AutocompleteValue};
pub use choice::{option_label, ButtonGroup, ButtonGroupValue, CheckboxGroup, RadioGroup};
pub use color_field::{ColorField, ColorFieldConfig, ColorFieldEvent};
pub use money_field::{MoneyField, MoneyFieldConfig};
pub use props::{has_error, helper_text, FieldProps, FieldPropsOverride, FieldSize, FieldVariant, FieldView};
pub use scalar::{RatingField, SliderField, SliderValue, ToggleField};

/// Validation error reported by form state for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Error kind (e.g., "required", "pattern")
    pub kind: String,
    /// Message to show, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldError {
    /// Creates an error with a message.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: Some(message.into()),
        }
    }

    /// Creates an error without a message.
    pub fn silent(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: None,
        }
    }
}

/// The form-state side of a field.
pub trait FieldController {
    /// Value type stored in form state
    type Value;

    /// Field name used for registration and validation.
    fn name(&self) -> &str;

    /// Current stored value (`None` = empty field).
    fn value(&self) -> Option<&Self::Value>;

    /// Receives a new value from the widget.
    fn on_change(&mut self, value: Option<Self::Value>);

    /// Current validation error.
    fn error(&self) -> Option<&FieldError>;
}

/// In-memory field state.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlledField<V> {
    name: String,
    value: Option<V>,
    default_value: Option<V>,
    error: Option<FieldError>,
    changes: usize,
}

impl<V: Clone> ControlledField<V> {
    /// Creates an empty field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            default_value: None,
            error: None,
            changes: 0,
        }
    }

    /// Creates a field holding a default value.
    pub fn with_default(name: impl Into<String>, default_value: V) -> Self {
        Self {
            name: name.into(),
            value: Some(default_value.clone()),
            default_value: Some(default_value),
            error: None,
            changes: 0,
        }
    }

    /// Sets the validation error.
    pub fn set_error(&mut self, error: FieldError) {
        self.error = Some(error);
    }

    /// Clears the validation error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Restores the default value and clears errors.
    pub fn reset(&mut self) {
        self.value.clone_from(&self.default_value);
        self.error = None;
        self.changes = 0;
    }

    /// Default value the field was created with.
    pub fn default_value(&self) -> Option<&V> {
        self.default_value.as_ref()
    }

    /// Whether the value differs from its default.
    pub fn is_dirty(&self) -> bool
    where
        V: PartialEq,
    {
        self.value != self.default_value
    }

    /// Number of changes received since creation or the last reset.
    pub const fn change_count(&self) -> usize {
        self.changes
    }
}

impl<V> FieldController for ControlledField<V> {
    type Value = V;

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    fn on_change(&mut self, value: Option<V>) {
        trace!(field = %self.name, empty = value.is_none(), "field changed");
        self.value = value;
        self.changes += 1;
    }

    fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }
}
