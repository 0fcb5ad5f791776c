//! Autocomplete with optional free text ("free solo").
//!
//! The widget reports picks as whole options or as typed strings; form state
//! stores only primitive values.

use tracing::debug;

use super::choice::option_label;
use super::FieldController;
use crate::models::{FieldOption, OptionValue};

/// One entry reported by the widget in multi mode.
#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteItem {
    /// An option from the list
    Option(FieldOption),
    /// Text typed by the user that matches no option
    Typed(String),
}

impl AutocompleteItem {
    /// Value stored in form state for this entry.
    #[must_use]
    pub fn into_value(self) -> OptionValue {
        match self {
            Self::Option(option) => option.value,
            Self::Typed(text) => OptionValue::Text(text),
        }
    }
}

/// Change reported by the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteChange {
    /// Single mode: an option was picked
    Selected(FieldOption),
    /// Single mode: free text was committed
    Typed(String),
    /// Single mode: the value was cleared
    Cleared,
    /// Multi mode: the full list of entries
    Many(Vec<AutocompleteItem>),
}

/// Value stored in form state.
#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteValue {
    /// Single mode
    Single(OptionValue),
    /// Multi mode
    Many(Vec<OptionValue>),
}

impl AutocompleteChange {
    /// Reduces the change to what form state stores.
    ///
    /// Options become their value, typed text passes through, a cleared
    /// single value becomes `None`.
    #[must_use]
    pub fn normalize(self) -> Option<AutocompleteValue> {
        match self {
            Self::Selected(option) => Some(AutocompleteValue::Single(option.value)),
            Self::Typed(text) => Some(AutocompleteValue::Single(OptionValue::Text(text))),
            Self::Cleared => None,
            Self::Many(items) => Some(AutocompleteValue::Many(
                items.into_iter().map(AutocompleteItem::into_value).collect(),
            )),
        }
    }
}

/// Autocomplete adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Autocomplete {
    /// Offered options
    pub options: Vec<FieldOption>,
    /// Whether several entries can be picked
    pub multiple: bool,
    /// Whether text outside the options is accepted
    pub free_solo: bool,
}

impl Autocomplete {
    /// Creates a single-value autocomplete without free text.
    #[must_use]
    pub const fn new(options: Vec<FieldOption>) -> Self {
        Self {
            options,
            multiple: false,
            free_solo: false,
        }
    }

    /// Text for an option or stored value.
    #[must_use]
    pub fn option_label(&self, value: &OptionValue) -> String {
        option_label(&self.options, value)
    }

    /// Whether an offered option corresponds to a stored value.
    #[must_use]
    pub fn is_option_equal(option: &FieldOption, value: &OptionValue) -> bool {
        &option.value == value
    }

    /// Options matching the stored value, in stored order. Free-typed values
    /// appear as typed entries.
    pub fn selected_items<C>(&self, controller: &C) -> Vec<AutocompleteItem>
    where
        C: FieldController<Value = AutocompleteValue>,
    {
        let values: Vec<&OptionValue> = match controller.value() {
            Some(AutocompleteValue::Single(value)) => vec![value],
            Some(AutocompleteValue::Many(values)) => values.iter().collect(),
            None => Vec::new(),
        };
        values
            .into_iter()
            .map(|value| {
                self.options
                    .iter()
                    .find(|option| Self::is_option_equal(option, value))
                    .map_or_else(
                        || AutocompleteItem::Typed(value.to_string()),
                        |option| AutocompleteItem::Option(option.clone()),
                    )
            })
            .collect()
    }

    /// Normalizes the widget's change and hands it to the controller.
    ///
    /// Typed text is dropped unless free text is enabled.
    pub fn handle_change<C>(&self, controller: &mut C, change: AutocompleteChange) -> Option<AutocompleteValue>
    where
        C: FieldController<Value = AutocompleteValue>,
    {
        let change = if self.free_solo {
            change
        } else {
            match change {
                AutocompleteChange::Typed(_) => return None,
                AutocompleteChange::Many(items) => AutocompleteChange::Many(
                    items
                        .into_iter()
                        .filter(|item| matches!(item, AutocompleteItem::Option(_)))
                        .collect(),
                ),
                other => other,
            }
        };
        let value = change.normalize();
        debug!(field = controller.name(), cleared = value.is_none(), "autocomplete changed");
        controller.on_change(value.clone());
        value
    }
}
