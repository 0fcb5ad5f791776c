//! Choice adapters: radio group, checkbox group, and button group.
//!
//! Form state stores primitive option values; widgets work with labels.

use tracing::debug;

use super::FieldController;
use crate::models::{FieldOption, OptionValue};

/// Label of the option holding `value`, or the value's own text when no
/// option matches.
#[must_use]
pub fn option_label(options: &[FieldOption], value: &OptionValue) -> String {
    options
        .iter()
        .find(|option| &option.value == value)
        .map_or_else(|| value.to_string(), |option| option.label.clone())
}

/// Whether `option` can be picked given the group-level disabled flag.
#[must_use]
pub const fn is_option_disabled(option: &FieldOption, group_disabled: bool) -> bool {
    group_disabled || option.disabled
}

/// Single choice stored as one primitive value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadioGroup {
    /// Offered options
    pub options: Vec<FieldOption>,
    /// Whether the whole group is disabled
    pub disabled: bool,
}

impl RadioGroup {
    /// Creates an enabled group.
    #[must_use]
    pub const fn new(options: Vec<FieldOption>) -> Self {
        Self {
            options,
            disabled: false,
        }
    }

    /// Label shown for the stored value.
    pub fn selected_label<C>(&self, controller: &C) -> Option<String>
    where
        C: FieldController<Value = OptionValue>,
    {
        controller.value().map(|v| option_label(&self.options, v))
    }

    /// Whether `option` is the stored value.
    pub fn is_selected<C>(&self, controller: &C, option: &FieldOption) -> bool
    where
        C: FieldController<Value = OptionValue>,
    {
        controller.value() == Some(&option.value)
    }

    /// Whether `option` can be picked.
    #[must_use]
    pub const fn is_option_disabled(&self, option: &FieldOption) -> bool {
        is_option_disabled(option, self.disabled)
    }

    /// Stores the option's value. Disabled options are ignored.
    ///
    /// Returns whether the value changed hands to the controller.
    pub fn select<C>(&self, controller: &mut C, option: &FieldOption) -> bool
    where
        C: FieldController<Value = OptionValue>,
    {
        if self.is_option_disabled(option) {
            return false;
        }
        controller.on_change(Some(option.value.clone()));
        true
    }
}

/// Multiple choice stored as an ordered list of primitive values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckboxGroup {
    /// Offered options
    pub options: Vec<FieldOption>,
    /// Whether the whole group is disabled
    pub disabled: bool,
}

impl CheckboxGroup {
    /// Creates an enabled group.
    #[must_use]
    pub const fn new(options: Vec<FieldOption>) -> Self {
        Self {
            options,
            disabled: false,
        }
    }

    /// Whether `value` is in the stored list.
    pub fn is_checked<C>(&self, controller: &C, value: &OptionValue) -> bool
    where
        C: FieldController<Value = Vec<OptionValue>>,
    {
        controller.value().is_some_and(|values| values.contains(value))
    }

    /// Toggles `option`: appends its value when absent, otherwise removes
    /// every equal entry.
    pub fn toggle<C>(&self, controller: &mut C, option: &FieldOption) -> Option<Vec<OptionValue>>
    where
        C: FieldController<Value = Vec<OptionValue>>,
    {
        if is_option_disabled(option, self.disabled) {
            return None;
        }
        let current = controller.value().cloned().unwrap_or_default();
        let next = toggle_value(current, &option.value);
        debug!(field = controller.name(), selected = next.len(), "checkbox toggled");
        controller.on_change(Some(next.clone()));
        Some(next)
    }
}

fn toggle_value(mut values: Vec<OptionValue>, value: &OptionValue) -> Vec<OptionValue> {
    if values.contains(value) {
        values.retain(|v| v != value);
    } else {
        values.push(value.clone());
    }
    values
}

/// Stored value of a button group.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonGroupValue {
    /// Exclusive mode: one value or nothing
    Single(Option<OptionValue>),
    /// Non-exclusive mode: any subset
    Many(Vec<OptionValue>),
}

/// Toggle-button group, exclusive (radio-like) or not (checkbox-like).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonGroup {
    /// Offered options
    pub options: Vec<FieldOption>,
    /// Whether at most one button can be active
    pub exclusive: bool,
    /// Whether the whole group is disabled
    pub disabled: bool,
}

impl ButtonGroup {
    /// Creates an enabled group.
    #[must_use]
    pub const fn new(options: Vec<FieldOption>, exclusive: bool) -> Self {
        Self {
            options,
            exclusive,
            disabled: false,
        }
    }

    /// Value for an untouched group.
    #[must_use]
    pub const fn empty_value(&self) -> ButtonGroupValue {
        if self.exclusive {
            ButtonGroupValue::Single(None)
        } else {
            ButtonGroupValue::Many(Vec::new())
        }
    }

    /// Whether `value` is active.
    pub fn is_selected<C>(&self, controller: &C, value: &OptionValue) -> bool
    where
        C: FieldController<Value = ButtonGroupValue>,
    {
        match controller.value() {
            Some(ButtonGroupValue::Single(Some(current))) => current == value,
            Some(ButtonGroupValue::Many(values)) => values.contains(value),
            _ => false,
        }
    }

    /// Handles a click on `option`.
    ///
    /// Exclusive: clicking the active button deselects it, any other button
    /// becomes the only active one. Non-exclusive: toggles membership.
    pub fn click<C>(&self, controller: &mut C, option: &FieldOption) -> Option<ButtonGroupValue>
    where
        C: FieldController<Value = ButtonGroupValue>,
    {
        if is_option_disabled(option, self.disabled) {
            return None;
        }
        let next = if self.exclusive {
            let active = matches!(
                controller.value(),
                Some(ButtonGroupValue::Single(Some(current))) if current == &option.value
            );
            ButtonGroupValue::Single((!active).then(|| option.value.clone()))
        } else {
            let current = match controller.value() {
                Some(ButtonGroupValue::Many(values)) => values.clone(),
                Some(ButtonGroupValue::Single(Some(value))) => vec![value.clone()],
                _ => Vec::new(),
            };
            ButtonGroupValue::Many(toggle_value(current, &option.value))
        };
        controller.on_change(Some(next.clone()));
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ControlledField;

    fn sizes() -> Vec<FieldOption> {
        vec![
            FieldOption::new("Small", "s"),
            FieldOption::new("Medium", "m"),
            FieldOption::new("Large", "l").disabled(),
        ]
    }

    #[test]
    fn test_option_label_lookup() {
        let options = sizes();
        assert_eq!(option_label(&options, &"m".into()), "Medium");
        assert_eq!(option_label(&options, &"xl".into()), "xl");
        assert_eq!(option_label(&options, &OptionValue::Number(3.0)), "3");
    }

    #[test]
    fn test_radio_select() {
        let group = RadioGroup::new(sizes());
        let mut size: ControlledField<OptionValue> = ControlledField::new("size");

        assert!(group.select(&mut size, &group.options[1]));
        assert_eq!(group.selected_label(&size).as_deref(), Some("Medium"));
        assert!(group.is_selected(&size, &group.options[1]));

        assert!(!group.select(&mut size, &group.options[2]));
        assert_eq!(size.value(), Some(&OptionValue::from("m")));
    }

    #[test]
    fn test_radio_group_disabled() {
        let group = RadioGroup {
            disabled: true,
            ..RadioGroup::new(sizes())
        };
        assert!(group.is_option_disabled(&group.options[0]));
    }

    #[test]
    fn test_checkbox_toggle_appends_and_removes() {
        let group = CheckboxGroup::new(sizes());
        let mut picked: ControlledField<Vec<OptionValue>> = ControlledField::new("sizes");

        group.toggle(&mut picked, &group.options[1]);
        group.toggle(&mut picked, &group.options[0]);
        assert_eq!(
            picked.value(),
            Some(&vec![OptionValue::from("m"), OptionValue::from("s")])
        );
        assert!(group.is_checked(&picked, &"s".into()));

        group.toggle(&mut picked, &group.options[1]);
        assert_eq!(picked.value(), Some(&vec![OptionValue::from("s")]));
    }

    #[test]
    fn test_checkbox_toggle_removes_duplicates() {
        let group = CheckboxGroup::new(sizes());
        let mut picked = ControlledField::with_default(
            "sizes",
            vec![OptionValue::from("s"), OptionValue::from("m"), OptionValue::from("s")],
        );
        group.toggle(&mut picked, &group.options[0]);
        assert_eq!(picked.value(), Some(&vec![OptionValue::from("m")]));
    }

    #[test]
    fn test_checkbox_disabled_option() {
        let group = CheckboxGroup::new(sizes());
        let mut picked: ControlledField<Vec<OptionValue>> = ControlledField::new("sizes");
        assert_eq!(group.toggle(&mut picked, &group.options[2]), None);
        assert_eq!(picked.value(), None);
    }

    #[test]
    fn test_exclusive_button_group() {
        let group = ButtonGroup::new(sizes(), true);
        let mut align: ControlledField<ButtonGroupValue> = ControlledField::new("align");

        let value = group.click(&mut align, &group.options[0]);
        assert_eq!(value, Some(ButtonGroupValue::Single(Some("s".into()))));
        assert!(group.is_selected(&align, &"s".into()));

        group.click(&mut align, &group.options[1]);
        assert!(group.is_selected(&align, &"m".into()));
        assert!(!group.is_selected(&align, &"s".into()));

        let value = group.click(&mut align, &group.options[1]);
        assert_eq!(value, Some(ButtonGroupValue::Single(None)));
    }

    #[test]
    fn test_non_exclusive_button_group() {
        let group = ButtonGroup::new(sizes(), false);
        let mut format = ControlledField::with_default("format", group.empty_value());

        group.click(&mut format, &group.options[0]);
        group.click(&mut format, &group.options[1]);
        assert_eq!(
            format.value(),
            Some(&ButtonGroupValue::Many(vec!["s".into(), "m".into()]))
        );

        group.click(&mut format, &group.options[0]);
        assert_eq!(format.value(), Some(&ButtonGroupValue::Many(vec!["m".into()])));
    }
}
