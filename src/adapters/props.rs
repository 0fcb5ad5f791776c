//! Shared field properties and helper/error text precedence.
//!
//! Callers configure a field with [`FieldProps`] and may layer a
//! [`FieldPropsOverride`] on top: every override that is set wins. The error
//! state is not a prop; it always comes from the controller.

use serde::{Deserialize, Serialize};

use super::FieldError;

/// Text shown under a field: the error message when there is one, otherwise
/// the helper text, otherwise nothing.
///
/// An error without a message does not hide the helper text.
#[must_use]
pub fn helper_text<'a>(error: Option<&'a FieldError>, helper: Option<&'a str>) -> Option<&'a str> {
    error
        .and_then(|e| e.message.as_deref())
        .filter(|m| !m.is_empty())
        .or(helper)
}

/// Whether a field is in the error state.
#[must_use]
pub const fn has_error(error: Option<&FieldError>) -> bool {
    error.is_some()
}

/// Visual variant of the input chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVariant {
    /// Outlined box
    #[default]
    Outlined,
    /// Filled background
    Filled,
    /// Underline only
    Standard,
}

/// Size of the input chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSize {
    /// Compact
    Small,
    /// Regular
    #[default]
    Medium,
    /// Large
    Large,
}

/// Properties common to every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldProps {
    /// Label above the field
    pub label: Option<String>,
    /// Helper text shown when there is no error
    pub helper_text: Option<String>,
    /// Placeholder shown while empty
    pub placeholder: Option<String>,
    /// Whether input is disabled
    pub disabled: bool,
    /// Whether the field fills its container
    pub full_width: bool,
    /// Chrome variant
    pub variant: FieldVariant,
    /// Chrome size
    pub size: FieldSize,
}

impl Default for FieldProps {
    fn default() -> Self {
        Self {
            label: None,
            helper_text: None,
            placeholder: None,
            disabled: false,
            full_width: true,
            variant: FieldVariant::Outlined,
            size: FieldSize::Medium,
        }
    }
}

/// Caller-supplied overrides; unset fields keep the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldPropsOverride {
    /// Label override
    pub label: Option<String>,
    /// Helper text override
    pub helper_text: Option<String>,
    /// Placeholder override
    pub placeholder: Option<String>,
    /// Disabled override
    pub disabled: Option<bool>,
    /// Full width override
    pub full_width: Option<bool>,
    /// Variant override
    pub variant: Option<FieldVariant>,
    /// Size override
    pub size: Option<FieldSize>,
}

/// Resolved presentation state of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    /// Label
    pub label: Option<String>,
    /// Text under the field after precedence
    pub helper_text: Option<String>,
    /// Placeholder
    pub placeholder: Option<String>,
    /// Error state from the controller
    pub error: bool,
    /// Disabled
    pub disabled: bool,
    /// Full width
    pub full_width: bool,
    /// Variant
    pub variant: FieldVariant,
    /// Size
    pub size: FieldSize,
}

impl FieldProps {
    /// Props with a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Applies caller overrides; each override that is set wins.
    pub fn merged(&self, overrides: &FieldPropsOverride) -> Self {
        Self {
            label: overrides.label.clone().or_else(|| self.label.clone()),
            helper_text: overrides
                .helper_text
                .clone()
                .or_else(|| self.helper_text.clone()),
            placeholder: overrides
                .placeholder
                .clone()
                .or_else(|| self.placeholder.clone()),
            disabled: overrides.disabled.unwrap_or(self.disabled),
            full_width: overrides.full_width.unwrap_or(self.full_width),
            variant: overrides.variant.unwrap_or(self.variant),
            size: overrides.size.unwrap_or(self.size),
        }
    }

    /// Resolves presentation against the controller's error.
    #[must_use]
    pub fn resolve(&self, error: Option<&FieldError>) -> FieldView {
        FieldView {
            label: self.label.clone(),
            helper_text: helper_text(error, self.helper_text.as_deref()).map(str::to_string),
            placeholder: self.placeholder.clone(),
            error: has_error(error),
            disabled: self.disabled,
            full_width: self.full_width,
            variant: self.variant,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_text_precedence() {
        let error = FieldError::new("required", "Required field");
        assert_eq!(helper_text(Some(&error), Some("Enter a value")), Some("Required field"));
        assert_eq!(helper_text(None, Some("Enter a value")), Some("Enter a value"));
        assert_eq!(helper_text(None, None), None);
    }

    #[test]
    fn test_helper_text_error_without_message_keeps_helper() {
        let silent = FieldError::silent("validate");
        assert_eq!(helper_text(Some(&silent), Some("hint")), Some("hint"));
        assert!(has_error(Some(&silent)));

        let empty = FieldError::new("validate", "");
        assert_eq!(helper_text(Some(&empty), Some("hint")), Some("hint"));
        assert_eq!(helper_text(Some(&empty), None), None);
    }

    #[test]
    fn test_merged_caller_wins() {
        let base = FieldProps {
            helper_text: Some("base".to_string()),
            ..FieldProps::labeled("Amount")
        };
        let overrides = FieldPropsOverride {
            label: Some("Price".to_string()),
            full_width: Some(false),
            variant: Some(FieldVariant::Filled),
            ..FieldPropsOverride::default()
        };
        let merged = base.merged(&overrides);
        assert_eq!(merged.label.as_deref(), Some("Price"));
        assert_eq!(merged.helper_text.as_deref(), Some("base"));
        assert!(!merged.full_width);
        assert_eq!(merged.variant, FieldVariant::Filled);
        assert_eq!(merged.size, FieldSize::Medium);
    }

    #[test]
    fn test_resolve_view() {
        let props = FieldProps {
            helper_text: Some("In BRL".to_string()),
            ..FieldProps::labeled("Amount")
        };
        let view = props.resolve(None);
        assert!(!view.error);
        assert_eq!(view.helper_text.as_deref(), Some("In BRL"));

        let error = FieldError::new("min", "Minimum value: 10");
        let view = props.resolve(Some(&error));
        assert!(view.error);
        assert_eq!(view.helper_text.as_deref(), Some("Minimum value: 10"));
    }

    #[test]
    fn test_props_from_partial_toml() {
        let props: FieldProps = toml::from_str("label = \"Name\"\nsize = \"small\"").unwrap();
        assert_eq!(props.label.as_deref(), Some("Name"));
        assert_eq!(props.size, FieldSize::Small);
        assert!(props.full_width);
    }
}
