//! Color preset catalog for the color field's quick-pick swatches.
//!
//! Presets are read-only data: either the embedded Material catalog or a
//! list supplied through configuration.

use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_PRESET_GROUP;

/// A single named swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPreset {
    /// Display name (e.g., "Red").
    pub label: String,
    /// Hex color code (e.g., "#f44336").
    pub value: String,
    /// Optional group heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl ColorPreset {
    /// Creates a preset.
    pub fn new(label: impl Into<String>, value: impl Into<String>, group: Option<&str>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            group: group.map(str::to_string),
        }
    }

    /// Group this preset is listed under.
    #[must_use]
    pub fn group_name(&self) -> &str {
        self.group.as_deref().unwrap_or(FALLBACK_PRESET_GROUP)
    }
}

/// Presets sharing one group heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetGroup<'a> {
    /// Group heading
    pub name: &'a str,
    /// Presets in catalog order
    pub presets: Vec<&'a ColorPreset>,
}

/// An ordered list of presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetCatalog {
    /// Presets in display order.
    pub presets: Vec<ColorPreset>,
}

impl PresetCatalog {
    /// Wraps a configured list of presets.
    #[must_use]
    pub fn new(presets: Vec<ColorPreset>) -> Self {
        Self { presets }
    }

    /// Load the default catalog from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        let json_data = include_str!("../data/color_presets.json");
        let catalog: Self = serde_json::from_str(json_data)?;
        Ok(catalog)
    }

    /// Groups presets by heading, keeping the order in which groups first appear.
    #[must_use]
    pub fn grouped(&self) -> Vec<PresetGroup<'_>> {
        let mut groups: Vec<PresetGroup<'_>> = Vec::new();
        for preset in &self.presets {
            let name = preset.group_name();
            match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group.presets.push(preset),
                None => groups.push(PresetGroup {
                    name,
                    presets: vec![preset],
                }),
            }
        }
        groups
    }

    /// Looks up a preset by its label (case-insensitive).
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&ColorPreset> {
        self.presets
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(label))
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the catalog has no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self {
            presets: Vec::new(),
        })
    }
}
