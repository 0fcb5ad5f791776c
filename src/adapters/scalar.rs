//! Rating, slider, and checkbox/switch adapters.

use serde::{Deserialize, Serialize};

use super::FieldController;
use crate::constants::DEFAULT_RATING_MAX;

/// Star rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingField {
    /// Number of stars
    pub max: u8,
    /// Smallest step (1 = whole stars, 0.5 = half stars)
    pub precision: f64,
}

impl Default for RatingField {
    fn default() -> Self {
        Self {
            max: DEFAULT_RATING_MAX,
            precision: 1.0,
        }
    }
}

impl RatingField {
    /// Value shown by the widget; an empty field shows zero stars.
    pub fn display_value<C>(&self, controller: &C) -> f64
    where
        C: FieldController<Value = f64>,
    {
        controller.value().copied().unwrap_or(0.0)
    }

    /// Snaps a picked rating to the precision and range, then stores it.
    /// `None` clears the rating.
    pub fn handle_change<C>(&self, controller: &mut C, value: Option<f64>) -> Option<f64>
    where
        C: FieldController<Value = f64>,
    {
        let snapped = value.filter(|v| v.is_finite()).map(|v| self.snap(v));
        controller.on_change(snapped);
        snapped
    }

    fn snap(&self, value: f64) -> f64 {
        let stepped = if self.precision > 0.0 {
            (value / self.precision).round() * self.precision
        } else {
            value
        };
        stepped.clamp(0.0, f64::from(self.max))
    }
}

/// Slider value: one thumb or a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliderValue {
    /// Single thumb
    Single(f64),
    /// Range with two thumbs, low first
    Range(f64, f64),
}

/// Slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderField {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Step between positions
    pub step: f64,
    /// Value shown while the field is empty
    pub default_value: Option<SliderValue>,
}

impl Default for SliderField {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            default_value: None,
        }
    }
}

impl SliderField {
    /// Value shown by the widget: stored value, else default, else `min`.
    pub fn display_value<C>(&self, controller: &C) -> SliderValue
    where
        C: FieldController<Value = SliderValue>,
    {
        controller
            .value()
            .copied()
            .or(self.default_value)
            .unwrap_or(SliderValue::Single(self.min))
    }

    /// Stores a moved thumb, snapped to the step and clamped to the bounds.
    /// Range thumbs are kept in ascending order.
    pub fn handle_change<C>(&self, controller: &mut C, value: SliderValue) -> SliderValue
    where
        C: FieldController<Value = SliderValue>,
    {
        let next = match value {
            SliderValue::Single(v) => SliderValue::Single(self.snap(v)),
            SliderValue::Range(a, b) => {
                let (a, b) = (self.snap(a), self.snap(b));
                SliderValue::Range(a.min(b), a.max(b))
            }
        };
        controller.on_change(Some(next));
        next
    }

    fn snap(&self, value: f64) -> f64 {
        let stepped = if self.step > 0.0 {
            self.min + ((value - self.min) / self.step).round() * self.step
        } else {
            value
        };
        stepped.clamp(self.min, self.max)
    }
}

/// Checkbox or switch storing the checked state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleField;

impl ToggleField {
    /// Whether the widget shows as checked; an empty field is unchecked.
    pub fn is_checked<C>(&self, controller: &C) -> bool
    where
        C: FieldController<Value = bool>,
    {
        controller.value().copied().unwrap_or(false)
    }

    /// Stores the checked state.
    pub fn handle_change<C>(&self, controller: &mut C, checked: bool)
    where
        C: FieldController<Value = bool>,
    {
        controller.on_change(Some(checked));
    }
}
