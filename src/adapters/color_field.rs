//! Color field: hex text input plus a preset picker.
//!
//! The canonical value is a hex string. What the field emits to form state is
//! that hex converted to the configured format, with alpha when enabled.
//! Rendering is left to the host; this type only holds the picker state and
//! decides what to display and what to emit.

use tracing::debug;

use super::FieldController;
use crate::models::{ColorFormat, PresetCatalog, PresetGroup};
use crate::services::color::{convert_color, is_valid_hex_color};

/// Color field configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorFieldConfig {
    /// Format of the emitted value
    pub format: ColorFormat,
    /// Whether the opacity control is shown and alpha is emitted
    pub show_alpha: bool,
    /// Quick-pick swatches
    pub presets: PresetCatalog,
    /// Whether the field ignores interaction
    pub disabled: bool,
}

impl Default for ColorFieldConfig {
    fn default() -> Self {
        Self {
            format: ColorFormat::Hex,
            show_alpha: false,
            presets: PresetCatalog::default(),
            disabled: false,
        }
    }
}

/// Events emitted to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorFieldEvent {
    /// A new value was pushed to form state
    Changed(String),
}

/// Color field state.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorField {
    config: ColorFieldConfig,
    /// Text typed into the input
    input: String,
    input_focused: bool,
    picker_open: bool,
    alpha: f64,
}

impl ColorField {
    /// Creates a closed, unfocused field with full opacity.
    #[must_use]
    pub const fn new(config: ColorFieldConfig) -> Self {
        Self {
            config,
            input: String::new(),
            input_focused: false,
            picker_open: false,
            alpha: 1.0,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ColorFieldConfig {
        &self.config
    }

    /// Text currently typed into the input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the input has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.input_focused
    }

    /// Whether the picker popover is open.
    #[must_use]
    pub const fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    /// Current opacity in [0, 1].
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    fn emitted_alpha(&self) -> Option<f64> {
        self.config.show_alpha.then_some(self.alpha)
    }

    fn convert(&self, hex: &str) -> String {
        convert_color(hex, self.config.format, self.emitted_alpha())
    }

    fn push<C>(&self, controller: &mut C, hex: &str) -> ColorFieldEvent
    where
        C: FieldController<Value = String>,
    {
        let converted = self.convert(hex);
        debug!(field = controller.name(), %converted, "color changed");
        controller.on_change(Some(converted.clone()));
        ColorFieldEvent::Changed(converted)
    }

    /// Text shown in the input.
    ///
    /// While focused with something typed, the typed text wins; otherwise the
    /// current value is shown converted.
    #[must_use]
    pub fn display_value(&self, current: &str) -> String {
        if self.input_focused && !self.input.is_empty() {
            self.input.clone()
        } else {
            self.convert(current)
        }
    }

    /// Takes typed text. Valid hex (or empty text) is pushed immediately.
    pub fn handle_input<C>(&mut self, controller: &mut C, text: &str) -> Option<ColorFieldEvent>
    where
        C: FieldController<Value = String>,
    {
        if self.config.disabled {
            return None;
        }
        self.input = text.to_string();
        if text.is_empty() || is_valid_hex_color(text) {
            Some(self.push(controller, text))
        } else {
            None
        }
    }

    /// Focuses the input, seeding it with the current value.
    pub fn focus(&mut self, current: &str) {
        self.input_focused = true;
        self.input = current.to_string();
    }

    /// Blurs the input; an invalid buffer reverts to the current value.
    pub fn blur(&mut self, current: &str) {
        self.input_focused = false;
        if !self.input.is_empty() && !is_valid_hex_color(&self.input) {
            self.input = current.to_string();
        }
    }

    /// Opens the picker, seeding the input with the current value.
    pub fn open_picker(&mut self, current: &str) {
        if self.config.disabled {
            return;
        }
        self.picker_open = true;
        self.input = current.to_string();
    }

    /// Closes the picker and clears the typed text.
    pub fn close_picker(&mut self) {
        self.picker_open = false;
        self.input.clear();
    }

    /// Picks a swatch: pushes it and closes the picker.
    pub fn select_preset<C>(&mut self, controller: &mut C, hex: &str) -> Option<ColorFieldEvent>
    where
        C: FieldController<Value = String>,
    {
        if self.config.disabled {
            return None;
        }
        let event = self.push(controller, hex);
        self.close_picker();
        Some(event)
    }

    /// Applies the typed text if it is a valid hex color.
    pub fn submit_input<C>(&mut self, controller: &mut C) -> Option<ColorFieldEvent>
    where
        C: FieldController<Value = String>,
    {
        if !is_valid_hex_color(&self.input) {
            return None;
        }
        let hex = self.input.clone();
        self.select_preset(controller, &hex)
    }

    /// Clears the value.
    pub fn clear<C>(&mut self, controller: &mut C) -> Option<ColorFieldEvent>
    where
        C: FieldController<Value = String>,
    {
        if self.config.disabled {
            return None;
        }
        self.input.clear();
        controller.on_change(Some(String::new()));
        Some(ColorFieldEvent::Changed(String::new()))
    }

    /// Sets the opacity, clamped to [0, 1]. NaN is ignored.
    pub fn set_alpha(&mut self, alpha: f64) {
        if !alpha.is_nan() {
            self.alpha = alpha.clamp(0.0, 1.0);
        }
    }

    /// Opacity control label, e.g. `Opacity: 50%`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn opacity_label(&self) -> String {
        format!("Opacity: {}%", (self.alpha * 100.0).round() as i64)
    }

    /// Swatches grouped for display.
    #[must_use]
    pub fn preset_groups(&self) -> Vec<PresetGroup<'_>> {
        self.config.presets.grouped()
    }
}

impl Default for ColorField {
    fn default() -> Self {
        Self::new(ColorFieldConfig::default())
    }
}
