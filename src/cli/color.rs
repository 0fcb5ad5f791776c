//! Color conversion CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::models::{ColorFormat, ColorValue};
use crate::services::color::{expand_short_hex, is_valid_hex_color, validate_alpha};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Color commands
#[derive(Args, Debug)]
pub struct ColorArgs {
    #[command(subcommand)]
    command: ColorCommand,
}

#[derive(Subcommand, Debug)]
enum ColorCommand {
    /// Convert a hex color to hex, rgb, or hsl text
    Convert(ColorConvertArgs),
    /// Check whether text is a #RRGGBB or #RGB color
    Validate(ColorValidateArgs),
    /// List the preset swatches
    Presets(ColorPresetsArgs),
}

/// Convert a hex color to hex, rgb, or hsl text
#[derive(Args, Debug)]
pub struct ColorConvertArgs {
    /// Hex color (e.g., "#ff0000" or "#f00")
    #[arg(value_name = "HEX", allow_hyphen_values = true)]
    hex: String,

    /// Output format: hex, rgb, or hsl (defaults to the configured one)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Opacity between 0 and 1
    #[arg(long, value_name = "A", allow_hyphen_values = true)]
    alpha: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Check whether text is a #RRGGBB or #RGB color
#[derive(Args, Debug)]
pub struct ColorValidateArgs {
    /// Text to check
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    text: String,
}

/// List the preset swatches
#[derive(Args, Debug)]
pub struct ColorPresetsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ConvertOutput {
    input: String,
    format: ColorFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    alpha: Option<f64>,
    value: String,
}

impl ColorArgs {
    /// Execute color subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ColorCommand::Convert(args) => args.execute(),
            ColorCommand::Validate(args) => args.execute(),
            ColorCommand::Presets(args) => args.execute(),
        }
    }
}

impl ColorConvertArgs {
    /// Execute convert command
    pub fn execute(&self) -> CliResult<()> {
        if !is_valid_hex_color(&self.hex) {
            return Err(CliError::validation(format!(
                "Invalid hex color '{}'. Expected #RRGGBB or #RGB",
                self.hex
            )));
        }

        let config = load_config()?;

        let format = match &self.format {
            Some(raw) => raw
                .parse::<ColorFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.color.format,
        };

        let alpha = match self.alpha {
            Some(a) => Some(validate_alpha(a).map_err(|e| CliError::validation(e.to_string()))?),
            None => config.color.show_alpha.then_some(1.0),
        };

        let mut color = ColorValue::new(self.hex.clone()).with_format(format);
        if let Some(a) = alpha {
            color = color.with_alpha(a);
        }
        let value = color.render();

        if self.json {
            print_json(&ConvertOutput {
                input: self.hex.clone(),
                format,
                alpha,
                value,
            })?;
        } else {
            println!("{value}");
        }

        Ok(())
    }
}

impl ColorValidateArgs {
    /// Execute validate command
    pub fn execute(&self) -> CliResult<()> {
        if !is_valid_hex_color(&self.text) {
            return Err(CliError::validation(format!(
                "'{}' is not a valid hex color",
                self.text
            )));
        }

        println!("✓ {} is a valid hex color ({})", self.text, expand_short_hex(&self.text));
        Ok(())
    }
}

impl ColorPresetsArgs {
    /// Execute presets command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let catalog = config.preset_catalog();
        let groups = catalog.grouped();

        if self.json {
            return print_json(&groups);
        }

        if groups.is_empty() {
            println!("No presets defined.");
            return Ok(());
        }

        for group in &groups {
            println!("{} ({}):", group.name, group.presets.len());
            for preset in &group.presets {
                println!("  {:<16} {}", preset.label, preset.value);
            }
        }

        Ok(())
    }
}
