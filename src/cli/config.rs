//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::models::ColorFormat;
use crate::services::upload::format_file_size;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Money decimal separator
    #[arg(long, value_name = "C")]
    decimal_separator: Option<String>,

    /// Money thousands separator
    #[arg(long, value_name = "C")]
    thousand_separator: Option<String>,

    /// Currency symbol
    #[arg(long, value_name = "SYMBOL")]
    currency_symbol: Option<String>,

    /// Whether a typed minus sign makes amounts negative
    #[arg(long, value_name = "BOOL")]
    allow_negative: Option<bool>,

    /// Color output format (hex, rgb, or hsl)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Whether colors are emitted with alpha
    #[arg(long, value_name = "BOOL")]
    show_alpha: Option<bool>,

    /// Accepted upload types (empty string removes the filter)
    #[arg(long, value_name = "LIST")]
    accept: Option<String>,

    /// Upload size cap in bytes (0 = unlimited)
    #[arg(long, value_name = "BYTES")]
    max_size: Option<u64>,

    /// Maximum number of uploaded files
    #[arg(long, value_name = "N")]
    max_files: Option<usize>,

    /// Whether upload fields hold a list
    #[arg(long, value_name = "BOOL")]
    multiple: Option<bool>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.decimal_separator.is_none()
            && self.thousand_separator.is_none()
            && self.currency_symbol.is_none()
            && self.allow_negative.is_none()
            && self.format.is_none()
            && self.show_alpha.is_none()
            && self.accept.is_none()
            && self.max_size.is_none()
            && self.max_files.is_none()
            && self.multiple.is_none()
    }

    /// Applies the given options to `config` and validates the result.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(value) = &self.decimal_separator {
            config.money.decimal_separator.clone_from(value);
        }
        if let Some(value) = &self.thousand_separator {
            config.money.thousand_separator.clone_from(value);
        }
        if let Some(value) = &self.currency_symbol {
            config.money.currency_symbol.clone_from(value);
        }
        if let Some(value) = self.allow_negative {
            config.money.allow_negative = value;
        }

        if let Some(raw) = &self.format {
            config.color.format = raw
                .parse::<ColorFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(value) = self.show_alpha {
            config.color.show_alpha = value;
        }

        if let Some(accept) = &self.accept {
            config.upload.accept = Some(accept.trim().to_string()).filter(|a| !a.is_empty());
        }
        if let Some(value) = self.max_size {
            config.upload.max_size = value;
        }
        if let Some(value) = self.max_files {
            config.upload.max_files = value;
        }
        if let Some(value) = self.multiple {
            config.upload.multiple = value;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(format!(
                "At least one configuration option must be specified (see `{APP_BINARY_NAME} config set --help`)"
            )));
        }

        let mut config = load_config()?;
        self.apply(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("fieldkit Configuration");
    println!("======================");
    println!();

    println!("Money:");
    println!("  Decimal Separator:  '{}'", config.money.decimal_separator);
    println!("  Thousand Separator: '{}'", config.money.thousand_separator);
    println!("  Currency Symbol:    {}", config.money.currency_symbol);
    println!("  Allow Negative:     {}", config.money.allow_negative);
    println!();

    println!("Color:");
    println!("  Format:     {}", config.color.format);
    println!("  Show Alpha: {}", config.color.show_alpha);
    match &config.color.presets {
        Some(presets) => println!("  Presets:    {} custom", presets.len()),
        None => println!("  Presets:    (built-in)"),
    }
    println!();

    println!("Upload:");
    println!(
        "  Accept:    {}",
        config.upload.accept.as_deref().unwrap_or("(any)")
    );
    if config.upload.max_size == 0 {
        println!("  Max Size:  (unlimited)");
    } else {
        println!("  Max Size:  {}", format_file_size(config.upload.max_size));
    }
    println!("  Max Files: {}", config.upload.max_files);
    println!("  Multiple:  {}", config.upload.multiple);
    println!();
}
