//! Money formatting and parsing CLI commands.

use crate::adapters::{ControlledField, MoneyField};
use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::services::MoneyFormatter;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Money commands
#[derive(Args, Debug)]
pub struct MoneyArgs {
    #[command(subcommand)]
    command: MoneyCommand,
}

#[derive(Subcommand, Debug)]
enum MoneyCommand {
    /// Format an amount for display
    Format(MoneyFormatArgs),
    /// Read typed text as an amount in cents
    Parse(MoneyParseArgs),
}

/// Format an amount for display
#[derive(Args, Debug)]
pub struct MoneyFormatArgs {
    /// Amount in major units (e.g., 1234.5)
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    value: f64,

    /// Decimal separator (defaults to the configured one)
    #[arg(long, value_name = "C")]
    decimal_separator: Option<String>,

    /// Thousands separator (defaults to the configured one)
    #[arg(long, value_name = "C")]
    thousand_separator: Option<String>,

    /// Prefix the currency symbol
    #[arg(long)]
    symbol: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Read typed text as an amount in cents
#[derive(Args, Debug)]
pub struct MoneyParseArgs {
    /// Text as typed into the field (e.g., "R$ 1.234,56")
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    input: String,

    /// Keep a typed minus sign
    #[arg(long)]
    allow_negative: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct FormatOutput {
    value: f64,
    formatted: String,
    currency_symbol: String,
    decimal_separator: char,
    thousand_separator: char,
}

#[derive(Serialize, Debug)]
struct ParseOutput {
    input: String,
    value: f64,
    formatted: String,
}

impl MoneyArgs {
    /// Execute money subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            MoneyCommand::Format(args) => args.execute(),
            MoneyCommand::Parse(args) => args.execute(),
        }
    }
}

impl MoneyFormatArgs {
    /// Execute format command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let decimal = self
            .decimal_separator
            .as_deref()
            .unwrap_or(&config.money.decimal_separator);
        let thousand = self
            .thousand_separator
            .as_deref()
            .unwrap_or(&config.money.thousand_separator);
        let formatter = MoneyFormatter::from_config(decimal, thousand, &config.money.currency_symbol)
            .map_err(|e| CliError::validation(format!("Invalid separators: {e}")))?;

        let formatted = if self.symbol {
            formatter.format_with_symbol(Some(self.value))
        } else {
            formatter.format(Some(self.value))
        };

        if self.json {
            let separators = formatter.separators();
            print_json(&FormatOutput {
                value: self.value,
                formatted,
                currency_symbol: formatter.currency_symbol().to_string(),
                decimal_separator: separators.decimal(),
                thousand_separator: separators.thousand(),
            })?;
        } else {
            println!("{formatted}");
        }

        Ok(())
    }
}

impl MoneyParseArgs {
    /// Execute parse command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut field_config = config
            .money_field()
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        field_config.allow_negative |= self.allow_negative;
        let field = MoneyField::new(field_config);

        let mut amount = ControlledField::new("amount");
        let value = field.handle_input(&mut amount, &self.input);
        let formatted = field.display(Some(value));

        if self.json {
            print_json(&ParseOutput {
                input: self.input.clone(),
                value,
                formatted,
            })?;
        } else {
            println!("{value}");
        }

        Ok(())
    }
}
