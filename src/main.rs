//! fieldkit - headless access to form field value shaping
//!
//! Formats and parses currency input, converts hex colors, and checks files
//! against upload limits, using the persisted field configuration.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fieldkit::cli::{ColorArgs, ConfigArgs, MoneyArgs, UploadArgs};

/// fieldkit - form field value shaping from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format and parse currency amounts
    Money(MoneyArgs),
    /// Convert and validate hex colors
    Color(ColorArgs),
    /// Check files against upload limits
    Upload(UploadArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Money(args) => args.execute(),
        Command::Color(args) => args.execute(),
        Command::Upload(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
}
