//! # tariff CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use tariff_cli::{commands, input};
use tariff_observability::LogFormat;
use tariff_pricing::PricingEngine;

/// Invoice pricing engine: quotes totals, validates invoices, dumps rate tables.
#[derive(Parser, Debug)]
#[command(name = "tariff", version, about)]
struct Cli {
    /// Log output format (logs go to stderr; filter with RUST_LOG).
    #[arg(long, value_enum, default_value_t = LogFormatArg::Plain, global = true)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Price an invoice.
    Quote(commands::QuoteArgs),
    /// Check an invoice for structural problems without pricing it.
    Validate(commands::ValidateArgs),
    /// Print the effective rate table.
    Rates(commands::RatesArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Plain,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Plain => LogFormat::Plain,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    tariff_observability::init_with(cli.log_format.into());

    let mut stdout = std::io::stdout().lock();

    let accepted = match cli.command {
        Commands::Quote(args) => {
            let engine = PricingEngine::new(input::load_rates(args.rates.as_ref())?);
            let invoice = input::load_invoice(&args.invoice)?;
            commands::quote(&engine, invoice.as_ref(), args.pretty, &mut stdout)?
        }
        Commands::Validate(args) => {
            let invoice = input::load_invoice(&args.invoice)?;
            commands::validate(&PricingEngine::default(), invoice.as_ref(), &mut stdout)?
        }
        Commands::Rates(args) => {
            let engine = PricingEngine::new(input::load_rates(args.rates.as_ref())?);
            commands::rates(&engine, &mut stdout)?;
            true
        }
    };

    Ok(ExitCode::from(commands::exit_status(accepted)))
}
