//! Subcommand handlers.
//!
//! Handlers write their JSON document to `out` and report whether the input
//! was accepted; [`exit_status`] maps that to the process exit code.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use tariff_core::Problem;
use tariff_invoicing::Invoice;
use tariff_pricing::PricingEngine;

/// Exit code for an invoice that failed validation.
pub const EXIT_REJECTED: u8 = 2;

/// Process exit code for a handler outcome.
pub fn exit_status(accepted: bool) -> u8 {
    if accepted { 0 } else { EXIT_REJECTED }
}

/// Arguments for the quote subcommand.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Invoice JSON file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub invoice: PathBuf,

    /// Rates JSON file overriding the built-in tables.
    #[arg(long, env = "TARIFF_RATES")]
    pub rates: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Invoice JSON file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub invoice: PathBuf,
}

/// Arguments for the rates subcommand.
#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Rates JSON file to merge over the built-in tables.
    #[arg(long, env = "TARIFF_RATES")]
    pub rates: Option<PathBuf>,
}

#[derive(Serialize)]
struct Rejection<'a> {
    error: String,
    problems: &'a [Problem],
}

/// Price `invoice` and write the result, or the rejection, as JSON.
pub fn quote(
    engine: &PricingEngine,
    invoice: Option<&Invoice>,
    pretty: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let accepted = match engine.compute(invoice) {
        Ok(result) => {
            tracing::info!(total = result.total, warnings = result.warnings.len(), "quote computed");
            write_json(out, &result, pretty)?;
            true
        }
        Err(err) => {
            let rejection = Rejection {
                error: err.to_string(),
                problems: err.problems(),
            };
            write_json(out, &rejection, pretty)?;
            false
        }
    };
    Ok(accepted)
}

/// Write the structural problems of `invoice` as a JSON array.
pub fn validate(
    engine: &PricingEngine,
    invoice: Option<&Invoice>,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let problems = engine.validate(invoice);
    write_json(out, &problems, false)?;
    Ok(problems.is_empty())
}

/// Dump the rate table the engine prices with.
pub fn rates(engine: &PricingEngine, out: &mut impl Write) -> anyhow::Result<()> {
    write_json(out, engine.rates(), true)
}

fn write_json(out: &mut impl Write, value: &impl Serialize, pretty: bool) -> anyhow::Result<()> {
    let encoded = if pretty {
        serde_json::to_writer_pretty(&mut *out, value)
    } else {
        serde_json::to_writer(&mut *out, value)
    };
    encoded.context("failed to encode output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}
