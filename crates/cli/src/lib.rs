//! `tariff` command-line host for the pricing engine.
//!
//! Reads invoices as JSON, prices them with a rate table (built-in or loaded
//! from a rates file) and writes machine-readable JSON to stdout.

pub mod commands;
pub mod input;
