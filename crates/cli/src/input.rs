//! Reading invoices and rate tables from the outside world.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;

use tariff_invoicing::Invoice;
use tariff_pricing::RateTable;

/// Decode an invoice document. A literal `null` means no invoice was sent.
pub fn read_invoice(mut reader: impl Read) -> anyhow::Result<Option<Invoice>> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("failed to read invoice")?;
    serde_json::from_str(&raw).context("invoice is not valid JSON")
}

/// Read an invoice from `path`, or from stdin when the path is `-`.
pub fn load_invoice(path: &Path) -> anyhow::Result<Option<Invoice>> {
    if path == Path::new("-") {
        return read_invoice(std::io::stdin().lock());
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open invoice {}", path.display()))?;
    read_invoice(file)
}

/// Rate table from `path`, or the built-in defaults when none is configured.
pub fn load_rates(path: Option<&PathBuf>) -> anyhow::Result<RateTable> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading rates file");
            Ok(RateTable::from_path(path)?)
        }
        None => Ok(RateTable::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_document_means_no_invoice() {
        assert_eq!(read_invoice("null".as_bytes()).unwrap(), None);
    }

    #[test]
    fn decodes_invoice_document() {
        let invoice = read_invoice(
            r#"{ "invoice_id": "I-1", "customer_id": "C-1", "country": "JP", "items": [] }"#
                .as_bytes(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(invoice.country, "JP");
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = read_invoice("{ not json".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invoice is not valid JSON"));
    }

    #[test]
    fn missing_rates_path_falls_back_to_defaults() {
        assert_eq!(load_rates(None).unwrap(), RateTable::default());
    }

    #[test]
    fn unreadable_rates_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/rates.json");
        assert!(load_rates(Some(&path)).is_err());
    }
}
