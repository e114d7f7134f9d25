//! # Commands
//!
//! Each command builds an [`OrderRequest`], prices it through
//! `orderly-core`, and writes the outcome to the given writer.
//!
//! ```text
//! demo ─────► sample_request() ──┐
//!                                ├──► price_order ──► render ──► stdout
//! receipt ──► read_items(file) ──┘
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use orderly_core::{
    compute_order, compute_order_unchecked, parse_items, LineItem, Money, OrderResult, TAX_RATE,
};
use tracing::{debug, info, warn};

use crate::cli::Command;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

pub const SAMPLE_CUSTOMER: &str = "Jane Doe";
pub const SAMPLE_ADDRESS: &str = "123 Main St";

/// Everything needed to price one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub items: Vec<LineItem>,
    pub customer_name: String,
    pub address: String,
}

/// The sample order: Widget $25.00 x2, Gadget $15.50 x3.
pub fn sample_items() -> Vec<LineItem> {
    vec![
        LineItem::new("Widget", Money::from_cents(2500), 2),
        LineItem::new("Gadget", Money::from_cents(1550), 3),
    ]
}

pub fn sample_request() -> OrderRequest {
    OrderRequest {
        items: sample_items(),
        customer_name: SAMPLE_CUSTOMER.to_string(),
        address: SAMPLE_ADDRESS.to_string(),
    }
}

/// Reads and parses an items document; `-` reads stdin.
pub fn read_items(path: &Path) -> Result<Vec<LineItem>, CliError> {
    let source = path.display().to_string();

    let json = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::io("<stdin>", e))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| CliError::io(source.as_str(), e))?
    };

    let items = parse_items(&json)?;
    debug!(source = %source, count = items.len(), "Items loaded");
    Ok(items)
}

/// Turns a parsed command into an order request.
pub fn build_request(command: &Command) -> Result<OrderRequest, CliError> {
    match command {
        Command::Demo => Ok(sample_request()),
        Command::Receipt {
            items,
            customer,
            address,
        } => Ok(OrderRequest {
            items: read_items(items)?,
            customer_name: customer.clone(),
            address: address.clone(),
        }),
    }
}

/// Prices the request, validating unless the config disables it.
pub fn price_order(request: &OrderRequest, validate: bool) -> Result<OrderResult, CliError> {
    let result = if validate {
        compute_order(&request.items, &request.customer_name, &request.address)?
    } else {
        warn!("Input validation disabled; negative prices and quantities are priced as-is");
        compute_order_unchecked(&request.items, &request.customer_name, &request.address)?
    };

    debug!(
        subtotal = %result.subtotal.canonical(),
        discount = %result.discount.canonical(),
        tax_rate = %TAX_RATE,
        tax = %result.tax.canonical(),
        total = %result.total.canonical(),
        "Order priced"
    );
    Ok(result)
}

/// Writes the result in the requested format.
pub fn render<W: Write>(out: &mut W, result: &OrderResult, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => out
            .write_all(result.receipt.as_bytes())
            .map_err(|e| CliError::io("<stdout>", e))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out).map_err(|e| CliError::io("<stdout>", e))?;
        }
    }

    out.flush().map_err(|e| CliError::io("<stdout>", e))
}

/// Runs one command end to end.
pub fn execute<W: Write>(command: &Command, config: &CliConfig, out: &mut W) -> Result<(), CliError> {
    let request = build_request(command)?;
    info!(
        customer = %request.customer_name,
        items = request.items.len(),
        "Pricing order"
    );

    let result = price_order(&request, config.validate)?;
    render(out, &result, config.output)?;

    info!(total = %result.total, "Order complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    const SAMPLE_RECEIPT: &str = "=== ORDER RECEIPT ===\n\
        Customer: Jane Doe\n\
        Address: 123 Main St\n\
        ---\n\
        Widget x2 - $50.00\n\
        Gadget x3 - $46.50\n\
        ---\n\
        Subtotal: $96.50\n\
        Discount: -$4.83\n\
        Tax: $7.33\n\
        Total: $99.01\n";

    fn items_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn receipt_command(path: PathBuf) -> Command {
        Command::Receipt {
            items: path,
            customer: SAMPLE_CUSTOMER.to_string(),
            address: SAMPLE_ADDRESS.to_string(),
        }
    }

    fn run(command: &Command, config: &CliConfig) -> Result<String, CliError> {
        let mut out = Vec::new();
        execute(command, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_demo_prints_sample_receipt() {
        let output = run(&Command::Demo, &CliConfig::default()).unwrap();
        assert_eq!(output, SAMPLE_RECEIPT);
    }

    #[test]
    fn test_receipt_from_file_matches_demo() {
        let file = items_file(
            r#"[{ "name": "Widget", "price": 25.00, "quantity": 2 },
                { "name": "Gadget", "price": 15.50, "quantity": 3 }]"#,
        );

        let output = run(&receipt_command(file.path().to_path_buf()), &CliConfig::default()).unwrap();
        assert_eq!(output, SAMPLE_RECEIPT);
    }

    #[test]
    fn test_json_output_has_exact_amounts() {
        let config = CliConfig {
            output: OutputFormat::Json,
            ..CliConfig::default()
        };

        let output = run(&Command::Demo, &config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["subtotal"], "96.50");
        assert_eq!(json["discount"], "4.825");
        assert_eq!(json["tax"], "7.334");
        assert_eq!(json["total"], "99.009");
        assert_eq!(json["receipt"], SAMPLE_RECEIPT);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let file = items_file(r#"[{ "name": "Widget", "price": 25.00, "quantity": -2 }]"#);

        let err = run(&receipt_command(file.path().to_path_buf()), &CliConfig::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_negative_quantity_priced_without_validation() {
        let file = items_file(
            r#"[{ "name": "Widget", "price": 25.00, "quantity": 2 },
                { "name": "Return", "price": 10.00, "quantity": -1 }]"#,
        );
        let config = CliConfig {
            validate: false,
            ..CliConfig::default()
        };

        let output = run(&receipt_command(file.path().to_path_buf()), &config).unwrap();
        assert!(output.contains("Return x-1 - $-10.00\n"));
        assert!(output.ends_with("Subtotal: $40.00\nTax: $3.20\nTotal: $43.20\n"));
    }

    #[test]
    fn test_malformed_items_rejected() {
        let file = items_file(r#"[{ "name": "Widget", "price": "cheap", "quantity": 1 }]"#);

        let err = run(&receipt_command(file.path().to_path_buf()), &CliConfig::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = run(&receipt_command(missing), &CliConfig::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::IoError);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_sample_request() {
        let request = sample_request();
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.customer_name, "Jane Doe");
        assert_eq!(request.address, "123 Main St");
    }
}
