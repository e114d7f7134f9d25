//! Command-line argument model.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orderly")]
#[command(about = "Compute order totals and print a receipt")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print the full order result as JSON instead of the receipt text
    #[arg(long, global = true)]
    pub json: bool,

    /// Skip input validation (negative prices and quantities are priced as-is)
    #[arg(long, global = true)]
    pub no_validate: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Price the built-in sample order (Widget x2, Gadget x3 for Jane Doe)
    Demo,

    /// Price an order read from a JSON items file
    Receipt {
        /// Items file: a JSON array of { "name", "price", "quantity" }; `-` reads stdin
        #[arg(long, short = 'i')]
        items: PathBuf,

        /// Customer name printed on the receipt
        #[arg(long, short = 'c')]
        customer: String,

        /// Delivery address printed on the receipt
        #[arg(long, short = 'a')]
        address: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_demo() {
        let cli = Cli::try_parse_from(["orderly", "demo"]).unwrap();
        assert_eq!(cli.command, Command::Demo);
        assert!(!cli.json);
        assert!(!cli.no_validate);
    }

    #[test]
    fn test_parse_receipt_with_global_flags() {
        let cli = Cli::try_parse_from([
            "orderly",
            "receipt",
            "--items",
            "order.json",
            "--customer",
            "Jane Doe",
            "--address",
            "123 Main St",
            "--json",
            "--no-validate",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(cli.no_validate);
        assert_eq!(
            cli.command,
            Command::Receipt {
                items: PathBuf::from("order.json"),
                customer: "Jane Doe".to_string(),
                address: "123 Main St".to_string(),
            }
        );
    }

    #[test]
    fn test_receipt_requires_customer() {
        assert!(Cli::try_parse_from(["orderly", "receipt", "--items", "-", "--address", "x"]).is_err());
    }
}
