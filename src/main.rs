//! Freight Recalc - carrier cost recalculation and simulation
//!
//! A CLI tool that reprices historical shipments against carrier price lists
//! and writes a ranked comparison workbook.

use clap::Parser;
use freight_recalc::cli::Cli;
use freight_recalc::{commands, logging};

fn main() {
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
