//! Command handlers

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::domain::model::SIMULATION_SCHEMES;
use crate::domain::service::rate_matcher::AmbiguousRatePolicy;
use crate::domain::service::recalculation::recalculate_carrier;
use crate::domain::service::summary::build_all_summaries;
use crate::error::{Error, Result};
use crate::export::excel::{export_workbook, DEFAULT_OUTPUT_NAME};
use crate::infrastructure::{load_price_list, load_shipments};
use crate::output::output_rankings;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;

    // Override from CLI args
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Recalculate {
            shipments,
            price_lists,
            output,
            ambiguous_rates,
        } => {
            let policy = ambiguous_rates.unwrap_or(config.ambiguous_rates);
            cmd_recalculate(
                &cli,
                shipments,
                price_lists,
                output.clone(),
                policy,
                output_format,
            )
        }

        Commands::Schemes => cmd_schemes(),

        Commands::Config {
            show,
            set_output,
            set_ambiguous_rates,
            reset,
        } => cmd_config(*show, *set_output, *set_ambiguous_rates, *reset),
    }
}

fn cmd_recalculate(
    cli: &Cli,
    shipments_path: &Path,
    price_list_paths: &[PathBuf],
    output: Option<PathBuf>,
    policy: AmbiguousRatePolicy,
    output_format: OutputFormat,
) -> Result<()> {
    if price_list_paths.is_empty() || price_list_paths.len() > 4 {
        return Err(Error::PriceListCount(price_list_paths.len()));
    }

    let started_at = Utc::now();

    let shipments = load_shipments(shipments_path)?;
    tracing::info!(
        count = shipments.len(),
        file = %shipments_path.display(),
        "loaded shipment table"
    );

    // Carrier labels are assigned sequentially in upload order.
    let mut price_lists = Vec::new();
    for (index, path) in price_list_paths.iter().enumerate() {
        let label = format!("carrier{}", index + 1);
        let price_list = load_price_list(path, &label, policy)?;
        tracing::info!(
            carrier = %price_list.label,
            entries = price_list.entries.len(),
            file = %path.display(),
            "loaded price list"
        );
        price_lists.push(price_list);
    }

    if cli.verbose {
        eprintln!(
            "Recalculating {} shipments against {} price lists",
            shipments.len(),
            price_lists.len()
        );
    }

    // Setup progress bar
    let pb = ProgressBar::new(price_lists.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut carriers = Vec::new();
    for price_list in &price_lists {
        pb.set_message(price_list.label.clone());
        carriers.push(recalculate_carrier(&shipments, price_list));
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    let summaries = build_all_summaries(&shipments, &carriers);

    let output_path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME));
    export_workbook(&output_path, &shipments, &carriers, &summaries)?;

    let elapsed = Utc::now() - started_at;
    tracing::info!(
        elapsed_ms = elapsed.num_milliseconds(),
        output = %output_path.display(),
        "recalculation complete"
    );

    output_rankings(output_format, &summaries)?;
    println!("\nReport written to {}", output_path.display());

    Ok(())
}

fn cmd_schemes() -> Result<()> {
    println!("Supported geography schemes (simulation order):");
    for scheme in SIMULATION_SCHEMES {
        println!("  {}", scheme);
    }
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_ambiguous_rates: Option<AmbiguousRatePolicy>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(policy) = set_ambiguous_rates {
        config.ambiguous_rates = policy;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !changed {
        println!("output_format:   {}", config.output_format);
        println!("ambiguous_rates: {}", config.ambiguous_rates);
        println!("config file:     {}", Config::config_path()?.display());
    }

    Ok(())
}
