use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cart_checkout::config::{CheckoutConfig, OutputFormat};
use cart_checkout::error::exit_code;
use cart_checkout::{cli::Cli, CheckoutPipeline};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {e:#}");
            if let Some(err) = e.downcast_ref::<cart_checkout::Error>() {
                ExitCode::from(err.exit_code() as u8)
            } else {
                ExitCode::from(exit_code::GENERAL_ERROR as u8)
            }
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = CheckoutConfig::from_cli(Cli::parse()).context("Invalid arguments")?;

    // Logs go to stderr so stdout carries only the receipt.
    // RUST_LOG wins over --log / CHECKOUT_LOG.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let catalog = config.load_catalog().context("Failed to load catalog")?;
    let cart = config.load_cart().context("Failed to load cart")?;
    tracing::debug!(products = catalog.len(), cart_entries = cart.len(), "Inputs loaded");

    let receipt = CheckoutPipeline::new().receipt(&catalog, &cart);

    match config.output {
        OutputFormat::Text => println!("{receipt}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&receipt).map_err(cart_checkout::Error::from)?
        ),
    }

    Ok(())
}
