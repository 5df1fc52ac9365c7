//! envsense: one-shot reader for BLE Environmental Sensing characteristics
//!
//! Connects to a peripheral by address, reads one characteristic (humidity,
//! irradiance, pressure or temperature), prints the scaled value and exits.
//! Requires permission to access the Bluetooth device (BlueZ).

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// === Modules ===

mod ble;
mod error;
mod reader;
mod reading;
mod sensor;

use ble::BluezTransport;
use sensor::SensorKind;

// === CLI ===

#[derive(Parser)]
#[command(name = "envsense")]
#[command(about = "Read a GATT Environmental Sensing characteristic from a BLE peripheral")]
struct Cli {
    /// Which sensor characteristic to read
    #[arg(value_enum)]
    sensor: SensorKind,

    /// Peripheral Bluetooth address; prompted for interactively when omitted
    #[arg(short, long)]
    address: Option<String>,

    /// Bluetooth adapter name (e.g. "hci0"); uses the default adapter when omitted
    #[arg(long)]
    adapter: Option<String>,
}

/// Ask the operator for the peripheral address on stdin.
fn prompt_address() -> anyhow::Result<String> {
    print!("Device Address (e.g. 12:34:56:78:9A:BC): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read device address")?;

    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the measurement line
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let address = match cli.address {
        Some(address) => address,
        None => prompt_address()?,
    };

    let transport = BluezTransport::new(cli.adapter.as_deref()).await?;
    let reading = reader::read_sensor(&transport, address.trim(), cli.sensor).await?;

    println!("{}", reading);
    Ok(())
}
