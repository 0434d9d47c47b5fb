// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-mave CLI
//!
//! Look up MaveDB variant effect measurements for a table of HGVS variants.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ferro_mave::mavedb::DEFAULT_MAVEDB_URL;
use ferro_mave::registry::DEFAULT_REGISTRY_URL;
use ferro_mave::{
    read_variant_queries, write_records, MaveDbClient, RegistryClient, VariantLookup,
};

#[derive(Parser)]
#[command(name = "ferro-mave")]
#[command(author, version, about = "MaveDB variant effect lookup")]
#[command(
    long_about = "Resolve HGVS variants to ClinGen alleles, fetch MaveDB effect \
measurements, classify scores against calibrated ranges, and write one CSV row \
per measurement.

Examples:
  ferro-mave variants.csv effects.csv
  ferro-mave --mavedb-url http://localhost:8000/api/v1 variants.csv effects.csv"
)]
struct Cli {
    /// Input CSV with an `hgvs` column
    input: PathBuf,

    /// Output CSV path
    output: PathBuf,

    /// Base URL of the ClinGen Allele Registry
    #[arg(long, default_value = DEFAULT_REGISTRY_URL)]
    registry_url: String,

    /// Base URL of the MaveDB API
    #[arg(long, default_value = DEFAULT_MAVEDB_URL)]
    mavedb_url: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let resolver = RegistryClient::new(&cli.registry_url)?;
    let effects = MaveDbClient::new(&cli.mavedb_url)?;
    let lookup = VariantLookup::new(resolver, effects);

    let queries = read_variant_queries(&cli.input)?;
    info!(variants = queries.len(), input = %cli.input.display(), "read input");

    let records = lookup.run(&queries)?;
    write_records(&cli.output, &records)?;
    info!(records = records.len(), output = %cli.output.display(), "wrote output");

    Ok(())
}
