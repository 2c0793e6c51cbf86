//! agf2yml - CLI tool to convert Zemax AGF catalogs to refractiveindex.info YAML files.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use agf2yml_rs::{
    catalog_keys, find_catalog, parse_agf_file, validate_catalog, Catalog, CatalogConverter,
    CATALOGS,
};

/// Convert Zemax AGF glass catalogs to refractiveindex.info YAML records.
#[derive(Parser, Debug)]
#[command(name = "agf2yml")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog key (schott, ohara, hikari, hoya, sumita, cdgm)
    catalog: Option<String>,

    /// Convert every known catalog
    #[arg(long, conflicts_with = "catalog")]
    all: bool,

    /// List known catalogs and exit
    #[arg(long)]
    list: bool,

    /// Input AGF file (overrides the catalog's file)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory (overrides the catalog's directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't write records
    #[arg(long)]
    validate: bool,

    /// Output parsed records as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if args.list {
        for catalog in CATALOGS {
            println!("{:<8} {} -> {}", catalog.key, catalog.file, catalog.dir);
        }
        return Ok(());
    }

    let catalogs: Vec<&Catalog> = if args.all {
        if args.input.is_some() || args.output.is_some() {
            anyhow::bail!("--input and --output apply to a single catalog, not --all");
        }
        CATALOGS.iter().collect()
    } else if let Some(key) = &args.catalog {
        vec![find_catalog(key)?]
    } else {
        print_usage();
        std::process::exit(1);
    };

    for catalog in catalogs {
        process_catalog(catalog, &args)?;
    }

    Ok(())
}

fn print_usage() {
    println!("Usage: agf2yml <catalog name>");
    println!("Catalog name can be one of the following: ");
    for key in catalog_keys() {
        println!("{} ", key);
    }
}

fn process_catalog(catalog: &Catalog, args: &Args) -> Result<()> {
    let input = args.input.clone().unwrap_or_else(|| catalog.input_path());
    let output = args.output.clone().unwrap_or_else(|| catalog.output_dir());

    if args.debug || args.validate {
        let records = parse_agf_file(&input)
            .with_context(|| format!("Failed to parse {}", input.display()))?;

        info!("Parsed {} glass(es) from {}", records.len(), input.display());

        let validation = validate_catalog(&records);

        for warning in &validation.warnings {
            warn!("{}", warning);
        }

        for err in &validation.errors {
            error!("{}", err);
        }

        // Debug output
        if args.debug {
            let json = serde_json::to_string_pretty(&records)?;
            println!("{}", json);
            return Ok(());
        }

        if !validation.passed {
            anyhow::bail!("Validation of catalog '{}' failed", catalog.key);
        }

        info!("Validation passed");
        return Ok(());
    }

    let summary = CatalogConverter::new(&output, catalog.references)
        .convert_file(&input)
        .with_context(|| {
            format!(
                "Failed to convert {} into {}",
                input.display(),
                output.display()
            )
        })?;

    info!(
        "Generated {} record(s) in {}",
        summary.records(),
        output.display()
    );

    Ok(())
}
