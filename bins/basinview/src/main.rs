//! Basinview CLI
//!
//! Command-line companion to the map viewer: parse free-text
//! coordinates, measure boundary documents and summarize their
//! contents.

use anyhow::{Context, Result};
use basinview_boundary::read_document;
use basinview_geo::{measure_geometry, parse_lat_lon_pair, Feature};
use basinview_map::Bounds;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "basinview")]
#[command(about = "Watershed map toolkit")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a latitude/longitude pair (decimal or DMS)
    Parse {
        /// Coordinate text, e.g. "23.7, 121.0" or "23 30 0 N, 121 0 0 E"
        text: String,
    },

    /// Measure every feature of a GeoJSON boundary document
    Measure {
        /// Path to a .geojson file
        file: PathBuf,
    },

    /// Summarize a boundary document: feature count, bounds, property keys
    Info {
        /// Path to a .geojson file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    match cli.command {
        Commands::Parse { text } => parse_command(&text),
        Commands::Measure { file } => measure_command(&file),
        Commands::Info { file } => info_command(&file),
    }
}

fn parse_command(text: &str) -> Result<()> {
    match parse_lat_lon_pair(text) {
        Ok(coord) => {
            println!(
                "{} Lat: {:.6}  Lon: {:.6}",
                "✓".green(),
                coord.latitude,
                coord.longitude
            );
            Ok(())
        }
        Err(error) => {
            eprintln!("{} {error}", "✗".red());
            eprintln!("  Decimal: 23.7, 121.0");
            eprintln!("  DMS:     23 30 0 N, 121 0 0 E");
            anyhow::bail!("could not parse coordinate pair");
        }
    }
}

fn measure_command(file: &PathBuf) -> Result<()> {
    let features = load(file)?;

    for (index, feature) in features.iter().enumerate() {
        println!("{}", feature_title(index, feature).bold());
        let lines = measure_geometry(&feature.geometry).summary_lines();
        if lines.is_empty() {
            println!("  (point, nothing to measure)");
        }
        for line in lines {
            println!("  {line}");
        }
    }
    Ok(())
}

fn info_command(file: &PathBuf) -> Result<()> {
    let features = load(file)?;

    println!("Features: {}", features.len());

    let bounds = Bounds::from_coordinates(
        features
            .iter()
            .flat_map(|feature| feature.geometry.coordinates()),
    );
    if let Some(bounds) = bounds {
        println!(
            "Bounds:   [{:.4}, {:.4}] .. [{:.4}, {:.4}]",
            bounds.min_lat, bounds.min_lon, bounds.max_lat, bounds.max_lon
        );
    }

    let keys: BTreeSet<&String> = features
        .iter()
        .flat_map(|feature| feature.properties.keys())
        .collect();
    if !keys.is_empty() {
        let keys: Vec<&str> = keys.iter().map(|key| key.as_str()).collect();
        println!("Keys:     {}", keys.join(", "));
    }
    Ok(())
}

fn load(file: &PathBuf) -> Result<Vec<Feature>> {
    read_document(file).with_context(|| format!("failed to load {}", file.display()))
}

fn feature_title(index: usize, feature: &Feature) -> String {
    match feature.property_lines().first() {
        Some(line) => format!("#{index} {line}"),
        None => format!("#{index}"),
    }
}
