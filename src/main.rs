use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use site_survey::cascade::delete_catalog_item;
use site_survey::export::{export_csv, export_json, write_survey};
use site_survey::loader::{load_catalog, load_price_overlay, load_survey};
use site_survey::model::CatalogKind;
use site_survey::pricing::{price_rollup, PriceOverlay, PricedBom};
use site_survey::rollup::{collect_assigned_items, InMemoryCatalog};

#[derive(Parser, Debug)]
#[command(name = "site-survey")]
#[command(about = "Site Survey - roll a building survey up into a bill of materials")]
#[command(version)]
struct Args {
    /// Path to survey JSON document
    #[arg(required = true)]
    survey: PathBuf,

    /// Catalog metadata (product / service names, brands, categories)
    #[arg(long, value_name = "FILE", env = "SITE_SURVEY_CATALOG")]
    catalog: Option<PathBuf>,

    /// Price overlay (unit price and margin per id)
    #[arg(long, value_name = "FILE", env = "SITE_SURVEY_PRICING")]
    pricing: Option<PathBuf>,

    /// Remove a product id from every assignment before rolling up
    #[arg(long, value_name = "ID")]
    remove_product: Vec<String>,

    /// Remove a service id from every assignment before rolling up
    #[arg(long, value_name = "ID")]
    remove_service: Vec<String>,

    /// Write the (cleaned) survey back to this path
    #[arg(long, value_name = "FILE")]
    write: Option<PathBuf>,

    /// Export to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(bom: &PricedBom) {
    for (title, lines) in [("Products", &bom.products), ("Services", &bom.services)] {
        if lines.is_empty() {
            continue;
        }
        println!("{title}:");
        for line in lines {
            let total = line
                .line_total
                .map_or_else(|| "-".to_string(), |t| format!("{t:.2}"));
            println!(
                "  {:<12} {:<40} {:>6}  {:>12}",
                line.record.id, line.record.name, line.record.quantity, total
            );
        }
    }
    println!("Total: {:.2}", bom.grand_total());
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let args = Args::parse();

    let mut survey = load_survey(&args.survey)?;
    let catalog = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => InMemoryCatalog::new(),
    };
    let mut overlay = match &args.pricing {
        Some(path) => load_price_overlay(path)?,
        None => PriceOverlay::default(),
    };

    let removals = args
        .remove_product
        .iter()
        .map(|id| (CatalogKind::Product, id))
        .chain(args.remove_service.iter().map(|id| (CatalogKind::Service, id)));
    for (kind, id) in removals {
        survey.buildings = delete_catalog_item(&survey.buildings, kind, id, &mut overlay);
    }

    if let Some(path) = &args.write {
        write_survey(&survey, path)?;
        println!("Wrote survey: {}", path.display());
    }

    let rollup = collect_assigned_items(&survey.buildings, &catalog);
    let bom = price_rollup(&rollup, &overlay)?;

    if let Some(csv_path) = &args.csv {
        export_csv(&bom, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&bom, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.csv.is_some() || args.json.is_some() {
        return Ok(());
    }

    print_summary(&bom);
    Ok(())
}
