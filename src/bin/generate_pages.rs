//! Static page generator for the bulk chai site.
//!
//! Writes state overview pages and one city-page template per state into a
//! routing directory, plus the site-wide pages, `sitemap.xml` and `robots.txt`.
//!
//! Usage:
//!   cargo run --bin generate_pages -- [OPTIONS]
//!
//! Options:
//!   --data <PATH>        Dataset to read (default: the embedded cities.json, or CITIES_PATH)
//!   --out <PATH>         Output directory (default: site)
//!   --site-url <URL>     Absolute origin for canonical URLs (default: SITE_URL)
//!   --lastmod <DATE>     Sitemap lastmod, YYYY-MM-DD (default: today, UTC)
//!   --skip-existing      Keep files that already exist
//!   --expand-cities      Also write a filled page for every city

use anyhow::Context;
use bulk_chai::{
    application::generate_pages::{GeneratePagesRequest, GeneratePagesUseCase},
    config::{Config, normalize_site_url},
    infrastructure::dataset::loader,
    presentation::site::SiteMetadata,
};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Generate the static routing directory from the location dataset
#[derive(Parser, Debug)]
#[command(name = "generate_pages")]
#[command(about = "Write state pages, city templates and the sitemap")]
struct Args {
    /// Dataset file; falls back to CITIES_PATH, then the embedded copy
    #[arg(long)]
    data: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "site")]
    out: PathBuf,

    /// Absolute site origin, e.g. https://bulkchai.com
    #[arg(long)]
    site_url: Option<String>,

    /// Sitemap lastmod date (YYYY-MM-DD)
    #[arg(long)]
    lastmod: Option<NaiveDate>,

    /// Leave files that already exist untouched
    #[arg(long)]
    skip_existing: bool,

    /// Write a filled page for every city in addition to the templates
    #[arg(long)]
    expand_cities: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,bulk_chai=info"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let mut config = Config::from_env().context("invalid environment configuration")?;
    if let Some(url) = &args.site_url {
        config.site_url = normalize_site_url(url);
    }

    let data_path = args.data.clone().or_else(|| config.cities_path.clone());
    let dataset = loader::load(data_path.as_deref())?;
    let site = SiteMetadata::from_config(&config).with_locations(&dataset);

    let request = GeneratePagesRequest {
        out_dir: args.out,
        lastmod: args
            .lastmod
            .unwrap_or_else(|| chrono::Utc::now().date_naive()),
        skip_existing: args.skip_existing,
        expand_cities: args.expand_cities,
    };

    let report = GeneratePagesUseCase::new(&site, &dataset).execute(&request)?;
    println!(
        "{} files: {} created, {} replaced, {} unchanged, {} skipped ({})",
        report.total(),
        report.created.len(),
        report.replaced.len(),
        report.unchanged.len(),
        report.skipped.len(),
        request.out_dir.display()
    );
    Ok(())
}
