use crate::domain::location::LocationDataset;
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Dataset compiled into the binary, used when no override path is configured.
pub const EMBEDDED_CITIES: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/cities.json"));

pub fn load_embedded() -> anyhow::Result<LocationDataset> {
    let dataset = LocationDataset::from_json_str(EMBEDDED_CITIES)
        .context("embedded cities.json is invalid")?;
    info!(
        states = dataset.state_count(),
        cities = dataset.city_count(),
        "Loaded embedded location dataset"
    );
    Ok(dataset)
}

pub fn load_from_path(path: &Path) -> anyhow::Result<LocationDataset> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let dataset = LocationDataset::from_json_str(&raw)
        .with_context(|| format!("dataset {} is invalid", path.display()))?;
    info!(
        path = %path.display(),
        states = dataset.state_count(),
        cities = dataset.city_count(),
        "Loaded location dataset"
    );
    Ok(dataset)
}

/// Loads the override file when given, otherwise the embedded dataset.
pub fn load(path: Option<&Path>) -> anyhow::Result<LocationDataset> {
    match path {
        Some(p) => load_from_path(p),
        None => load_embedded(),
    }
}
