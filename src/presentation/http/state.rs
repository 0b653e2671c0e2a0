use crate::{
    config::Config,
    domain::{location::LocationDataset, quote::QuoteRepository},
    infrastructure::verification::BotVerifier,
    presentation::site::{CityTemplates, SiteMetadata},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub site: Arc<SiteMetadata>,
    pub dataset: Arc<LocationDataset>,
    pub city_templates: Arc<CityTemplates>,
    /// `None` when no database is configured.
    pub quotes: Option<Arc<dyn QuoteRepository>>,
    pub verifier: Arc<dyn BotVerifier>,
}

impl AppState {
    /// Derives site metadata from `config` and `dataset`, then pre-builds
    /// every city template.
    pub fn new(
        config: Config,
        dataset: LocationDataset,
        quotes: Option<Arc<dyn QuoteRepository>>,
        verifier: Arc<dyn BotVerifier>,
    ) -> Self {
        let site = SiteMetadata::from_config(&config).with_locations(&dataset);
        let city_templates = CityTemplates::build(&site, &dataset);
        tracing::info!(
            templates = city_templates.len(),
            "Built city page templates"
        );

        Self {
            config,
            site: Arc::new(site),
            dataset: Arc::new(dataset),
            city_templates: Arc::new(city_templates),
            quotes,
            verifier,
        }
    }
}
