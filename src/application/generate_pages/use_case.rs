use crate::{
    application::generate_pages::dto::{GeneratePagesRequest, GenerationReport},
    domain::location::LocationDataset,
    presentation::site::{CityTemplates, SiteMetadata, pages, sitemap},
};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Directory segment standing in for the city slug in template paths.
pub const CITY_PARAM_DIR: &str = "[city]";
pub const TEMPLATE_FILE: &str = "template.html";

enum WriteOutcome {
    Created,
    Replaced,
    Unchanged,
    Skipped,
}

/// Writes the static routing directory for a dataset.
///
/// Layout under `out_dir`:
/// - `index.html` and `404.html`
/// - `<page>/index.html` for `available-locations`, `contact-us`, `about` and
///   `privacy-policy`
/// - `<state>/index.html` for every state
/// - `<state>/[city]/template.html` with the state's name and logistics text
///   baked in and `{{slot}}` markers for the per-city values
/// - `<state>/<city>/index.html` for every entry when `expand_cities` is set
/// - `sitemap.xml` and `robots.txt`
///
/// Output is a pure function of the dataset, the site metadata and `lastmod`.
pub struct GeneratePagesUseCase<'a> {
    site: &'a SiteMetadata,
    dataset: &'a LocationDataset,
}

impl<'a> GeneratePagesUseCase<'a> {
    pub fn new(site: &'a SiteMetadata, dataset: &'a LocationDataset) -> Self {
        Self { site, dataset }
    }

    #[instrument(skip(self, request), fields(out_dir = %request.out_dir.display()))]
    pub fn execute(&self, request: &GeneratePagesRequest) -> anyhow::Result<GenerationReport> {
        let out = &request.out_dir;
        let mut report = GenerationReport::default();
        let mut emit = |path: PathBuf, contents: String| -> anyhow::Result<()> {
            record(
                &mut report,
                write_page(&path, &contents, request.skip_existing)?,
                path,
            );
            Ok(())
        };

        emit(
            out.join("index.html"),
            pages::home(self.site, self.dataset).into_string(),
        )?;
        emit(
            out.join("available-locations").join("index.html"),
            pages::available_locations(self.site, self.dataset).into_string(),
        )?;
        emit(
            out.join("contact-us").join("index.html"),
            pages::contact(self.site).into_string(),
        )?;
        emit(
            out.join("about").join("index.html"),
            pages::about(self.site).into_string(),
        )?;
        emit(
            out.join("privacy-policy").join("index.html"),
            pages::privacy_policy(self.site).into_string(),
        )?;
        emit(
            out.join("404.html"),
            pages::not_found(self.site).into_string(),
        )?;

        let templates = CityTemplates::build(self.site, self.dataset);
        for state in self.dataset.states() {
            let state_dir = out.join(&state.slug);
            emit(
                state_dir.join("index.html"),
                pages::state_page(self.site, self.dataset, state).into_string(),
            )?;

            let template = templates
                .get(&state.slug)
                .with_context(|| format!("no template built for state {}", state.slug))?;
            emit(
                state_dir.join(CITY_PARAM_DIR).join(TEMPLATE_FILE),
                template.html.clone(),
            )?;
        }

        if request.expand_cities {
            for entry in self.dataset.entries() {
                let html = templates
                    .render_city(self.site, self.dataset, entry)
                    .with_context(|| format!("failed to render {}", entry.path()))?;
                emit(
                    out.join(&entry.state_slug)
                        .join(&entry.city_slug)
                        .join("index.html"),
                    html,
                )?;
            }
        }

        emit(
            out.join("sitemap.xml"),
            sitemap::sitemap_xml(self.site, self.dataset, request.lastmod)?,
        )?;
        emit(out.join("robots.txt"), sitemap::robots_txt(self.site))?;

        info!(
            created = report.created.len(),
            replaced = report.replaced.len(),
            unchanged = report.unchanged.len(),
            skipped = report.skipped.len(),
            "Page generation finished"
        );
        Ok(report)
    }
}

fn record(report: &mut GenerationReport, outcome: WriteOutcome, path: PathBuf) {
    match outcome {
        WriteOutcome::Created => report.created.push(path),
        WriteOutcome::Replaced => report.replaced.push(path),
        WriteOutcome::Unchanged => report.unchanged.push(path),
        WriteOutcome::Skipped => report.skipped.push(path),
    }
}

fn write_page(path: &Path, contents: &str, skip_existing: bool) -> anyhow::Result<WriteOutcome> {
    let outcome = if path.exists() {
        if skip_existing {
            debug!(path = %path.display(), "kept existing file");
            return Ok(WriteOutcome::Skipped);
        }
        let current = fs::read(path)
            .with_context(|| format!("failed to read existing {}", path.display()))?;
        if current == contents.as_bytes() {
            debug!(path = %path.display(), "unchanged");
            return Ok(WriteOutcome::Unchanged);
        }
        warn!(path = %path.display(), "overwriting file with different content");
        WriteOutcome::Replaced
    } else {
        WriteOutcome::Created
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote page");
    Ok(outcome)
}
