use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GeneratePagesRequest {
    /// Root of the routing directory, e.g. `site/`.
    pub out_dir: PathBuf,

    /// Date stamped on every sitemap entry.
    pub lastmod: NaiveDate,

    /// Leave files that already exist untouched instead of overwriting them.
    pub skip_existing: bool,

    /// Also write a filled `<state>/<city>/index.html` for every entry.
    pub expand_cities: bool,
}

/// What happened to each output path during one generator run.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct GenerationReport {
    /// New files.
    pub created: Vec<PathBuf>,
    /// Existing files whose content changed.
    pub replaced: Vec<PathBuf>,
    /// Existing files that already had the generated content.
    pub unchanged: Vec<PathBuf>,
    /// Existing files left alone because of `skip_existing`.
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.created.len() + self.replaced.len() + self.unchanged.len() + self.skipped.len()
    }
}
