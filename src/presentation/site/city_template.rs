//! Per-state city page templates.
//!
//! A template is a complete HTML document for one state in which everything
//! city-specific is left as a `{{slot}}` marker. The state's display name and
//! logistics copy are written in literally (with `{` encoded, so dataset text
//! can never form a marker). The server fills a template per request and the
//! page generator writes the unfilled form to disk, so both paths produce
//! the same markup.

use super::components::{
    Crumb, Literal, QuoteFormContext, breadcrumbs, contact_cta, faq_section, freight_section,
    map_section, quote_form, related_section,
};
use super::layout::page;
use super::metadata::{PageMeta, SiteMetadata};
use super::structured_data::{breadcrumb, faq_page, local_business, to_script_json};
use crate::domain::location::{
    DEFAULT_RELATED_COUNT, LocationDataset, LocationEntry, StateGroup, default_faqs,
};
use lazy_static::lazy_static;
use maud::{Markup, PreEscaped, html};
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

lazy_static! {
    static ref SLOT_PATTERN: Regex = Regex::new(r"\{\{([a-z_]+)\}\}").unwrap();
}

/// Slots whose values are plain text, HTML-escaped when filled.
pub const TEXT_SLOTS: [&str; 10] = [
    "page_title",
    "page_description",
    "city",
    "city_slug",
    "transit_estimate",
    "nearby_areas_intro",
    "city_context",
    "usage_focus",
    "education",
    "local_note",
];

/// Slots whose values are pre-rendered markup or JSON, inserted verbatim.
pub const BLOCK_SLOTS: [&str; 7] = [
    "breadcrumb_json",
    "local_business_json",
    "faq_json",
    "freight_section",
    "map_section",
    "faq_section",
    "related_section",
];

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("template references unknown slot {{{{{0}}}}}")]
    UnknownSlot(String),

    #[error("no city template for state {0:?}")]
    MissingTemplate(String),
}

fn slot(name: &str) -> PreEscaped<String> {
    PreEscaped(format!("{{{{{name}}}}}"))
}

fn escape_text(value: &str) -> String {
    html! { (Literal(value)) }.into_string()
}

#[derive(Debug, Clone)]
pub struct CityTemplate {
    pub state_slug: String,
    pub html: String,
}

impl CityTemplate {
    /// Renders the template for one state. Output depends only on the
    /// arguments, so regenerating from the same dataset is byte-identical.
    pub fn for_state(site: &SiteMetadata, state: &StateGroup, logistics: &str) -> Self {
        let meta = PageMeta {
            title: "{{page_title}}".into(),
            description: "{{page_description}}".into(),
            canonical: Some(format!("/{}/{{{{city_slug}}}}", state.slug)),
            noindex: false,
        };
        let state_href = format!("/{}", state.slug);

        let body: Markup = html! {
            script type="application/ld+json" { (slot("breadcrumb_json")) }
            script type="application/ld+json" { (slot("local_business_json")) }

            (breadcrumbs(&[
                Crumb::link("Home", "/"),
                Crumb::link("Locations", "/available-locations"),
                Crumb::link(Literal(&state.name), state_href.clone()),
                Crumb::current(slot("city")),
            ]))

            h1 { "Bulk CTC Tea Supplier in " (slot("city")) ", " (Literal(&state.name)) }

            section.intro {
                p {
                    "Businesses in " strong { (slot("city")) } " rely on consistent bulk CTC tea "
                    "supply for daily operations across cafes, offices, and retail outlets. We "
                    "serve major localities such as " (slot("nearby_areas_intro"))
                    " and surrounding regions."
                }
                p {
                    "Orders are fulfilled with GST billing, quality checks, and a minimum order "
                    "quantity of " strong { "50 kg" } ", ensuring stable supply for growing "
                    "businesses across " (Literal(&state.name)) "."
                }
            }

            section.local-context {
                h2 { "Bulk Chai Preferences in " (slot("city")) }
                p { (slot("city_context")) }
                p { (slot("usage_focus")) }
                p { (slot("education")) }
                p.muted { (slot("local_note")) }
            }

            section.logistics {
                h2 { "Delivery & Logistics in " (Literal(&state.name)) }
                p { (Literal(logistics)) }
                div.facts {
                    div { p.muted { "Estimated Delivery" } strong { (slot("transit_estimate")) } }
                    div { p.muted { "Minimum Order" } strong { "50 kg" } }
                }
            }

            (slot("freight_section"))

            (quote_form(site, &QuoteFormContext {
                city: Some(slot("city")),
                state: Some(html! { (Literal(&state.name)) }),
                source_page: format!("/{}/{{{{city_slug}}}}", state.slug),
            }))

            (contact_cta(site))
            (slot("map_section"))
            (slot("faq_section"))
            script type="application/ld+json" { (slot("faq_json")) }
            (slot("related_section"))
        };

        Self {
            state_slug: state.slug.clone(),
            html: page(site, &meta, body).into_string(),
        }
    }

    /// Names of every slot marker in the template, in order of appearance.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        SLOT_PATTERN
            .captures_iter(&self.html)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
    }

    /// Replaces every marker with its value in a single pass; inserted values
    /// are never rescanned.
    ///
    /// # Errors
    ///
    /// [`TemplateError::UnknownSlot`] if a marker has no value.
    pub fn fill(&self, values: &HashMap<&'static str, String>) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.html.len() + 8 * 1024);
        let mut last = 0;

        for caps in SLOT_PATTERN.captures_iter(&self.html) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = values
                .get(name.as_str())
                .ok_or_else(|| TemplateError::UnknownSlot(name.as_str().to_string()))?;
            out.push_str(&self.html[last..whole.start()]);
            out.push_str(value);
            last = whole.end();
        }
        out.push_str(&self.html[last..]);

        Ok(out)
    }
}

/// Values for every slot of a city template, escaped where needed.
pub fn city_slot_values(
    site: &SiteMetadata,
    dataset: &LocationDataset,
    entry: &LocationEntry,
) -> HashMap<&'static str, String> {
    let title = format!(
        "Bulk CTC Tea Supplier in {}, {} | BulkCTC",
        entry.city, entry.state
    );
    let description = format!(
        "Wholesale bulk CTC tea supply for businesses in {}, {}. GST billing, consistent \
         quality, and reliable delivery across nearby areas.",
        entry.city, entry.state
    );
    let meta = PageMeta::new(site, &title, Some(&description));

    let nearby = if entry.nearby_areas.is_empty() {
        format!("central {}", entry.city)
    } else {
        entry
            .nearby_areas
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let transit = if entry.transit_estimate.trim().is_empty() {
        "3-7 days"
    } else {
        entry.transit_estimate.as_str()
    };

    let state_path = format!("/{}", entry.state_slug);
    let city_path = entry.path();
    let faqs = default_faqs(entry);
    let related = dataset.related_to(entry, DEFAULT_RELATED_COUNT);

    let text = [
        ("page_title", meta.title.as_str()),
        ("page_description", meta.description.as_str()),
        ("city", entry.city.as_str()),
        ("city_slug", entry.city_slug.as_str()),
        ("transit_estimate", transit),
        ("nearby_areas_intro", nearby.as_str()),
        ("city_context", entry.city_context.as_str()),
        ("usage_focus", entry.usage_focus.as_str()),
        ("education", entry.education.as_str()),
        ("local_note", entry.local_note.as_str()),
    ];

    let mut values: HashMap<&'static str, String> = text
        .into_iter()
        .map(|(name, value)| (name, escape_text(value)))
        .collect();

    values.insert(
        "breadcrumb_json",
        to_script_json(&breadcrumb(
            site,
            &[
                ("Home", "/"),
                ("Locations", "/available-locations"),
                (entry.state.as_str(), state_path.as_str()),
                (entry.city.as_str(), city_path.as_str()),
            ],
        )),
    );
    values.insert(
        "local_business_json",
        to_script_json(&local_business(site, entry)),
    );
    values.insert("faq_json", to_script_json(&faq_page(&faqs)));
    values.insert(
        "freight_section",
        freight_section(site, entry).into_string(),
    );
    values.insert("map_section", map_section(entry).into_string());
    values.insert(
        "faq_section",
        faq_section(&entry.city, &faqs).into_string(),
    );
    values.insert(
        "related_section",
        related_section(&related).into_string(),
    );

    values
}

/// One template per state, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct CityTemplates {
    by_state: HashMap<String, CityTemplate>,
}

impl CityTemplates {
    pub fn build(site: &SiteMetadata, dataset: &LocationDataset) -> Self {
        let by_state = dataset
            .states()
            .iter()
            .map(|state| {
                let template =
                    CityTemplate::for_state(site, state, &dataset.state_logistics(state));
                (state.slug.clone(), template)
            })
            .collect();
        Self { by_state }
    }

    pub fn get(&self, state_slug: &str) -> Option<&CityTemplate> {
        self.by_state.get(state_slug)
    }

    pub fn len(&self) -> usize {
        self.by_state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_state.is_empty()
    }

    /// Full HTML of the landing page for `entry`.
    pub fn render_city(
        &self,
        site: &SiteMetadata,
        dataset: &LocationDataset,
        entry: &LocationEntry,
    ) -> Result<String, TemplateError> {
        let template = self
            .get(&entry.state_slug)
            .ok_or_else(|| TemplateError::MissingTemplate(entry.state_slug.clone()))?;
        template.fill(&city_slot_values(site, dataset, entry))
    }
}
