//! Static state → city table backing every location page.
//!
//! The dataset is parsed once at startup (or by the page generator) and is
//! read-only afterwards, so it can be shared behind an `Arc` without locking.
//! Lookups are keyed by the slugified `(state, city)` pair; when two entries
//! collide on that pair the one that appears first in the source wins.

use super::entity::{GeoPoint, LocationEntry, LocationSlugs};
use super::slug::slugify;
use indexmap::IndexMap;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use xxhash_rust::xxh3::xxh3_64;

/// Number of related locations shown on a city page.
pub const DEFAULT_RELATED_COUNT: usize = 6;

/// Most matches returned by [`LocationDataset::search`].
pub const SEARCH_RESULT_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not a state -> city -> facts object: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("dataset contains no states")]
    Empty,

    #[error("state {0:?} has no cities")]
    StateWithoutCities(String),

    #[error("{kind} name {name:?} does not produce a usable slug")]
    EmptySlug { kind: &'static str, name: String },

    #[error("city {city:?} in {state:?} has invalid coordinates")]
    InvalidCoordinates { state: String, city: String },
}

/// Raw per-city record as authored in `cities.json`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct CityFacts {
    nearby_areas: Vec<String>,
    industries: Vec<String>,
    #[serde(alias = "transitEstimate")]
    transit_days: String,
    state_logistics: String,
    city_context: String,
    usage_focus: String,
    #[serde(alias = "education")]
    education_angle: String,
    local_note: String,
    coordinates: Option<GeoPoint>,
}

type RawDataset = IndexMap<String, IndexMap<String, CityFacts>>;

/// A state with the positions of its cities in [`LocationDataset::entries`].
#[derive(Debug, Clone)]
pub struct StateGroup {
    pub name: String,
    pub slug: String,
    city_indices: Vec<usize>,
}

impl StateGroup {
    pub fn city_count(&self) -> usize {
        self.city_indices.len()
    }
}

#[derive(Debug, Clone)]
pub struct LocationDataset {
    entries: Vec<LocationEntry>,
    states: Vec<StateGroup>,
    index: HashMap<(String, String), usize>,
}

impl LocationDataset {
    /// Parses and validates a `{ state: { city: facts } }` JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the document is not the expected shape, is
    /// empty, or names a state or city that slugifies to nothing.
    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let parsed: RawDataset = serde_json::from_str(raw)?;
        Self::from_raw(parsed)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        if raw.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut entries = Vec::new();
        let mut states = Vec::with_capacity(raw.len());
        let mut index = HashMap::new();

        for (state, cities) in raw {
            let state_slug = slugify(&state);
            if state_slug.is_empty() {
                return Err(DatasetError::EmptySlug {
                    kind: "state",
                    name: state,
                });
            }
            if cities.is_empty() {
                return Err(DatasetError::StateWithoutCities(state));
            }

            let mut city_indices = Vec::with_capacity(cities.len());
            for (city, facts) in cities {
                let city_slug = slugify(&city);
                if city_slug.is_empty() {
                    return Err(DatasetError::EmptySlug {
                        kind: "city",
                        name: city,
                    });
                }
                if facts.coordinates.is_some_and(|c| !c.is_valid()) {
                    return Err(DatasetError::InvalidCoordinates {
                        state: state.clone(),
                        city,
                    });
                }

                let position = entries.len();
                let key = (state_slug.clone(), city_slug.clone());
                if index.contains_key(&key) {
                    tracing::warn!(
                        state = %state,
                        city = %city,
                        "duplicate location slug pair, keeping the first entry"
                    );
                    continue;
                }
                index.insert(key, position);

                entries.push(LocationEntry {
                    city,
                    state: state.clone(),
                    city_slug,
                    state_slug: state_slug.clone(),
                    nearby_areas: facts.nearby_areas,
                    industries: facts.industries,
                    transit_estimate: facts.transit_days,
                    state_logistics: facts.state_logistics,
                    city_context: facts.city_context,
                    usage_focus: facts.usage_focus,
                    education: facts.education_angle,
                    local_note: facts.local_note,
                    coordinates: facts.coordinates,
                });
                city_indices.push(position);
            }

            states.push(StateGroup {
                name: state,
                slug: state_slug,
                city_indices,
            });
        }

        Ok(Self {
            entries,
            states,
            index,
        })
    }

    /// Every entry in dataset order.
    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    /// Every state in dataset order.
    pub fn states(&self) -> &[StateGroup] {
        &self.states
    }

    pub fn city_count(&self) -> usize {
        self.entries.len()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn find_state(&self, state_slug: &str) -> Option<&StateGroup> {
        self.states.iter().find(|s| s.slug == state_slug)
    }

    pub fn cities_in<'a>(
        &'a self,
        state: &'a StateGroup,
    ) -> impl Iterator<Item = &'a LocationEntry> + 'a {
        state.city_indices.iter().map(|&i| &self.entries[i])
    }

    /// Logistics overview for a state page: the first city's logistics copy,
    /// or a generic sentence when that copy is blank.
    pub fn state_logistics(&self, state: &StateGroup) -> String {
        self.cities_in(state)
            .next()
            .map(|e| e.state_logistics.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "We have distinctive logistics networks covering all major districts in {}.",
                    state.name
                )
            })
    }

    /// Looks up the entry addressed by a pair of route slugs.
    ///
    /// Slugs are compared verbatim against the slugified stored names, so
    /// callers must pass them exactly as they appear in the URL.
    pub fn resolve(&self, state_slug: &str, city_slug: &str) -> Option<&LocationEntry> {
        self.index
            .get(&(state_slug.to_string(), city_slug.to_string()))
            .map(|&i| &self.entries[i])
    }

    /// Route parameters for every entry, one per entry, in dataset order.
    pub fn location_slugs(&self) -> Vec<LocationSlugs> {
        self.entries.iter().map(LocationEntry::slugs).collect()
    }

    /// Entries whose city or state name contains `query`, ignoring case.
    ///
    /// Results keep dataset order and stop at `limit`. A blank query matches
    /// nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&LocationEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| {
                e.city.to_lowercase().contains(&needle) || e.state.to_lowercase().contains(&needle)
            })
            .take(limit)
            .collect()
    }

    /// Picks internal-link targets for a city page.
    ///
    /// Looks up the first entry with `city_slug` and delegates to
    /// [`related_to`](Self::related_to). An unknown slug yields the first
    /// `count` entries.
    pub fn related(&self, city_slug: &str, count: usize) -> Vec<&LocationEntry> {
        match self.entries.iter().find(|e| e.city_slug == city_slug) {
            Some(current) => self.related_to(current, count),
            None => self.entries.iter().take(count).collect(),
        }
    }

    /// Internal-link targets for a known entry.
    ///
    /// Same-state cities come first, then the rest; each group is shuffled
    /// with an RNG seeded from the city slug, so a given city always gets the
    /// same selection. Grouping uses the entry's own state, which matters
    /// when two states share a city name.
    pub fn related_to(&self, current: &LocationEntry, count: usize) -> Vec<&LocationEntry> {
        let (mut same_state, mut other_states): (Vec<_>, Vec<_>) = self
            .entries
            .iter()
            .filter(|e| e.city_slug != current.city_slug)
            .partition(|e| e.state_slug == current.state_slug);

        let mut rng = ChaCha8Rng::seed_from_u64(xxh3_64(current.city_slug.as_bytes()));
        same_state.shuffle(&mut rng);
        other_states.shuffle(&mut rng);

        same_state
            .into_iter()
            .chain(other_states)
            .take(count)
            .collect()
    }
}
