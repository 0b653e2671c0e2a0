use serde::{Deserialize, Serialize};

/// Geographic center of India, used when a city has no coordinates on file.
pub const INDIA_CENTER: GeoPoint = GeoPoint {
    lat: 20.5937,
    lng: 78.9629,
};

/// Latitude/longitude pair in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Returns `true` if both components are inside valid geographic bounds.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// One deliverable (state, city) pair with the copy rendered on its landing page.
///
/// # Invariants
/// - `state_slug`/`city_slug` are `slugify(state)`/`slugify(city)` and never empty
/// - entries are created once when the dataset loads and never mutated afterwards
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    pub city: String,
    pub state: String,
    pub city_slug: String,
    pub state_slug: String,

    /// Localities served from the same drop point.
    pub nearby_areas: Vec<String>,

    /// Dominant buyer segments in the city.
    pub industries: Vec<String>,

    /// Human-readable delivery window, e.g. "3-5 days".
    pub transit_estimate: String,

    pub state_logistics: String,
    pub city_context: String,
    pub usage_focus: String,
    pub education: String,
    pub local_note: String,

    pub coordinates: Option<GeoPoint>,
}

impl LocationEntry {
    /// Coordinates for map embeds and structured data, falling back to [`INDIA_CENTER`].
    pub fn coordinates_or_default(&self) -> GeoPoint {
        self.coordinates.unwrap_or(INDIA_CENTER)
    }

    /// Site-relative route of this entry's landing page.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.state_slug, self.city_slug)
    }

    pub fn slugs(&self) -> LocationSlugs {
        LocationSlugs {
            state: self.state_slug.clone(),
            city: self.city_slug.clone(),
        }
    }
}

/// Route parameters addressing one [`LocationEntry`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LocationSlugs {
    pub state: String,
    pub city: String,
}
