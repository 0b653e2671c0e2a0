use crate::config::Config;
use crate::domain::location::LocationDataset;

/// States linked from the footer, by name.
pub const FOOTER_STATE_COUNT: usize = 10;
/// States whose leading cities appear under "Popular Delivery Locations".
pub const FOOTER_POPULAR_STATES: usize = 6;
pub const FOOTER_CITIES_PER_STATE: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// Location links rendered in every page footer.
#[derive(Debug, Clone, Default)]
pub struct FooterLocations {
    pub popular_cities: Vec<FooterLink>,
    pub states: Vec<FooterLink>,
}

impl FooterLocations {
    /// States sorted by name; the first [`FOOTER_POPULAR_STATES`] contribute
    /// their first cities in dataset order.
    pub fn from_dataset(dataset: &LocationDataset) -> Self {
        let mut states: Vec<_> = dataset.states().iter().collect();
        states.sort_by(|a, b| a.name.cmp(&b.name));

        let popular_cities = states
            .iter()
            .take(FOOTER_POPULAR_STATES)
            .flat_map(|state| dataset.cities_in(state).take(FOOTER_CITIES_PER_STATE))
            .map(|entry| FooterLink {
                label: format!("Bulk Tea in {}", entry.city),
                href: entry.path(),
            })
            .collect();

        let states = states
            .iter()
            .take(FOOTER_STATE_COUNT)
            .map(|state| FooterLink {
                label: state.name.clone(),
                href: format!("/{}", state.slug),
            })
            .collect();

        Self {
            popular_cities,
            states,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.popular_cities.is_empty() && self.states.is_empty()
    }
}

/// Site-wide identity and contact details shared by every rendered page.
#[derive(Debug, Clone)]
pub struct SiteMetadata {
    pub title: String,
    pub header_title: String,
    pub description: String,
    pub company_name: String,
    pub founding_date: String,
    pub locale: String,
    /// Origin without a trailing slash.
    pub site_url: String,
    pub telephone: String,
    pub whatsapp: String,
    pub email: String,
    pub business_hours: String,
    pub social_links: Vec<String>,
    pub twitter_handle: String,
    pub turnstile_site_key: Option<String>,
    pub footer_locations: FooterLocations,
}

impl SiteMetadata {
    /// Default identity served from `site_url`.
    pub fn new(site_url: &str) -> Self {
        Self {
            title: "Bulk Chai Supplier in India | Wholesale Tea for Business".into(),
            header_title: "Bulk Chai".into(),
            description: "Looking for bulk chai supply in India? Learn about wholesale tea \
                          sourcing, pricing, logistics, and quality standards for cafes, \
                          offices, and businesses."
                .into(),
            company_name: "Gray Cup Enterprises Pvt. Ltd.".into(),
            founding_date: "2019".into(),
            locale: "en_IN".into(),
            site_url: crate::config::normalize_site_url(site_url),
            telephone: crate::config::DEFAULT_TELEPHONE.into(),
            whatsapp: crate::config::DEFAULT_WHATSAPP.into(),
            email: crate::config::DEFAULT_EMAIL.into(),
            business_hours: "Mon-Sat: 9:00 AM - 6:00 PM".into(),
            social_links: vec![
                "https://www.facebook.com/groups/1177349100659004".into(),
                "https://twitter.com/thegraycup".into(),
                "https://github.com/gray-cup".into(),
                "https://www.linkedin.com/company/gray-cup/".into(),
                "https://www.instagram.com/thegraycup".into(),
            ],
            twitter_handle: "@thegraycup".into(),
            turnstile_site_key: None,
            footer_locations: FooterLocations::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            telephone: config.contact_telephone.clone(),
            whatsapp: config
                .whatsapp_number
                .chars()
                .filter(char::is_ascii_digit)
                .collect(),
            email: config.contact_email.clone(),
            turnstile_site_key: config.turnstile_site_key.clone(),
            ..Self::new(&config.site_url)
        }
    }

    /// Fills the footer's location links from `dataset`.
    pub fn with_locations(mut self, dataset: &LocationDataset) -> Self {
        self.footer_locations = FooterLocations::from_dataset(dataset);
        self
    }

    /// Resolves a site-relative path against [`Self::site_url`]; absolute
    /// URLs are returned unchanged.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.site_url, path)
        } else {
            format!("{}/{}", self.site_url, path)
        }
    }

    pub fn logo_url(&self) -> String {
        self.absolute_url("/static/images/logo.png")
    }

    pub fn social_banner_url(&self) -> String {
        self.absolute_url("/static/images/og.png")
    }
}

/// Per-page `<head>` content.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Site-relative canonical path.
    pub canonical: Option<String>,
    pub noindex: bool,
}

impl PageMeta {
    /// Appends the site title unless `title` already contains it.
    pub fn new(site: &SiteMetadata, title: &str, description: Option<&str>) -> Self {
        let title = if title.contains(&site.title) {
            title.to_string()
        } else {
            format!("{} | {}", title, site.title)
        };
        Self {
            title,
            description: description.unwrap_or(&site.description).to_string(),
            canonical: None,
            noindex: false,
        }
    }

    pub fn canonical(mut self, path: impl Into<String>) -> Self {
        self.canonical = Some(path.into());
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }

    pub fn robots(&self) -> &'static str {
        if self.noindex {
            "noindex, nofollow"
        } else {
            "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1"
        }
    }
}
