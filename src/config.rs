//! Application configuration loading from environment variables.
//!
//! All configuration is read once at startup (after `dotenvy` has loaded any
//! `.env` file) and passed around by value. Nothing here is required: a bare
//! environment starts a server that renders every page and answers quote
//! submissions with 503 until a database is configured.
//!
//! # Environment Variables
//!
//! ## Server
//! - `RUST_LOG`: Logging filter (default: "info,bulk_chai=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//!
//! ## Lead store
//! - `DATABASE_URL`: PostgreSQL connection string; unset disables quote storage
//! - `DATABASE_MAX_CONNECTIONS`: DB pool size (default: 10)
//! - `RUN_MIGRATIONS`: Apply pending migrations at startup (default: true)
//! - `IGNORE_MISSING_MIGRATIONS`: Skip migrations missing locally (default: true)
//!
//! ## Bot verification
//! - `TURNSTILE_SECRET_KEY`: Server secret; when set every submission needs a token
//! - `TURNSTILE_SITE_KEY`: Public key rendered into the quote form widget
//! - `TURNSTILE_VERIFY_URL`: Siteverify endpoint (default: Cloudflare's)
//!
//! ## Site
//! - `CITIES_PATH`: Location dataset override (default: embedded `data/cities.json`)
//! - `SITE_URL`: Absolute origin used for canonical URLs and the sitemap
//!   (default: "https://bulkchai.com")
//! - `CONTACT_TELEPHONE`: Sales phone number (default: "+91-9876543210")
//! - `WHATSAPP_NUMBER`: WhatsApp number in international digits (default: "919876543210")
//! - `CONTACT_EMAIL`: Sales email address (default: "bulk@graycup.in")

use crate::infrastructure::verification::turnstile::DEFAULT_VERIFY_URL;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_SITE_URL: &str = "https://bulkchai.com";
pub const DEFAULT_TELEPHONE: &str = "+91-9876543210";
pub const DEFAULT_WHATSAPP: &str = "919876543210";
pub const DEFAULT_EMAIL: &str = "bulk@graycup.in";

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// PostgreSQL connection string; `None` leaves the lead store unconfigured
    pub database_url: Option<String>,

    pub database_max_connections: u32,

    pub run_migrations: bool,

    /// Skip missing migrations during startup
    pub ignore_missing_migrations: bool,

    /// Turnstile server secret. Its presence makes verification mandatory.
    pub turnstile_secret_key: Option<String>,

    pub turnstile_site_key: Option<String>,

    pub turnstile_verify_url: String,

    /// Location dataset file; the embedded copy is used when unset
    pub cities_path: Option<PathBuf>,

    /// Public origin without a trailing slash, e.g. `https://bulkchai.com`
    pub site_url: String,

    pub contact_telephone: String,
    pub whatsapp_number: String,
    pub contact_email: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            database_url: env_optional("DATABASE_URL"),
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10)?,
            run_migrations: env_or("RUN_MIGRATIONS", true)?,
            ignore_missing_migrations: env_or("IGNORE_MISSING_MIGRATIONS", true)?,
            turnstile_secret_key: env_optional("TURNSTILE_SECRET_KEY"),
            turnstile_site_key: env_optional("TURNSTILE_SITE_KEY"),
            turnstile_verify_url: env_or("TURNSTILE_VERIFY_URL", DEFAULT_VERIFY_URL.to_string())?,
            cities_path: env_optional("CITIES_PATH").map(PathBuf::from),
            site_url: normalize_site_url(&env_or("SITE_URL", DEFAULT_SITE_URL.to_string())?),
            contact_telephone: env_or("CONTACT_TELEPHONE", DEFAULT_TELEPHONE.to_string())?,
            whatsapp_number: env_or("WHATSAPP_NUMBER", DEFAULT_WHATSAPP.to_string())?,
            contact_email: env_or("CONTACT_EMAIL", DEFAULT_EMAIL.to_string())?,
        })
    }

    /// Whether quote submissions must carry a bot-verification token.
    pub fn verification_required(&self) -> bool {
        self.turnstile_secret_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: None,
            database_max_connections: 10,
            run_migrations: true,
            ignore_missing_migrations: true,
            turnstile_secret_key: None,
            turnstile_site_key: None,
            turnstile_verify_url: DEFAULT_VERIFY_URL.to_string(),
            cities_path: None,
            site_url: DEFAULT_SITE_URL.to_string(),
            contact_telephone: DEFAULT_TELEPHONE.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP.to_string(),
            contact_email: DEFAULT_EMAIL.to_string(),
        }
    }
}

/// Strips trailing slashes so paths can be appended with `format!("{site}{path}")`.
pub fn normalize_site_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Load an optional environment variable, treating blank values as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
