use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Builds a pool that connects on first use.
///
/// Pages and the location API never touch the database, so the server must
/// start (and keep serving) while the lead store is down.
pub fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)?;
    Ok(pool)
}
