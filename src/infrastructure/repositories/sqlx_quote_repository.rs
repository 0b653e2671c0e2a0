use crate::domain::quote::{LeadQuote, NewLeadQuote, QuoteRepository};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

pub struct SqlxQuoteRepository {
    pub pool: PgPool,
}

impl SqlxQuoteRepository {
    /// Creates a new instance of the repository with the provided database pool.
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxQuoteRepository with connection pool");
        Self { pool }
    }
}

/// Splits sqlx failures into "the store is unreachable" and everything else.
fn map_sqlx_error(context: &str, e: sqlx::Error) -> DomainError {
    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => {
            error!("{context}: lead store unreachable: {e}");
            DomainError::StorageUnavailable(format!("{context}: {e}"))
        }
        other => {
            error!("{context}: {other}");
            DomainError::InfrastructureError(format!("{context}: {other}"))
        }
    }
}

#[async_trait]
impl QuoteRepository for SqlxQuoteRepository {
    /// Inserts one quote row and returns it as stored.
    ///
    /// # Errors
    /// `DomainError::StorageUnavailable` when no connection can be obtained,
    /// `DomainError::InfrastructureError` for any other database failure
    /// (including the `quantity_kg` check constraint).
    #[instrument(skip(self, quote), fields(city = %quote.city, state = %quote.state))]
    async fn create(&self, quote: &NewLeadQuote) -> Result<LeadQuote, DomainError> {
        let id = Uuid::now_v7();
        debug!("Inserting price quote {}", id);

        let row = sqlx::query_as::<_, LeadQuote>(
            r#"INSERT INTO bulk_chai_price_quotes
                   (id, name, email, phone, company_name, city, state,
                    quantity_kg, estimated_amount, message, source_page)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
               RETURNING id, created_at, updated_at, name, email, phone, company_name,
                         city, state, quantity_kg, estimated_amount, message, source_page,
                         resolved, resolved_at, resolved_by, notes"#,
        )
        .bind(id)
        .bind(&quote.name)
        .bind(&quote.email)
        .bind(&quote.phone)
        .bind(&quote.company_name)
        .bind(&quote.city)
        .bind(&quote.state)
        .bind(quote.quantity_kg)
        .bind(quote.estimated_amount)
        .bind(&quote.message)
        .bind(&quote.source_page)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to insert price quote", e))?;

        info!("Stored price quote {}", row.id);
        Ok(row)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| map_sqlx_error("Lead store health check failed", e))
    }
}
