use super::entity::{LeadQuote, NewLeadQuote};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn create(&self, quote: &NewLeadQuote) -> Result<LeadQuote, DomainError>;

    /// Cheap connectivity probe used by the health endpoint.
    async fn ping(&self) -> Result<(), DomainError>;
}
