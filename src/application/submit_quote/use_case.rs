use crate::{
    application::submit_quote::dto::{ContactFields, SubmitQuoteRequest},
    domain::{
        quote::{NewLeadQuote, QuoteRepository, non_blank},
        shared::errors::DomainError,
    },
    infrastructure::verification::BotVerifier,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const BELOW_MINIMUM: &str = "Minimum quantity is 50kg";
pub const INVALID_QUANTITY: &str = "Quantity must be a whole number of kilograms";
pub const VERIFICATION_FAILED: &str = "Bot verification failed";
pub const VERIFICATION_REQUIRED: &str = "Bot verification required";

/// Validates a quote-form submission, checks the bot token and stores the lead.
///
/// Checks run in a fixed order and the first failure is returned:
/// 1. required fields present (`name`, `email`, `city`, `state`, `quantity_kg`)
/// 2. quantity is a whole number of at least [`MIN_ORDER_KG`](crate::domain::quote::MIN_ORDER_KG)
/// 3. field formats (email address, lengths)
/// 4. bot verification, when a token is supplied or verification is required
///
/// Nothing is retried; a storage failure is returned to the caller as-is.
pub struct SubmitQuoteUseCase {
    repository: Arc<dyn QuoteRepository>,
    verifier: Arc<dyn BotVerifier>,
    verification_required: bool,
}

impl SubmitQuoteUseCase {
    pub fn new(
        repository: Arc<dyn QuoteRepository>,
        verifier: Arc<dyn BotVerifier>,
        verification_required: bool,
    ) -> Self {
        Self {
            repository,
            verifier,
            verification_required,
        }
    }

    /// Runs the submission and returns the stored lead's identifier.
    ///
    /// # Errors
    /// - `DomainError::ValidationError` for missing or malformed fields
    /// - `DomainError::VerificationFailed` for a rejected or missing bot token
    /// - whatever the repository returns when the insert fails
    #[instrument(skip(self, request, client_ip), fields(city = ?request.city, state = ?request.state))]
    pub async fn execute(
        &self,
        request: SubmitQuoteRequest,
        client_ip: Option<String>,
    ) -> Result<Uuid, DomainError> {
        let quote = Self::validate(&request)?;

        match non_blank(request.turnstile_token) {
            Some(token) => {
                let verified = self
                    .verifier
                    .verify(&token, client_ip)
                    .await
                    .unwrap_or_else(|e| {
                        warn!("Bot verification call failed: {:#}", e);
                        false
                    });
                if !verified {
                    warn!("Rejecting quote submission: bot verification failed");
                    return Err(DomainError::VerificationFailed(VERIFICATION_FAILED.into()));
                }
                debug!("Bot verification passed");
            }
            None if self.verification_required => {
                warn!("Rejecting quote submission: verification token missing");
                return Err(DomainError::VerificationFailed(
                    VERIFICATION_REQUIRED.into(),
                ));
            }
            None => {}
        }

        let stored = self.repository.create(&quote).await?;
        info!(id = %stored.id, quantity_kg = stored.quantity_kg, "Quote request stored");
        Ok(stored.id)
    }

    fn validate(request: &SubmitQuoteRequest) -> Result<NewLeadQuote, DomainError> {
        let required = |v: &Option<String>| non_blank(v.clone());

        let (Some(name), Some(email), Some(city), Some(state), Some(quantity)) = (
            required(&request.name),
            required(&request.email),
            required(&request.city),
            required(&request.state),
            request.quantity_kg,
        ) else {
            return Err(DomainError::ValidationError(MISSING_FIELDS.into()));
        };

        if !quantity.is_finite()
            || quantity.fract() != 0.0
            || quantity < 0.0
            || quantity > f64::from(i32::MAX)
        {
            return Err(DomainError::ValidationError(INVALID_QUANTITY.into()));
        }

        let quote = NewLeadQuote {
            name,
            email,
            phone: non_blank(request.phone.clone()),
            company_name: non_blank(request.company_name.clone()),
            city,
            state,
            quantity_kg: quantity as i32,
            estimated_amount: request
                .estimated_amount
                .filter(|a| a.is_finite() && *a >= 0.0),
            message: non_blank(request.message.clone()),
            source_page: non_blank(request.source_page.clone()),
        };
        if !quote.meets_minimum_order() {
            return Err(DomainError::ValidationError(BELOW_MINIMUM.into()));
        }

        ContactFields {
            name: &quote.name,
            email: &quote.email,
            phone: quote.phone.as_deref(),
            message: quote.message.as_deref(),
        }
        .validate()
        .map_err(|e| DomainError::ValidationError(first_message(&e)))?;

        Ok(quote)
    }
}

fn first_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".into())
}
