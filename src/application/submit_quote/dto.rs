use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// JSON body posted by the quote form.
///
/// Every field is optional at the wire level so that a missing field yields
/// the form's own "Missing required fields" message instead of a
/// deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmitQuoteRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub quantity_kg: Option<f64>,
    pub estimated_amount: Option<f64>,
    pub message: Option<String>,
    pub source_page: Option<String>,
    pub turnstile_token: Option<String>,
}

/// Field-level checks run once all required fields are known to be present.
#[derive(Debug, Validate)]
pub(crate) struct ContactFields<'a> {
    #[validate(length(max = 200, message = "Name is too long"))]
    pub name: &'a str,

    #[validate(email(message = "Invalid email address"))]
    pub email: &'a str,

    #[validate(length(max = 30, message = "Phone number is too long"))]
    pub phone: Option<&'a str>,

    #[validate(length(max = 5000, message = "Message is too long"))]
    pub message: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubmitQuoteResponse {
    pub success: bool,
    pub id: Uuid,
}
