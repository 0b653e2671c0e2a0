use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Smallest order accepted by the lead form, in kilograms.
pub const MIN_ORDER_KG: i32 = 50;

/// A stored price-quote request.
///
/// Rows are created by the quote form and afterwards only touched by
/// back-office staff, who fill in the resolution fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct LeadQuote {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,

    /// Free text copied from the page the form was submitted on.
    pub city: String,
    pub state: String,

    pub quantity_kg: i32,
    pub estimated_amount: Option<f64>,
    pub message: Option<String>,
    pub source_page: Option<String>,

    pub resolved: bool,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<String>,
    pub notes: Option<String>,
}

/// Validated form input ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLeadQuote {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub city: String,
    pub state: String,
    pub quantity_kg: i32,
    pub estimated_amount: Option<f64>,
    pub message: Option<String>,
    pub source_page: Option<String>,
}

impl NewLeadQuote {
    pub fn meets_minimum_order(&self) -> bool {
        self.quantity_kg >= MIN_ORDER_KG
    }
}

/// Trims an optional form field, mapping blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
