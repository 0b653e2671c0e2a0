pub mod entity;
pub mod freight;
pub mod repository;

pub use entity::{LeadQuote, MIN_ORDER_KG, NewLeadQuote, non_blank};
pub use freight::{FREIGHT_LADDER_KG, FreightEstimate, format_inr};
pub use repository::QuoteRepository;
