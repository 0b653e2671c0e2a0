pub mod dataset;
pub mod entity;
pub mod faq;
pub mod slug;

pub use dataset::{
    DEFAULT_RELATED_COUNT, DatasetError, LocationDataset, SEARCH_RESULT_LIMIT, StateGroup,
};
pub use entity::{GeoPoint, INDIA_CENTER, LocationEntry, LocationSlugs};
pub use faq::{FaqItem, default_faqs};
pub use slug::slugify;
