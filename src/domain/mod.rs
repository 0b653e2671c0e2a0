pub mod location;
pub mod quote;
pub mod shared;
