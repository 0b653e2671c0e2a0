pub mod freight;
pub mod health;
pub mod locations;
pub mod pages;
pub mod quotes;
pub mod seo;
