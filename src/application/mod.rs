pub mod generate_pages;
pub mod submit_quote;
