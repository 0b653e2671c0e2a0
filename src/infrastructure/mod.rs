pub mod database;
pub mod dataset;
pub mod repositories;
pub mod verification;
