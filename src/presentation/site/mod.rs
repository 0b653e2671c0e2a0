pub mod city_template;
pub mod components;
pub mod layout;
pub mod metadata;
pub mod pages;
pub mod sitemap;
pub mod structured_data;

pub use city_template::{CityTemplate, CityTemplates, TemplateError};
pub use metadata::{FooterLink, FooterLocations, PageMeta, SiteMetadata};
