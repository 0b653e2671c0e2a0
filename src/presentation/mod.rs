pub mod http;
pub mod site;
