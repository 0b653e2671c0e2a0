mod helpers;
mod test_generator;
mod test_locations_api;
mod test_pages;
mod test_quotes;
