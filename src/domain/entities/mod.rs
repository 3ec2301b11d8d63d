//! Core business entities.

mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
