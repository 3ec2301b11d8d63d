//! Request and response types for the REST API.

pub mod health;
pub mod qr;
pub mod shorten;
pub mod stats;
pub mod urls;
