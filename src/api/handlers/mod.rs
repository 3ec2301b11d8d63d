//! REST API request handlers.

mod health;
mod qr;
mod redirect;
mod shorten;
mod stats;
mod urls;

pub use health::{api_health_handler, health_handler};
pub use qr::qr_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::{overall_stats_handler, stats_handler};
pub use urls::delete_url_handler;
