//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod admin;
pub mod create;
pub mod health;
pub mod redirect;
pub mod resolve;

pub use admin::{deactivate_handler, delete_short_url_handler, list_short_urls_handler};
pub use create::create_short_url_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use resolve::get_long_url_handler;
