//! Data Transfer Objects specific to the HTTP layer.
//!
//! Request and response bodies for the short URL use cases live in
//! [`crate::application::dto`]; this module holds query parameters and the
//! health report.

pub mod health;
pub mod params;
