//! Domain layer containing business entities and contracts.
//!
//! Defines entities and the traits the application layer depends on,
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`id_generator`] - Identifier generation trait
//! - [`analytics`] - Analytics event model and sink trait
//! - [`analytics_worker`] - Asynchronous analytics event consumer
//!
//! # Analytics Flow
//!
//! 1. The lifecycle service builds an [`analytics::AnalyticsEvent`]
//! 2. The event is pushed into a bounded channel (non-blocking)
//! 3. [`analytics_worker::run_analytics_worker`] drains and logs it

pub mod analytics;
pub mod analytics_worker;
pub mod entities;
pub mod id_generator;
pub mod repositories;
