//! Domain layer for the finance dashboard.
//!
//! Record input types, explicit validation, and the pure monthly analytics
//! aggregation. This crate has no database dependencies; callers pass data in.

pub mod analytics;
pub mod budget;
pub mod error;
pub mod expense;
pub mod types;
pub mod validation;
