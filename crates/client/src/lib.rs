//! Dashboard client for the finance API.
//!
//! [`api::FinanceApi`] wraps the HTTP endpoints, [`state::Dashboard`] holds
//! what has been loaded, and [`view`] / [`render`] turn it into something to
//! show.

pub mod api;
pub mod form;
pub mod models;
pub mod render;
pub mod state;
pub mod view;
