//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Handlers
//! validate input with `finboard_core`, delegate to the corresponding
//! repository in `finboard_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod analytics;
pub mod budgets;
pub mod expenses;
pub mod service;
