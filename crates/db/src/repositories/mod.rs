//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod budget_repo;
pub mod expense_repo;

pub use budget_repo::BudgetRepo;
pub use expense_repo::ExpenseRepo;
