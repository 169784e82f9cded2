//! Row models for the `expenses` and `budgets` tables.

pub mod budget;
pub mod expense;
