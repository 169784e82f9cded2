//! The "Add Expense" form.

use chrono::{Local, NaiveDate};
use finboard_core::expense::SUGGESTED_CATEGORIES;

use crate::models::ExpensePayload;

pub const DEFAULT_CATEGORY: &str = "Other";

/// Why a submission was refused before reaching the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in description and amount")]
    MissingRequired,

    #[error("Amount '{0}' is not a number")]
    InvalidAmount(String),
}

/// Editable form state. `amount` holds the raw text as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub category: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub notes: String,
}

impl ExpenseForm {
    /// A blank form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            date: today.format("%Y-%m-%d").to_string(),
            notes: String::new(),
        }
    }

    /// Categories offered by the category picker.
    pub fn categories() -> &'static [&'static str] {
        SUGGESTED_CATEGORIES
    }

    /// Build the request body. Only description and amount are checked here;
    /// everything else is left to the server.
    pub fn to_payload(&self) -> Result<ExpensePayload, FormError> {
        if self.description.is_empty() || self.amount.is_empty() {
            return Err(FormError::MissingRequired);
        }
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| FormError::InvalidAmount(self.amount.clone()))?;

        Ok(ExpensePayload {
            description: self.description.clone(),
            amount,
            category: self.category.clone(),
            date: Some(self.date.clone()).filter(|d| !d.is_empty()),
            notes: Some(self.notes.clone()).filter(|n| !n.is_empty()),
        })
    }

    /// Validate and hand back the payload, resetting the form to defaults.
    /// On error the form is left as typed.
    pub fn submit(&mut self, today: NaiveDate) -> Result<ExpensePayload, FormError> {
        let payload = self.to_payload()?;
        *self = Self::new(today);
        Ok(payload)
    }
}

/// The calendar day on this machine's clock, in its local timezone.
///
/// A bare `YYYY-MM-DD` sent to the server is read as local midnight there, so
/// client and server agree on the month when they share a timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A blank form dated [`today`], the local calendar day rather than the UTC one.
impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new(today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn new_form_has_defaults() {
        let form = ExpenseForm::new(day());
        assert_eq!(form.category, "Other");
        assert_eq!(form.date, "2024-06-15");
        assert!(form.description.is_empty());
        assert!(form.amount.is_empty());
    }

    #[test]
    fn default_form_is_dated_the_local_day() {
        let before = Local::now().date_naive();
        let form = ExpenseForm::default();
        let after = Local::now().date_naive();

        let dated = NaiveDate::parse_from_str(&form.date, "%Y-%m-%d").unwrap();
        assert!(dated == before || dated == after);
    }

    #[test]
    fn missing_description_or_amount_is_refused() {
        let mut form = ExpenseForm::new(day());
        form.amount = "12".into();
        assert_matches!(form.to_payload(), Err(FormError::MissingRequired));

        form.description = "Lunch".into();
        form.amount.clear();
        assert_matches!(form.to_payload(), Err(FormError::MissingRequired));
    }

    #[test]
    fn non_numeric_amount_is_refused() {
        let mut form = ExpenseForm::new(day());
        form.description = "Lunch".into();
        form.amount = "twelve".into();
        assert_matches!(form.to_payload(), Err(FormError::InvalidAmount(a)) if a == "twelve");
    }

    #[test]
    fn submit_builds_payload_and_resets() {
        let mut form = ExpenseForm::new(day());
        form.description = "Lunch".into();
        form.amount = "12.40".into();
        form.category = "Food".into();
        form.notes = "with Sam".into();

        let next_day = day().succ_opt().unwrap();
        let payload = form.submit(next_day).unwrap();

        assert_eq!(payload.description, "Lunch");
        assert_eq!(payload.amount, 12.4);
        assert_eq!(payload.category, "Food");
        assert_eq!(payload.date.as_deref(), Some("2024-06-15"));
        assert_eq!(payload.notes.as_deref(), Some("with Sam"));
        assert_eq!(form, ExpenseForm::new(next_day));
    }

    #[test]
    fn failed_submit_keeps_input() {
        let mut form = ExpenseForm::new(day());
        form.description = "Lunch".into();
        let before = form.clone();

        assert!(form.submit(day()).is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn empty_notes_are_omitted() {
        let mut form = ExpenseForm::new(day());
        form.description = "Bus".into();
        form.amount = "2".into();
        assert_eq!(form.to_payload().unwrap().notes, None);
    }
}
