//! Monthly spending analytics.
//!
//! Pure aggregation over expenses supplied by the caller: the current-month
//! summary, the per-category breakdown, and the per-month trend. Nothing is
//! cached; callers recompute on every request.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// The fields of an expense that aggregation looks at.
pub trait Spending {
    fn category(&self) -> &str;
    fn amount(&self) -> f64;
    fn date(&self) -> Timestamp;
}

// ---------------------------------------------------------------------------
// Month keys and windows
// ---------------------------------------------------------------------------

/// `YYYY-MM` key for the calendar month containing `at`, in `at`'s timezone.
pub fn month_key<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!("{:04}-{:02}", at.year(), at.month())
}

/// Whether `s` is a well-formed `YYYY-MM` month key.
pub fn is_month_key(s: &str) -> bool {
    s.len() == 7
        && s.as_bytes()[4] == b'-'
        && NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").is_ok()
}

/// Half-open UTC range `[start, end)` covering one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    pub key: String,
    pub start: Timestamp,
    pub end: Timestamp,
}

/// The calendar month containing `now`, with month boundaries taken at local
/// midnight in `now`'s timezone.
pub fn month_window<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<MonthWindow, CoreError> {
    let first = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .ok_or_else(|| CoreError::Internal(format!("no first day for {}", month_key(now))))?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| CoreError::Internal(format!("month after {first} out of range")))?;

    let tz = now.timezone();
    Ok(MonthWindow {
        key: month_key(now),
        start: local_midnight(&tz, first)?,
        end: local_midnight(&tz, next)?,
    })
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> Result<Timestamp, CoreError> {
    let naive = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| CoreError::Internal(format!("no midnight on {day}")))?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| CoreError::Internal(format!("midnight on {day} does not exist locally")))
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Current-month aggregate returned by `GET /api/analytics/summary`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub month: String,
    pub total: f64,
    pub transaction_count: usize,
    /// Category to running sum, in first-encounter order.
    pub by_category: IndexMap<String, f64>,
}

/// One slice of the category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAmount {
    pub name: String,
    pub value: f64,
}

/// One point of the monthly trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAmount {
    pub month: String,
    pub amount: f64,
}

/// Sum the expenses of one month. The caller has already restricted
/// `expenses` to that month.
pub fn summarize<E: Spending>(month: &str, expenses: &[E]) -> MonthSummary {
    let mut total = 0.0;
    let mut by_category: IndexMap<String, f64> = IndexMap::new();

    for e in expenses {
        total += e.amount();
        *by_category.entry(e.category().to_string()).or_insert(0.0) += e.amount();
    }

    MonthSummary {
        month: month.to_string(),
        total,
        transaction_count: expenses.len(),
        by_category,
    }
}

/// Reshape a summary's breakdown into `{name, value}` pairs, keeping
/// first-encounter order.
pub fn category_breakdown(summary: &MonthSummary) -> Vec<CategoryAmount> {
    summary
        .by_category
        .iter()
        .map(|(name, value)| CategoryAmount {
            name: name.clone(),
            value: *value,
        })
        .collect()
}

/// Group expenses by calendar month (in `tz`) and sum each group.
///
/// Groups appear in the order first encountered, so passing expenses sorted
/// ascending by date yields a chronological series.
pub fn monthly_trend<E: Spending, Tz: TimeZone>(expenses: &[E], tz: &Tz) -> Vec<MonthlyAmount> {
    let mut trend: IndexMap<String, f64> = IndexMap::new();

    for e in expenses {
        let key = month_key(&e.date().with_timezone(tz));
        *trend.entry(key).or_insert(0.0) += e.amount();
    }

    trend
        .into_iter()
        .map(|(month, amount)| MonthlyAmount { month, amount })
        .collect()
}
