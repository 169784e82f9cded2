//! Presentation models derived from API data.
//!
//! Nothing here talks to the network; each builder is a pure function of the
//! records it is given.

use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

use crate::models::{Expense, MonthlyAmount, Summary};

/// Shown in place of the table when there are no expenses.
pub const EMPTY_EXPENSES_MESSAGE: &str = "No expenses yet. Add your first expense!";

/// Pie slice colors, applied to categories in order.
pub const CATEGORY_PALETTE: [&str; 7] = [
    "#10b981", "#3b82f6", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#6366f1",
];

pub const TREND_LABEL: &str = "Monthly Spending";
pub const TREND_BORDER_COLOR: &str = "#3b82f6";
pub const TREND_FILL_COLOR: &str = "rgba(59, 130, 246, 0.1)";

/// `$x.xx`. Non-finite values print as-is, so `NaN` becomes `$NaN`.
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Render a stored timestamp as a local calendar date.
pub fn format_local_date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Category badges
// ---------------------------------------------------------------------------

/// Badge color for a category. Unknown categories use [`BadgeColor::Slate`],
/// the style of `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Green,
    Blue,
    Purple,
    Yellow,
    Red,
    Pink,
    Slate,
}

impl BadgeColor {
    pub fn for_category(category: &str) -> Self {
        match category {
            "Food" => Self::Green,
            "Transport" => Self::Blue,
            "Entertainment" => Self::Purple,
            "Utilities" => Self::Yellow,
            "Healthcare" => Self::Red,
            "Shopping" => Self::Pink,
            _ => Self::Slate,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Green => "bg-green-900 text-green-100",
            Self::Blue => "bg-blue-900 text-blue-100",
            Self::Purple => "bg-purple-900 text-purple-100",
            Self::Yellow => "bg-yellow-900 text-yellow-100",
            Self::Red => "bg-red-900 text-red-100",
            Self::Pink => "bg-pink-900 text-pink-100",
            Self::Slate => "bg-slate-900 text-slate-100",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Slate => "slate",
        }
    }
}

// ---------------------------------------------------------------------------
// Expense table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: Uuid,
    pub description: String,
    pub notes: Option<String>,
    pub category: String,
    pub badge: BadgeColor,
    pub amount: String,
    pub date: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(e: &Expense) -> Self {
        Self {
            id: e.id,
            description: e.description.clone(),
            notes: e.notes.clone().filter(|n| !n.is_empty()),
            category: e.category.clone(),
            badge: BadgeColor::for_category(&e.category),
            amount: format_currency(e.amount),
            date: format_local_date(&e.date),
        }
    }
}

pub fn expense_rows(expenses: &[Expense]) -> Vec<ExpenseRow> {
    expenses.iter().map(ExpenseRow::from).collect()
}

// ---------------------------------------------------------------------------
// Summary cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    pub total: String,
    pub month: String,
    pub transactions: String,
    pub average: String,
}

impl From<&Summary> for SummaryCards {
    fn from(s: &Summary) -> Self {
        // Division by a zero count is intentional: an empty month shows $NaN.
        let average = s.total / s.transaction_count as f64;
        Self {
            total: format_currency(s.total),
            month: s.month.clone(),
            transactions: s.transaction_count.to_string(),
            average: format_currency(average),
        }
    }
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

/// Spending-by-category pie, built from the summary breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

impl From<&Summary> for PieChart {
    fn from(s: &Summary) -> Self {
        let labels: Vec<String> = s.by_category.keys().cloned().collect();
        let values = s.by_category.values().copied().collect();
        let colors = CATEGORY_PALETTE
            .iter()
            .cycle()
            .take(labels.len())
            .copied()
            .collect();
        Self {
            labels,
            values,
            colors,
        }
    }
}

/// Monthly spending line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub label: &'static str,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub fill_color: &'static str,
}

impl From<&[MonthlyAmount]> for LineChart {
    fn from(trend: &[MonthlyAmount]) -> Self {
        Self {
            label: TREND_LABEL,
            labels: trend.iter().map(|p| p.month.clone()).collect(),
            data: trend.iter().map(|p| p.amount).collect(),
            border_color: TREND_BORDER_COLOR,
            fill_color: TREND_FILL_COLOR,
        }
    }
}
