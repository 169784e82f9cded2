//! Dashboard state and the fetch/refetch flow that keeps it current.
//!
//! Every step is a sequential await. A failed request is logged and leaves
//! whatever was loaded before untouched.

use uuid::Uuid;

use crate::api::FinanceApi;
use crate::models::{Expense, ExpensePayload, MonthlyAmount, Summary};
use crate::view::{LineChart, PieChart};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Expenses,
}

#[derive(Debug)]
pub struct Dashboard {
    api: FinanceApi,
    pub tab: Tab,
    pub loading: bool,
    pub expenses: Vec<Expense>,
    pub summary: Option<Summary>,
    pub trend: Vec<MonthlyAmount>,
    pub category_chart: Option<PieChart>,
    pub trend_chart: Option<LineChart>,
}

impl Dashboard {
    pub fn new(api: FinanceApi) -> Self {
        Self {
            api,
            tab: Tab::default(),
            loading: true,
            expenses: Vec::new(),
            summary: None,
            trend: Vec::new(),
            category_chart: None,
            trend_chart: None,
        }
    }

    pub fn api(&self) -> &FinanceApi {
        &self.api
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Startup load: the expense list, the summary, then the charts.
    pub async fn load(&mut self) {
        self.fetch_expenses().await;
        self.fetch_summary().await;
        self.refresh_analytics().await;
    }

    pub async fn fetch_expenses(&mut self) {
        self.loading = true;
        match self.api.list_expenses(None).await {
            Ok(expenses) => self.expenses = expenses,
            Err(e) => tracing::error!(error = %e, "Error fetching expenses"),
        }
        self.loading = false;
    }

    pub async fn fetch_summary(&mut self) {
        match self.api.summary().await {
            Ok(summary) => self.summary = Some(summary),
            Err(e) => tracing::error!(error = %e, "Error fetching summary"),
        }
    }

    /// Rebuild both charts: the trend from a fresh fetch, the category pie
    /// from the summary already held.
    pub async fn refresh_analytics(&mut self) {
        match self.api.monthly_trend().await {
            Ok(trend) => {
                self.trend_chart = Some(LineChart::from(trend.as_slice()));
                self.trend = trend;
            }
            Err(e) => tracing::error!(error = %e, "Error fetching trend"),
        }

        if let Some(summary) = &self.summary {
            self.category_chart = Some(PieChart::from(summary));
        }
    }

    /// Create an expense and put it at the top of the list. Returns the
    /// created record, or `None` if the request failed.
    pub async fn add_expense(&mut self, payload: &ExpensePayload) -> Option<Expense> {
        let created = match self.api.create_expense(payload).await {
            Ok(expense) => expense,
            Err(e) => {
                tracing::error!(error = %e, "Error adding expense");
                return None;
            }
        };

        tracing::info!(expense_id = %created.id, "Expense added");
        self.expenses.insert(0, created.clone());
        self.after_expenses_changed().await;
        Some(created)
    }

    /// Delete an expense and drop it from the list. Returns whether the
    /// server confirmed the delete.
    pub async fn delete_expense(&mut self, id: Uuid) -> bool {
        if let Err(e) = self.api.delete_expense(id).await {
            tracing::error!(error = %e, expense_id = %id, "Error deleting expense");
            return false;
        }

        tracing::info!(expense_id = %id, "Expense deleted");
        self.expenses.retain(|e| e.id != id);
        self.after_expenses_changed().await;
        true
    }

    async fn after_expenses_changed(&mut self) {
        self.fetch_summary().await;
        self.refresh_analytics().await;
    }
}
