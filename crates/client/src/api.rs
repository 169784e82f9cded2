//! REST client for the finance dashboard API.
//!
//! One method per endpoint, built on [`reqwest`]. Calls are plain awaits:
//! no retry, no timeout, no cancellation.

use uuid::Uuid;

use crate::models::{
    Budget, BudgetPayload, CategoryAmount, Expense, ExpensePayload, Message, MonthlyAmount,
    Summary,
};

/// Base URL used when `FINBOARD_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// HTTP client for one API server.
#[derive(Debug, Clone)]
pub struct FinanceApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, normally `{"error": "..."}`.
        body: String,
    },
}

impl FinanceApi {
    /// Create a client for the server at `api_url`, e.g. `http://host:5000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Create a client from `FINBOARD_API_URL`, falling back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        let url = std::env::var("FINBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self::new(url)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ---- expenses ----

    /// `GET /api/expenses`, optionally filtered by category.
    pub async fn list_expenses(&self, category: Option<&str>) -> Result<Vec<Expense>, ApiError> {
        let mut request = self.client.get(self.url("/api/expenses"));
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }

        Self::parse_response(request.send().await?).await
    }

    pub async fn create_expense(&self, payload: &ExpensePayload) -> Result<Expense, ApiError> {
        let response = self
            .client
            .post(self.url("/api/expenses"))
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn update_expense(
        &self,
        id: Uuid,
        payload: &ExpensePayload,
    ) -> Result<Expense, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/api/expenses/{id}")))
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn delete_expense(&self, id: Uuid) -> Result<Message, ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/expenses/{id}")))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- budgets ----

    pub async fn list_budgets(&self) -> Result<Vec<Budget>, ApiError> {
        let response = self.client.get(self.url("/api/budgets")).send().await?;

        Self::parse_response(response).await
    }

    pub async fn create_budget(&self, payload: &BudgetPayload) -> Result<Budget, ApiError> {
        let response = self
            .client
            .post(self.url("/api/budgets"))
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn update_budget(&self, id: Uuid, payload: &BudgetPayload) -> Result<Budget, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/api/budgets/{id}")))
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- analytics ----

    pub async fn summary(&self) -> Result<Summary, ApiError> {
        let response = self
            .client
            .get(self.url("/api/analytics/summary"))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn by_category(&self) -> Result<Vec<CategoryAmount>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/analytics/by-category"))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn monthly_trend(&self) -> Result<Vec<MonthlyAmount>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/analytics/monthly-trend"))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Return the response unchanged on a 2xx status, or an
    /// [`ApiError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
