//! `finboard`, the dashboard client for the Finance Dashboard API.
//!
//! Renders the dashboard or expense table to stdout, and adds or deletes
//! expenses through the same state the dashboard view uses.

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use finboard_client::api::FinanceApi;
use finboard_client::form::{today, ExpenseForm};
use finboard_client::render::{render_dashboard, render_table};
use finboard_client::state::{Dashboard, Tab};
use finboard_client::view::expense_rows;

/// Finance dashboard client.
#[derive(Parser, Debug)]
#[command(name = "finboard", version, about = "Finance dashboard client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summary cards, category split and monthly trend.
    Dashboard,

    /// Table of expenses, newest first.
    Expenses {
        /// Exact-match category filter.
        category: Option<String>,
    },

    /// Record an expense, then show the expense list.
    Add {
        description: String,
        /// Amount as typed; validated before sending.
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Defaults to "Other".
        #[arg(long, short)]
        category: Option<String>,
        /// `YYYY-MM-DD`, defaults to today.
        #[arg(long, short)]
        date: Option<String>,
        #[arg(long, short)]
        notes: Option<String>,
    },

    /// Delete an expense by id.
    Delete { id: Uuid },
}

impl Command {
    /// Fill a form the way the dashboard's "Add Expense" dialog would.
    fn expense_form(
        description: String,
        amount: String,
        category: Option<String>,
        date: Option<String>,
        notes: Option<String>,
    ) -> ExpenseForm {
        let mut form = ExpenseForm::default();
        form.description = description;
        form.amount = amount;
        if let Some(category) = category {
            form.category = category;
        }
        if let Some(date) = date {
            form.date = date;
        }
        if let Some(notes) = notes {
            form.notes = notes;
        }
        form
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finboard=info,finboard_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = Cli::parse().command.unwrap_or(Command::Dashboard);

    let api = FinanceApi::from_env();
    tracing::debug!(api_url = %api.api_url(), ?command, "Running command");

    match command {
        Command::Dashboard => {
            let mut dashboard = Dashboard::new(api);
            dashboard.load().await;
            print!("{}", render_dashboard(&dashboard));
        }
        Command::Expenses { category } => {
            let expenses = api.list_expenses(category.as_deref()).await?;
            print!("{}", render_table(&expense_rows(&expenses)));
        }
        Command::Add {
            description,
            amount,
            category,
            date,
            notes,
        } => {
            let mut form = Command::expense_form(description, amount, category, date, notes);
            let payload = form.submit(today())?;
            let mut dashboard = Dashboard::new(api);
            dashboard.load().await;
            if dashboard.add_expense(&payload).await.is_none() {
                bail!("expense was not saved");
            }
            dashboard.select_tab(Tab::Expenses);
            print!("{}", render_dashboard(&dashboard));
        }
        Command::Delete { id } => {
            let mut dashboard = Dashboard::new(api);
            dashboard.load().await;
            if !dashboard.delete_expense(id).await {
                bail!("expense {id} was not deleted");
            }
            dashboard.select_tab(Tab::Expenses);
            print!("{}", render_dashboard(&dashboard));
        }
    }

    Ok(())
}
