//! Integration tests for the expense repository.
//!
//! Exercises the repository layer against a real database:
//! - Create with and without an explicit date
//! - Category filter and newest-first ordering
//! - Replace and delete, including missing ids
//! - Month-window and chronological reads used by analytics

use chrono::{Duration, TimeZone, Utc};
use finboard_core::expense::NewExpense;
use finboard_db::repositories::ExpenseRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_expense(description: &str, amount: f64, category: &str) -> NewExpense {
    NewExpense {
        description: description.to_string(),
        amount,
        category: category.to_string(),
        date: None,
        notes: None,
    }
}

fn dated(description: &str, amount: f64, category: &str, y: i32, m: u32, d: u32) -> NewExpense {
    NewExpense {
        date: Some(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()),
        ..new_expense(description, amount, category)
    }
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_defaults_date_to_now(pool: PgPool) {
    let before = Utc::now() - Duration::seconds(5);
    let created = ExpenseRepo::create(&pool, &new_expense("Coffee", 3.2, "Food"))
        .await
        .unwrap();

    assert_eq!(created.description, "Coffee");
    assert_eq!(created.amount, 3.2);
    assert_eq!(created.category, "Food");
    assert!(created.notes.is_none());
    assert!(created.date >= before);

    let all = ExpenseRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_keeps_explicit_date_and_notes(pool: PgPool) {
    let mut input = dated("Rent", 900.0, "Utilities", 2023, 7, 1);
    input.notes = Some("July".into());
    let created = ExpenseRepo::create(&pool, &input).await.unwrap();

    assert_eq!(created.date, input.date.unwrap());
    assert_eq!(created.notes.as_deref(), Some("July"));
}

#[sqlx::test(migrations = "./migrations")]
async fn list_is_newest_first(pool: PgPool) {
    ExpenseRepo::create(&pool, &dated("Old", 1.0, "Food", 2023, 1, 1)).await.unwrap();
    ExpenseRepo::create(&pool, &dated("New", 2.0, "Food", 2023, 3, 1)).await.unwrap();
    ExpenseRepo::create(&pool, &dated("Mid", 3.0, "Food", 2023, 2, 1)).await.unwrap();

    let names: Vec<_> = ExpenseRepo::list(&pool, None)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.description)
        .collect();
    assert_eq!(names, ["New", "Mid", "Old"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_filters_by_exact_category(pool: PgPool) {
    ExpenseRepo::create(&pool, &new_expense("Bus", 2.0, "Transport")).await.unwrap();
    ExpenseRepo::create(&pool, &new_expense("Lunch", 9.0, "Food")).await.unwrap();
    ExpenseRepo::create(&pool, &new_expense("Snack", 1.5, "food")).await.unwrap();

    let food = ExpenseRepo::list(&pool, Some("Food")).await.unwrap();
    assert_eq!(food.len(), 1);
    assert_eq!(food[0].description, "Lunch");

    let none = ExpenseRepo::list(&pool, Some("Travel")).await.unwrap();
    assert!(none.is_empty());
}

// ---------------------------------------------------------------------------
// Replace / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn replace_overwrites_fields_and_keeps_date(pool: PgPool) {
    let mut input = dated("Taxi", 20.0, "Transport", 2023, 5, 5);
    input.notes = Some("airport".into());
    let created = ExpenseRepo::create(&pool, &input).await.unwrap();

    let updated = ExpenseRepo::replace(&pool, created.id, &new_expense("Train", 12.0, "Transport"))
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.description, "Train");
    assert_eq!(updated.amount, 12.0);
    assert_eq!(updated.date, created.date);
    assert!(updated.notes.is_none());
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn replace_missing_returns_none(pool: PgPool) {
    let result = ExpenseRepo::replace(&pool, uuid::Uuid::new_v4(), &new_expense("X", 1.0, "Other"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_row_once(pool: PgPool) {
    let created = ExpenseRepo::create(&pool, &new_expense("Gym", 30.0, "Healthcare"))
        .await
        .unwrap();

    assert!(ExpenseRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ExpenseRepo::delete(&pool, created.id).await.unwrap());
    assert!(ExpenseRepo::list(&pool, None).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_description_violates_check(pool: PgPool) {
    let result = ExpenseRepo::create(&pool, &new_expense("", 1.0, "Other")).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Analytics reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_between_is_half_open(pool: PgPool) {
    ExpenseRepo::create(&pool, &dated("Last day", 1.0, "Food", 2024, 1, 31)).await.unwrap();
    ExpenseRepo::create(&pool, &dated("First day", 2.0, "Food", 2024, 2, 1)).await.unwrap();
    let mut at_end = new_expense("Next month", 4.0, "Food");
    at_end.date = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    ExpenseRepo::create(&pool, &at_end).await.unwrap();

    let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let february = ExpenseRepo::list_between(&pool, start, end).await.unwrap();

    assert_eq!(february.len(), 1);
    assert_eq!(february[0].description, "First day");
}

#[sqlx::test(migrations = "./migrations")]
async fn list_chronological_is_oldest_first(pool: PgPool) {
    ExpenseRepo::create(&pool, &dated("B", 1.0, "Food", 2023, 6, 1)).await.unwrap();
    ExpenseRepo::create(&pool, &dated("A", 1.0, "Food", 2023, 4, 1)).await.unwrap();

    let names: Vec<_> = ExpenseRepo::list_chronological(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.description)
        .collect();
    assert_eq!(names, ["A", "B"]);
}
