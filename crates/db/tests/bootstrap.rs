use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    finboard_db::health_check(&pool).await.unwrap();

    for table in ["expenses", "budgets"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Migrations are idempotent when re-applied to an up-to-date database.
#[sqlx::test(migrations = "./migrations")]
async fn test_rerun_migrations_is_noop(pool: PgPool) {
    finboard_db::run_migrations(&pool).await.unwrap();
}
