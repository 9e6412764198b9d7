use anyhow::{Context, Result};
use shared::config::ConnectionPool;
use tracing::info;

/// Creates the schema on startup. Every statement is idempotent so the
/// same database file can be reused across restarts.
pub async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            price INTEGER NOT NULL,
            available_quantity INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create product table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "order" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            status TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create order table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS orderitem (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id INTEGER NOT NULL REFERENCES "order"(id),
            product_id INTEGER NOT NULL REFERENCES product(id),
            ordered_quantity INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create orderitem table")?;

    info!("✅ Database schema ready");
    Ok(())
}
