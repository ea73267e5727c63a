use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::errors::Result;

use super::schema;

pub async fn get_db_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    // sqlx::query runs one statement at a time
    for stmt in schema::statements() {
        sqlx::query(stmt).execute(&pool).await?;
    }

    info!("Connected to database, schema ready");
    Ok(pool)
}
