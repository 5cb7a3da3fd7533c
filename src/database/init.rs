//! Startup schema setup for the record tables.

use sqlx::PgPool;

const CREATE_MESSAGES: &str = "\
CREATE TABLE IF NOT EXISTS messages (
    id BIGSERIAL PRIMARY KEY,
    author TEXT NOT NULL,
    input TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_LOGS: &str = "\
CREATE TABLE IF NOT EXISTS logs (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    author TEXT NOT NULL,
    started TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
    ended TIMESTAMPTZ
)";

/// Creates the backing tables if absent. Idempotent, safe to run on every
/// startup; a failure here is startup-fatal for the caller.
pub async fn setup_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_MESSAGES).execute(pool).await?;
    sqlx::query(CREATE_LOGS).execute(pool).await?;
    Ok(())
}
