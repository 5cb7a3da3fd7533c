//! The insert-only persistence gateway.
//!
//! Handlers construct records; this gateway owns write access. The trait
//! seam exists so handler logic can be exercised in tests without a live
//! PostgreSQL.

use serenity::async_trait;
use sqlx::PgPool;

use super::records::{LogRecord, MessageRecord, NewLog, NewMessage};

/// Append-only record sink. No update or delete operations are exposed.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts one message record, returning the row with its
    /// store-assigned id and creation timestamp.
    async fn insert_message(&self, record: NewMessage) -> Result<MessageRecord, sqlx::Error>;

    /// Inserts one log record, returning the row with its store-assigned
    /// id and start timestamp. `ended` is left NULL.
    async fn insert_log(&self, record: NewLog) -> Result<LogRecord, sqlx::Error>;
}

/// The PostgreSQL-backed gateway. The pool is shared across all concurrent
/// invocations; sqlx handles connection checkout.
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert_message(&self, record: NewMessage) -> Result<MessageRecord, sqlx::Error> {
        sqlx::query_as::<_, MessageRecord>(
            "INSERT INTO messages (author, input) VALUES ($1, $2) \
             RETURNING id, author, input, created_at",
        )
        .bind(&record.author)
        .bind(&record.input)
        .fetch_one(&self.pool)
        .await
    }

    async fn insert_log(&self, record: NewLog) -> Result<LogRecord, sqlx::Error> {
        sqlx::query_as::<_, LogRecord>(
            "INSERT INTO logs (author) VALUES ($1) \
             RETURNING id, author, started, ended",
        )
        .bind(&record.author)
        .fetch_one(&self.pool)
        .await
    }
}
