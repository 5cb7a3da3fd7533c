//! Record types persisted by the Insert and Log commands.
//!
//! Both record kinds are append-only: created once per handled invocation,
//! never mutated or deleted by this bot. The `New*` structs are what the
//! handlers construct; the `*Record` structs carry the store-assigned
//! identifiers and timestamps back out.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A message record as the handler constructs it. The primary key and
/// creation timestamp are left for the store to assign.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub author: String,
    pub input: String,
}

/// A persisted message row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: i64,
    pub author: String,
    pub input: String,
    pub created_at: DateTime<Utc>,
}

/// A log record as the handler constructs it: author only, everything else
/// store-assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLog {
    pub author: String,
}

/// A persisted log row. `ended` models an open interval; no code path ever
/// closes it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LogRecord {
    pub id: Uuid,
    pub author: String,
    pub started: DateTime<Utc>,
    pub ended: Option<DateTime<Utc>>,
}
