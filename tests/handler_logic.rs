//! Handler logic exercised without a gateway or a live database: echo
//! rendering, record construction, and the log command's outcome text,
//! using an in-memory record store.

use std::sync::Mutex;

use chrono::Utc;
use scribe_bot::commands::{echo, insert, log};
use scribe_bot::database::records::{LogRecord, MessageRecord, NewLog, NewMessage};
use scribe_bot::database::store::RecordStore;
use scribe_bot::options::{OptionValue, ParsedOptions};
use scribe_bot::response::Responder;
use scribe_bot::HandlerError;
use serenity::async_trait;
use uuid::Uuid;

fn opts_from(pairs: Vec<(&str, OptionValue)>) -> ParsedOptions {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// In-memory stand-in for the PostgreSQL gateway.
#[derive(Default)]
struct MemoryStore {
    messages: Mutex<Vec<NewMessage>>,
    logs: Mutex<Vec<NewLog>>,
    fail_inserts: bool,
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_message(&self, record: NewMessage) -> Result<MessageRecord, sqlx::Error> {
        if self.fail_inserts {
            return Err(sqlx::Error::PoolClosed);
        }
        let mut messages = self.messages.lock().unwrap();
        messages.push(record.clone());
        Ok(MessageRecord {
            id: messages.len() as i64,
            author: record.author,
            input: record.input,
            created_at: Utc::now(),
        })
    }

    async fn insert_log(&self, record: NewLog) -> Result<LogRecord, sqlx::Error> {
        if self.fail_inserts {
            return Err(sqlx::Error::PoolClosed);
        }
        self.logs.lock().unwrap().push(record.clone());
        Ok(LogRecord {
            id: Uuid::new_v4(),
            author: record.author,
            started: Utc::now(),
            ended: None,
        })
    }
}

/// In-memory stand-in for the response sender, recording every attempted
/// send.
#[derive(Default)]
struct MemoryResponder {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

#[async_trait]
impl Responder for MemoryResponder {
    async fn send(&self, content: String) -> Result<(), HandlerError> {
        self.sent.lock().unwrap().push(content);
        if self.fail {
            return Err(HandlerError::Response(serenity::Error::Other(
                "delivery rejected",
            )));
        }
        Ok(())
    }
}

#[test]
fn echo_prefixes_author_when_asked() {
    let opts = opts_from(vec![
        ("message", OptionValue::String("hi".to_string())),
        ("author", OptionValue::Boolean(true)),
    ]);
    let content = echo::render(&opts, "Alice#0001").unwrap();
    assert_eq!(content, "**Alice#0001** says: hi");
}

#[test]
fn echo_is_verbatim_without_author_flag() {
    let opts = opts_from(vec![("message", OptionValue::String("hi".to_string()))]);
    assert_eq!(echo::render(&opts, "Alice#0001").unwrap(), "hi");

    let opts = opts_from(vec![
        ("message", OptionValue::String("hi".to_string())),
        ("author", OptionValue::Boolean(false)),
    ]);
    assert_eq!(echo::render(&opts, "Alice#0001").unwrap(), "hi");
}

#[test]
fn echo_fails_on_missing_message() {
    let opts = opts_from(vec![("author", OptionValue::Boolean(true))]);
    assert!(matches!(
        echo::render(&opts, "Alice#0001"),
        Err(HandlerError::MissingOption("message"))
    ));
}

#[test]
fn insert_builds_record_from_invocation() {
    let opts = opts_from(vec![("input", OptionValue::String("note".to_string()))]);
    let record = insert::build_record(&opts, "Bob#0002").unwrap();
    assert_eq!(record.author, "Bob#0002");
    assert_eq!(record.input, "note");
}

#[test]
fn insert_fails_on_missing_input() {
    let opts = opts_from(vec![]);
    assert!(matches!(
        insert::build_record(&opts, "Bob#0002"),
        Err(HandlerError::MissingOption("input"))
    ));
}

fn insert_opts(input: &str) -> ParsedOptions {
    opts_from(vec![("input", OptionValue::String(input.to_string()))])
}

#[tokio::test]
async fn insert_acknowledges_and_stores_exactly_one_record() {
    let store = MemoryStore::default();
    let responder = MemoryResponder::default();

    insert::acknowledge_then_persist(&insert_opts("note"), "Bob#0002", &responder, &store)
        .await
        .unwrap();

    assert_eq!(*responder.sent.lock().unwrap(), vec![insert::ACK.to_string()]);
    assert_eq!(
        *store.messages.lock().unwrap(),
        vec![NewMessage {
            author: "Bob#0002".to_string(),
            input: "note".to_string(),
        }]
    );
}

#[tokio::test]
async fn insert_acknowledges_even_when_persistence_fails() {
    let store = MemoryStore {
        fail_inserts: true,
        ..MemoryStore::default()
    };
    let responder = MemoryResponder::default();

    let outcome =
        insert::acknowledge_then_persist(&insert_opts("note"), "Bob#0002", &responder, &store)
            .await;

    // The acknowledgment went out exactly once before the insert failed.
    assert_eq!(*responder.sent.lock().unwrap(), vec![insert::ACK.to_string()]);
    assert!(matches!(outcome, Err(HandlerError::Persistence(_))));
}

#[tokio::test]
async fn insert_submits_record_when_delivery_fails() {
    let store = MemoryStore::default();
    let responder = MemoryResponder {
        fail: true,
        ..MemoryResponder::default()
    };

    let outcome =
        insert::acknowledge_then_persist(&insert_opts("note"), "Bob#0002", &responder, &store)
            .await;

    // One attempted send, and the record still reached the store.
    assert_eq!(responder.sent.lock().unwrap().len(), 1);
    assert_eq!(store.messages.lock().unwrap().len(), 1);
    assert!(matches!(outcome, Err(HandlerError::Response(_))));
}

#[tokio::test]
async fn insert_missing_input_sends_no_response() {
    let store = MemoryStore::default();
    let responder = MemoryResponder::default();

    let outcome =
        insert::acknowledge_then_persist(&opts_from(vec![]), "Bob#0002", &responder, &store).await;

    assert!(matches!(outcome, Err(HandlerError::MissingOption("input"))));
    assert!(responder.sent.lock().unwrap().is_empty());
    assert!(store.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn log_record_leaves_ended_unset() {
    let store = MemoryStore::default();
    let outcome = store
        .insert_log(NewLog {
            author: "Bob#0002".to_string(),
        })
        .await;

    let row = outcome.as_ref().unwrap();
    assert_eq!(row.author, "Bob#0002");
    assert!(row.ended.is_none());
    assert_eq!(log::response_content("Bob#0002", &outcome), "Successfully logged");
}

#[tokio::test]
async fn log_stores_one_record_and_responds_once() {
    let store = MemoryStore::default();
    let responder = MemoryResponder::default();

    log::open_log("Bob#0002", &responder, &store).await.unwrap();

    assert_eq!(
        *responder.sent.lock().unwrap(),
        vec!["Successfully logged".to_string()]
    );
    assert_eq!(
        *store.logs.lock().unwrap(),
        vec![NewLog {
            author: "Bob#0002".to_string(),
        }]
    );
}

#[tokio::test]
async fn log_failure_is_reported_to_the_author() {
    let store = MemoryStore {
        fail_inserts: true,
        ..MemoryStore::default()
    };
    let responder = MemoryResponder::default();

    // A failed insert is reported, not fatal: the flow still resolves Ok.
    log::open_log("Bob#0002", &responder, &store).await.unwrap();

    let sent = responder.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("**Bob#0002**"));
    assert_ne!(sent[0], "Successfully logged");
    // Nothing was stored for the failed invocation.
    assert!(store.logs.lock().unwrap().is_empty());
}
