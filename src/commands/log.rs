//! Implements the `/log` command: open a new log record for the invoking
//! user.
//!
//! The record's `ended` column stays NULL; there is no close-log command.

use serenity::async_trait;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

use super::{invocation_author, SlashCommand};
use crate::database::records::{LogRecord, NewLog};
use crate::database::store::RecordStore;
use crate::error::HandlerError;
use crate::options::ParsedOptions;
use crate::response::{InteractionResponder, Responder};

pub struct Log;

#[async_trait]
impl SlashCommand for Log {
    fn name(&self) -> &'static str {
        "log"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Open a new log entry")
    }

    async fn run(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
        _opts: ParsedOptions,
        store: &dyn RecordStore,
    ) -> Result<(), HandlerError> {
        let author = invocation_author(interaction).tag();
        open_log(&author, &InteractionResponder { ctx, interaction }, store).await
    }
}

/// The log flow: submit the record, then send the one response describing
/// the outcome. A persistence failure is reported to the user and logged;
/// it never takes the process down.
pub async fn open_log(
    author_tag: &str,
    responder: &dyn Responder,
    store: &dyn RecordStore,
) -> Result<(), HandlerError> {
    let outcome = store
        .insert_log(NewLog {
            author: author_tag.to_string(),
        })
        .await;

    match &outcome {
        Ok(record) => {
            tracing::info!(id = %record.id, author = %author_tag, "opened log record");
        }
        Err(err) => {
            // Reported to the user below; the process keeps running.
            tracing::error!(author = %author_tag, error = %err, "could not store log record");
        }
    }

    responder.send(response_content(author_tag, &outcome)).await
}

/// The user-facing text for a log invocation's outcome.
pub fn response_content(author_tag: &str, outcome: &Result<LogRecord, sqlx::Error>) -> String {
    match outcome {
        Ok(_) => "Successfully logged".to_string(),
        Err(_) => format!("Could not open a log entry for **{author_tag}**, please try again later."),
    }
}
