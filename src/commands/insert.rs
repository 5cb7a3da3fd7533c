//! Implements the `/insert` command: acknowledge, then persist one message
//! record.

use serenity::async_trait;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::Context;

use super::{invocation_author, SlashCommand};
use crate::database::records::NewMessage;
use crate::database::store::RecordStore;
use crate::error::HandlerError;
use crate::options::ParsedOptions;
use crate::response::{InteractionResponder, Responder};

/// Sent before the insert: Discord allows roughly three seconds for the
/// initial response, which a slow insert could easily blow through.
pub const ACK: &str = "Added to the database!";

pub struct Insert;

#[async_trait]
impl SlashCommand for Insert {
    fn name(&self) -> &'static str {
        "insert"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Add information to the database")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "input",
                    "Contents of the information to add",
                )
                .required(true),
            )
    }

    async fn run(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
        opts: ParsedOptions,
        store: &dyn RecordStore,
    ) -> Result<(), HandlerError> {
        let author = invocation_author(interaction).tag();
        acknowledge_then_persist(&opts, &author, &InteractionResponder { ctx, interaction }, store)
            .await
    }
}

/// The insert flow: build the record, send the one acknowledgment, then
/// submit the record as a side channel — it goes to the store whether or
/// not the acknowledgment went through. A delivery failure takes
/// precedence in the returned error.
pub async fn acknowledge_then_persist(
    opts: &ParsedOptions,
    author_tag: &str,
    responder: &dyn Responder,
    store: &dyn RecordStore,
) -> Result<(), HandlerError> {
    let record = build_record(opts, author_tag)?;

    let ack = responder.send(ACK.to_string()).await;
    if let Err(err) = &ack {
        tracing::error!(author = %author_tag, error = %err, "could not send insert acknowledgment");
    }

    if let Err(err) = store.insert_message(record).await {
        tracing::error!(author = %author_tag, error = %err, "could not store message record");
        ack?;
        return Err(err.into());
    }

    ack
}

/// Constructs the message record from the invoking identity and the
/// required `input` option. Timestamp and id are left for the store.
pub fn build_record(opts: &ParsedOptions, author_tag: &str) -> Result<NewMessage, HandlerError> {
    Ok(NewMessage {
        author: author_tag.to_string(),
        input: opts.require_str("input")?.to_string(),
    })
}
