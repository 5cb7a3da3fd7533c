//! Implements the `/echo` command: repeat a message back, optionally
//! crediting its author.

use serenity::async_trait;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::Context;

use super::{invocation_author, SlashCommand};
use crate::database::store::RecordStore;
use crate::error::HandlerError;
use crate::options::ParsedOptions;
use crate::response::{InteractionResponder, Responder};

pub struct Echo;

#[async_trait]
impl SlashCommand for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Say something through the bot")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "message",
                    "Contents of the message",
                )
                .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::Boolean,
                "author",
                "Whether to prepend the message's author",
            ))
    }

    async fn run(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
        opts: ParsedOptions,
        _store: &dyn RecordStore,
    ) -> Result<(), HandlerError> {
        let author = invocation_author(interaction).tag();
        let content = render(&opts, &author)?;
        InteractionResponder { ctx, interaction }.send(content).await
    }
}

/// Builds the echoed content. With `author=true` the message is prefixed
/// with the invoking identity's display form; otherwise it is returned
/// verbatim.
pub fn render(opts: &ParsedOptions, author_tag: &str) -> Result<String, HandlerError> {
    let message = opts.require_str("message")?;
    let mut content = String::new();
    if opts.get_bool("author").unwrap_or(false) {
        content.push_str("**");
        content.push_str(author_tag);
        content.push_str("** says: ");
    }
    content.push_str(message);
    Ok(content)
}
