//! Command registry and the handler seam.
//!
//! Each command lives in its own module and implements [`SlashCommand`]:
//! one declarative spec (`register`) pushed to Discord at startup, one
//! `run` invoked by the dispatcher. The registry maps command name to
//! handler so dispatch is a lookup, not a string-comparison chain.

pub mod echo;
pub mod insert;
pub mod log;

use std::collections::HashMap;

use serenity::async_trait;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::model::user::User;
use serenity::prelude::Context;

use crate::database::store::RecordStore;
use crate::error::HandlerError;
use crate::options::ParsedOptions;

/// A slash command: a name, a registration spec, and a handler that
/// produces exactly one response for an invocation.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    fn name(&self) -> &'static str;

    /// The declarative spec pushed to Discord's command registry.
    fn register(&self) -> CreateCommand;

    /// Handles one invocation. Must send at most one response; errors are
    /// logged at the dispatch boundary and never crash the process.
    async fn run(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
        opts: ParsedOptions,
        store: &dyn RecordStore,
    ) -> Result<(), HandlerError>;
}

/// The static command set, built once at startup and read-only thereafter.
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Box<dyn SlashCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let commands: Vec<Box<dyn SlashCommand>> = vec![
            Box::new(echo::Echo),
            Box::new(insert::Insert),
            Box::new(log::Log),
        ];
        let mut handlers = HashMap::new();
        for command in commands {
            handlers.insert(command.name(), command);
        }
        Self { handlers }
    }

    /// Looks a handler up by command name.
    pub fn find(&self, name: &str) -> Option<&dyn SlashCommand> {
        self.handlers.get(name).map(|handler| handler.as_ref())
    }

    /// The full spec list for a bulk-overwrite registration push.
    pub fn specs(&self) -> Vec<CreateCommand> {
        self.handlers.values().map(|handler| handler.register()).collect()
    }

    /// Registered command names, sorted for stable output.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The invoking identity. In a guild context the member's user takes
/// precedence over the generic interaction user.
pub fn invocation_author(interaction: &CommandInteraction) -> &User {
    interaction
        .member
        .as_deref()
        .map_or(&interaction.user, |member| &member.user)
}
