//! The gateway event handler: command registration on ready, and dispatch
//! of application-command interactions to their handlers.

use serenity::async_trait;
use serenity::model::application::{Command as GlobalCommand, Interaction};
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::{Context, EventHandler};

use crate::commands::{invocation_author, CommandRegistry};
use crate::options::ParsedOptions;
use crate::AppState;

/// Dispatcher for incoming gateway events. The registry and target guild
/// are fixed at construction and read-only thereafter.
pub struct Handler {
    pub registry: CommandRegistry,
    /// Registration scope: a specific guild, or `None` for global.
    pub guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        // Anything that is not an application command is not ours to handle.
        let Interaction::Command(command) = interaction else {
            return;
        };

        let name = command.data.name.clone();
        let Some(handler) = self.registry.find(&name) else {
            // The registry and the live handler set can transiently diverge
            // (e.g. mid-deploy); drop the invocation without a response.
            tracing::error!(command = %name, "received interaction for unknown command");
            return;
        };

        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            tracing::error!("AppState missing from TypeMap");
            return;
        };

        let opts = ParsedOptions::parse(&command.data.options);
        let author = invocation_author(&command).tag();
        match handler.run(&ctx, &command, opts, app_state.store.as_ref()).await {
            Ok(()) => tracing::info!(command = %name, author = %author, "handled command"),
            Err(err) => {
                // Invocation-local failure; the process keeps serving.
                tracing::error!(command = %name, author = %author, error = %err, "command failed");
            }
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("Logged in as {}", ready.user.tag());

        // Bulk overwrite: every startup fully replaces the remote command
        // set for the target scope with the local table.
        let specs = self.registry.specs();
        let result = match self.guild_id {
            Some(guild_id) => guild_id.set_commands(&ctx.http, specs).await,
            None => GlobalCommand::set_global_commands(&ctx.http, specs).await,
        };

        match result {
            Ok(registered) => {
                tracing::info!(count = registered.len(), "registered application commands");
            }
            Err(err) => {
                // Without registered commands no invocations will ever
                // arrive, so there is no useful degraded mode.
                tracing::error!(error = %err, "could not register commands, shutting down");
                ctx.shard.shutdown_clean();
            }
        }
    }
}
