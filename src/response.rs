//! The single chokepoint for interaction acknowledgments.
//!
//! Discord permits exactly one initial response per interaction; funneling
//! every send through a [`Responder`] keeps that invariant in one place.
//! The sender reports delivery failures as [`HandlerError::Response`] and
//! never decides policy itself (log vs. fail the invocation is the
//! handler's call). The trait seam exists so handler flows can be
//! exercised in tests without a live gateway.

use serenity::async_trait;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

use crate::error::HandlerError;

/// Delivers the one permitted acknowledgment for a single invocation.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn send(&self, content: String) -> Result<(), HandlerError>;
}

/// The live responder: sends a "channel message with source" response for
/// the interaction it was constructed around.
pub struct InteractionResponder<'a> {
    pub ctx: &'a Context,
    pub interaction: &'a CommandInteraction,
}

#[async_trait]
impl Responder for InteractionResponder<'_> {
    async fn send(&self, content: String) -> Result<(), HandlerError> {
        self.interaction
            .create_response(
                &self.ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new().content(content),
                ),
            )
            .await?;
        Ok(())
    }
}
