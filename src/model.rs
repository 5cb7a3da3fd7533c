//! Shared application state stored in serenity's global `TypeMap`.

use std::sync::Arc;

use serenity::prelude::{Context, TypeMapKey};

use crate::database::store::RecordStore;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for safe access from
/// the event handler; it is read-only after startup.
pub struct AppState {
    /// The insert-only gateway to the PostgreSQL store.
    pub store: Arc<dyn RecordStore>,
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fetches the shared state from the context's `TypeMap`.
    pub async fn from_ctx(ctx: &Context) -> Option<Arc<AppState>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}
