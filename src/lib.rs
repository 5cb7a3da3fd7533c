// Library entry so integration tests and external tools can reference internal modules.
// Re-export the same modules used by the binary (`main.rs`).
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod handler;
pub mod model;
pub mod options;
pub mod response;

// Convenient re-exports for frequently used types.
pub use error::HandlerError;
pub use model::AppState;
