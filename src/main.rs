use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use sqlx::postgres::PgPoolOptions;

use scribe_bot::commands::CommandRegistry;
use scribe_bot::config::Config;
use scribe_bot::database;
use scribe_bot::database::store::PgRecordStore;
use scribe_bot::handler::Handler;
use scribe_bot::AppState;

#[tokio::main]
async fn main() {
    // A .env file is a local convenience; in deployment the variables come
    // from the environment directly.
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    if config.auth_token.is_empty() {
        panic!("AUTH_TOKEN is not set.");
    }

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.postgres.connection_url())
        .await
        .expect("Failed to connect to PostgreSQL.");

    database::init::setup_schema(&pool)
        .await
        .expect("Failed to set up the database schema.");
    tracing::info!("Connected to PostgreSQL successfully");

    // Interactions arrive with GUILDS in Serenity v0.12.
    let intents = GatewayIntents::GUILDS;
    let mut builder = Client::builder(&config.auth_token, intents).event_handler(Handler {
        registry: CommandRegistry::new(),
        guild_id: config.guild_id,
    });
    if let Some(app_id) = config.application_id() {
        builder = builder.application_id(app_id);
    }
    let mut client = builder.await.expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(Arc::new(AppState::new(Arc::new(PgRecordStore::new(pool)))));
    }

    // Close the gateway session on interrupt. In-flight handlers are not
    // awaited; a documented limitation of the shutdown path.
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "could not listen for the interrupt signal");
            return;
        }
        tracing::info!("interrupt received, closing the gateway session");
        shard_manager.shutdown_all().await;
    });

    if let Err(why) = client.start().await {
        tracing::error!(error = ?why, "client error");
    }
}
