use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner
///
/// This function creates and starts the Discord bot client. It should be called
/// from within a tokio::spawn task since it will block until the bot shuts down.
///
/// # Arguments
/// - `token` - Discord bot token from configuration
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(token: &str) -> Result<(), AppError> {
    // Gateway intents - what events the bot will receive
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::DIRECT_MESSAGES;

    // Build the client
    let mut client = Client::builder(token, intents)
        .event_handler(Handler::new())
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
