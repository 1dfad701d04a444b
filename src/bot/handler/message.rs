use serenity::all::{Context, Message};

/// Handle message creation in any channel the bot can see
///
/// Replies with the sender's numeric user id as plain text. Players paste this
/// id into the game client, which uses it as the record key for the API. The
/// handler is stateless and performs no record store access.
pub async fn handle_message(ctx: Context, message: Message) {
    // Never answer other bots (or ourselves)
    if message.author.bot {
        return;
    }

    let user_id = message.author.id.get();

    if let Err(e) = message
        .reply(&ctx.http, format!("Your Discord user ID is: {}", user_id))
        .await
    {
        tracing::error!("Failed to reply with user id: {:?}", e);
    }
}
