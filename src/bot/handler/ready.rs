//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. This is the
//! first event received after authentication and indicates the bot is ready to
//! process other events.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
}
