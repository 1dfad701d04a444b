//! Discord bot integration for the chat id lookup helper.
//!
//! This module provides the bot side-channel of the application: a listener that
//! tells players their numeric user id so they can plug it into the game client.
//! The bot is stateless and never touches the record store; it only reacts to
//! inbound messages.
//!
//! The bot is initialized during server startup and runs in a separate tokio task
//! to avoid blocking the HTTP server. A bot failure is logged and does not take
//! the server down.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability events
//! - `GUILD_MESSAGES` - Messages sent in guild channels
//! - `DIRECT_MESSAGES` - Messages sent to the bot directly

pub mod handler;
pub mod start;
