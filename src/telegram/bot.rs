//! Bot initialization and outbound sending

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::types::BotCommand;

use crate::core::config;
use crate::core::error::{AppError, AppResult};

/// Creates a Bot instance with custom or default API URL
///
/// The token comes from `BOT_TOKEN` (or `TELOXIDE_TOKEN`); a local Bot API
/// server can be selected via `BOT_API_URL`.
pub fn create_bot() -> AppResult<Bot> {
    let token = config::BOT_TOKEN.as_str();
    if token.is_empty() {
        return Err(AppError::Config(
            "BOT_TOKEN environment variable not set".to_string(),
        ));
    }

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = if let Ok(bot_api_url) = std::env::var("BOT_API_URL") {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(&bot_api_url)?;
        Bot::with_client(token, client).set_api_url(url)
    } else {
        Bot::with_client(token, client)
    };

    Ok(bot)
}

/// Sets up bot commands in the Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> AppResult<()> {
    bot.set_my_commands(vec![BotCommand::new("start", "join an event by code")])
        .await?;

    Ok(())
}

/// Sends a plain text reply, swallowing delivery failures.
///
/// A failed send is logged for the operator; the sender simply sees no
/// reply. Nothing here may abort handling of the current update.
pub async fn send_text(bot: &Bot, chat_id: ChatId, text: &str) {
    if let Err(e) = bot.send_message(chat_id, text).await {
        log::error!("Failed to send message to chat {}: {}", chat_id, e);
    }
}
