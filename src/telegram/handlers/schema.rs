//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::send_text;
use crate::telegram::classify::classify;
use crate::telegram::router::route;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in integration
/// tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(message_handler(deps))
        // Everything that is not a message (edits, reactions, member
        // updates, ...) is dropped on purpose, with a trace of the drop.
        .branch(dptree::entry().endpoint(ignore_update))
}

/// Handler for incoming messages: classify once, route, reply
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
        let deps = deps.clone();
        async move {
            // Without a sender there is no session to key; channel posts
            // and the like fall out here.
            let Some(user) = msg.from.as_ref().map(|u| u.id) else {
                log::debug!("Ignoring message without a sender in chat {}", msg.chat.id);
                return Ok(());
            };

            let inbound = classify(&msg);
            log::debug!("Classified message from user {} as {:?}", user, inbound);

            if let Some(reply) = route(&deps.store, user, inbound).await {
                send_text(&bot, msg.chat.id, &reply).await;
            }
            Ok(())
        }
    })
}

/// Terminal branch for update kinds the bot does not react to
async fn ignore_update(update: Update) -> Result<(), HandlerError> {
    log::debug!("Ignoring unhandled update {:?}", update.id);
    Ok(())
}
