//! Telegram front end
//!
//! Thin glue between chat updates and the lookup service: commands, free-text
//! title queries and the inline-button views.

pub mod callback;
pub mod commands;
pub mod filter;
pub mod handlers;
pub mod keyboard;
pub mod messages;

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use crate::app::AppState;
use commands::Command;

pub type HandlerResult = anyhow::Result<()>;

/// Update routing: commands, then free text, then button presses
pub fn schema() -> UpdateHandler<anyhow::Error> {
    let message_handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(commands::handle_command),
        )
        .branch(dptree::endpoint(handlers::handle_text));

    let callback_handler = Update::filter_callback_query().endpoint(handlers::handle_callback);

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}

/// Long-poll Telegram until Ctrl+C
pub async fn run(state: Arc<AppState>) {
    let bot = Bot::new(state.config.telegram_token.clone());

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    info!("Starting Telegram polling");
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .default_handler(|update| async move {
            debug!(update_id = ?update.id, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("Telegram polling stopped");
}
