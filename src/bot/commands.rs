//! Slash commands

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;

use super::HandlerResult;
use super::messages;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Comandos disponibles:")]
pub enum Command {
    #[command(description = "mensaje de bienvenida")]
    Start,
    #[command(description = "cómo usar el bot")]
    Help,
    #[command(description = "información sobre el bot")]
    About,
}

impl Command {
    pub fn reply_text(&self) -> &'static str {
        match self {
            Command::Start => messages::WELCOME,
            Command::Help => messages::HELP,
            Command::About => messages::ABOUT,
        }
    }
}

pub async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> HandlerResult {
    tracing::debug!(chat_id = %msg.chat.id, command = ?cmd, "Command received");

    bot.send_message(msg.chat.id, cmd.reply_text())
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
