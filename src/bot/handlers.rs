//! Message and button-press handlers
//!
//! Every failure below the handler boundary is logged and turned into a short
//! Spanish message; nothing internal reaches the chat.

use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatAction, InlineKeyboardMarkup, InputFile, Me, MessageId, ParseMode};
use tracing::{error, info, warn};
use url::Url;

use super::HandlerResult;
use super::callback::CallbackAction;
use super::filter::{self, ChatScope};
use super::keyboard;
use super::messages;
use crate::app::{AppState, current_year};
use crate::media::{MediaKind, ViewKind};
use crate::services::{LookupError, TmdbClient};

/// The message a button press should update
#[derive(Debug, Clone, Copy)]
struct Target {
    chat_id: ChatId,
    message_id: MessageId,
    has_photo: bool,
}

/// Free-text messages: treat them as title queries
pub async fn handle_text(bot: Bot, msg: Message, me: Me, state: Arc<AppState>) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let scope = if msg.chat.is_private() {
        ChatScope::Private
    } else {
        ChatScope::Group
    };
    let Some(query) = filter::extract_query(text, scope, me.user.username.as_deref()) else {
        return Ok(());
    };

    if let Err(e) = reply_with_match(&bot, msg.chat.id, &query, &state).await {
        error!(chat_id = %msg.chat.id, query = %query, error = %e, "Error handling message");
        bot.send_message(msg.chat.id, messages::MESSAGE_RETRY).await?;
    }
    Ok(())
}

async fn reply_with_match(bot: &Bot, chat_id: ChatId, query: &str, state: &AppState) -> Result<()> {
    bot.send_chat_action(chat_id, ChatAction::Typing).await?;

    let best = match state.lookup.find_best_match(query).await {
        Ok(best) => best,
        Err(LookupError::NoMatch { .. }) => {
            info!(query = %query, "No results for query");
            bot.send_message(chat_id, messages::not_found(query))
                .parse_mode(ParseMode::Html)
                .await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let header = messages::title_header(&best.display_title, best.release_year);
    let buttons = keyboard::info_keyboard(best.id, best.kind);

    if let Some(poster) = TmdbClient::poster_url(best.poster_path.as_deref()) {
        match send_poster(bot, chat_id, &poster, &header, buttons.clone()).await {
            Ok(()) => return Ok(()),
            Err(e) => warn!(poster = %poster, error = %e, "Failed to send poster, falling back to text"),
        }
    }

    bot.send_message(chat_id, header)
        .parse_mode(ParseMode::Html)
        .reply_markup(buttons)
        .await?;
    Ok(())
}

async fn send_poster(
    bot: &Bot,
    chat_id: ChatId,
    poster: &str,
    caption: &str,
    buttons: InlineKeyboardMarkup,
) -> Result<()> {
    let url = Url::parse(poster).context("Invalid poster URL")?;
    bot.send_photo(chat_id, InputFile::url(url))
        .caption(caption)
        .parse_mode(ParseMode::Html)
        .reply_markup(buttons)
        .await?;
    Ok(())
}

/// Button presses on a title reply
pub async fn handle_callback(bot: Bot, q: CallbackQuery, state: Arc<AppState>) -> HandlerResult {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let Some(message) = q.regular_message() else {
        warn!(data = %data, "Callback on an inaccessible message");
        return Ok(());
    };
    info!(data = %data, "Callback received");

    let target = Target {
        chat_id: message.chat.id,
        message_id: message.id,
        has_photo: message.photo().is_some(),
    };

    let action = match data.parse::<CallbackAction>() {
        Ok(action) => action,
        Err(e) => {
            error!(data = %data, error = %e, "Invalid callback data format");
            replace_content(&bot, target, messages::BUTTON_DATA_ERROR, None).await?;
            return Ok(());
        }
    };

    match action {
        CallbackAction::NewSearch => {
            bot.send_message(target.chat_id, messages::NEW_SEARCH_PROMPT)
                .parse_mode(ParseMode::Html)
                .await?;
        }
        CallbackAction::View { view, id, kind } => {
            if let Err(e) = show_view(&bot, target, view, id, kind, &state).await {
                error!(data = %data, error = %e, "Error in button callback");
                let retry = bot
                    .edit_message_text(target.chat_id, target.message_id, messages::CALLBACK_RETRY)
                    .reply_markup(keyboard::retry_keyboard(data))
                    .await;
                if retry.is_err() {
                    bot.send_message(target.chat_id, messages::CALLBACK_RETRY).await?;
                }
            }
        }
    }

    Ok(())
}

async fn show_view(
    bot: &Bot,
    target: Target,
    view: ViewKind,
    id: u64,
    kind: MediaKind,
    state: &AppState,
) -> Result<()> {
    bot.send_chat_action(target.chat_id, ChatAction::Typing).await?;

    let content = match state.lookup.render_view(view, id, kind, current_year()).await {
        Ok(content) => content,
        Err(LookupError::DetailsUnavailable { .. }) => {
            return replace_content(bot, target, messages::DETAILS_UNAVAILABLE, None).await;
        }
        Err(e) => return Err(e.into()),
    };

    replace_content(bot, target, &content, Some(keyboard::info_keyboard(id, kind))).await
}

/// Edit the pressed message in place (caption for photos, text otherwise).
/// Falls back to a new message when the edit is rejected, e.g. captions over
/// Telegram's length limit.
async fn replace_content(
    bot: &Bot,
    target: Target,
    text: &str,
    buttons: Option<InlineKeyboardMarkup>,
) -> Result<()> {
    let edited = if target.has_photo {
        let mut request = bot
            .edit_message_caption(target.chat_id, target.message_id)
            .caption(text)
            .parse_mode(ParseMode::Html);
        if let Some(buttons) = buttons.clone() {
            request = request.reply_markup(buttons);
        }
        request.await.map(|_| ())
    } else {
        let mut request = bot
            .edit_message_text(target.chat_id, target.message_id, text)
            .parse_mode(ParseMode::Html);
        if let Some(buttons) = buttons.clone() {
            request = request.reply_markup(buttons);
        }
        request.await.map(|_| ())
    };

    if let Err(e) = edited {
        warn!(chat_id = %target.chat_id, error = %e, "Error editing message, sending a new one");
        let mut request = bot
            .send_message(target.chat_id, text)
            .parse_mode(ParseMode::Html);
        if let Some(buttons) = buttons {
            request = request.reply_markup(buttons);
        }
        request.await?;
    }

    Ok(())
}
