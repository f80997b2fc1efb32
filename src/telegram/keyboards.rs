//! Inline keyboards attached to bot replies

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use url::Url;

/// Label of the /start button
pub const JOIN_BUTTON_TEXT: &str = "Join";

/// Label of the button under a finished upload
pub const CREDIT_BUTTON_TEXT: &str = "❍ ᴄʀᴇᴀᴛᴇ ʙʏ ˹ ʙᴀʙʏ-ᴍᴜsɪᴄ ™˼𓅂";

/// Single URL button on its own row
fn single_link(text: &str, url: &Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(text, url.clone())]])
}

/// Keyboard sent with the welcome message
pub fn join_keyboard(promo_url: &Url) -> InlineKeyboardMarkup {
    single_link(JOIN_BUTTON_TEXT, promo_url)
}

/// Keyboard attached to the "hold the link" reply
pub fn credit_keyboard(promo_url: &Url) -> InlineKeyboardMarkup {
    single_link(CREDIT_BUTTON_TEXT, promo_url)
}
